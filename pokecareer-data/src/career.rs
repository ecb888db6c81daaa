use ahash::{
    HashMap,
    HashSet,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use uuid::Uuid;

use crate::{
    Grade,
    InspirationRecord,
    Stat,
    StatMap,
    TypeColor,
};

/// Maximum turn index of a career run.
pub const MAX_TURN: u32 = 63;

/// The Pokemon being trained through a career.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPokemon {
    /// Display name.
    pub name: String,
    /// The Pokemon's primary type color.
    pub primary_type: TypeColor,
    /// Aptitude grade per type color.
    pub type_aptitudes: HashMap<TypeColor, Grade>,
    /// Moves currently available to learn.
    ///
    /// A move leaves this set once it is learned (it moves to
    /// [`CareerState::known_abilities`]).
    pub learnable_abilities: HashSet<String>,
}

/// The authoritative snapshot of an in-progress career run.
///
/// Every accepted mutation on the career service produces a whole new
/// snapshot with an incremented [`Self::state_version`]; the service never
/// sends partial patches.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerState {
    /// Current turn, monotonically non-decreasing within a run.
    pub turn: u32,
    /// Version counter used for optimistic concurrency.
    pub state_version: u64,
    /// The Pokemon being trained.
    pub pokemon: CareerPokemon,
    /// Moves the Pokemon has learned.
    pub known_abilities: HashSet<String>,
    /// Accumulated hint counters that discount learning costs.
    ///
    /// Tracked by the service, but also speculatively incremented client-side
    /// before the round trip confirms.
    pub move_hints: HashMap<String, u32>,
    /// Current stat values.
    pub current_stats: StatMap<u64>,
    /// Index of the next gym to challenge.
    pub current_gym_index: u32,
    /// Remaining pokeclock consumables.
    pub pokeclocks: u32,
    /// Active battle strategy.
    pub strategy: Strategy,
}

/// A battle strategy selected by the player.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Strategy {
    #[string = "Balanced"]
    #[default]
    Balanced,
    #[string = "Offensive"]
    Offensive,
    #[string = "Defensive"]
    Defensive,
    #[string = "Technical"]
    Technical,
}

/// How a career run ended.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum CompletionType {
    #[string = "Victory"]
    Victory,
    #[string = "Defeat"]
    Defeat,
}

/// A single training option generated for the current turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOption {
    /// The stat the option primarily trains.
    pub stat: Stat,
    /// Projected stat gains.
    pub gains: StatMap<u64>,
    /// Support cards appearing on this option.
    pub supports: Vec<String>,
}

/// An event triggered during a career turn.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerEvent {
    pub title: String,
    pub description: String,
    /// Choices presented to the player, resolved by index.
    pub choices: Vec<String>,
}

/// The resolved outcome of a career event choice.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventOutcome {
    pub message: String,
}

/// A completed career's Hall-of-Fame entry.
///
/// Immutable once produced by the career service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedPokemon {
    pub uuid: Uuid,
    pub name: String,
    pub primary_type: TypeColor,
    pub final_stats: StatMap<u64>,
    pub type_aptitudes: HashMap<TypeColor, Grade>,
    pub known_abilities: HashSet<String>,
    /// Inspirations generated at career end and attached permanently.
    pub inspirations: Vec<InspirationRecord>,
    pub completion: CompletionType,
}
