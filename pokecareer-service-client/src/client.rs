use ahash::HashMap;
use anyhow::Result;
use async_trait::async_trait;
use pokecareer_data::{
    BattleResult,
    CareerEvent,
    CareerPokemon,
    CareerState,
    CompletionType,
    EventOutcome,
    InspirationRecord,
    Stat,
    Strategy,
    TrainedPokemon,
    TrainingOption,
};

/// The service's answer to a version-checked career mutation.
///
/// A conflict is a recoverable condition, not an error: the service reports
/// its own current state so the client can resynchronize.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResponse<T> {
    /// The action was accepted and applied.
    Applied {
        /// The new authoritative career state.
        career_state: CareerState,
        /// Action-specific payload.
        data: T,
    },
    /// The expected version diverged from the service's version; the action
    /// was not applied.
    VersionConflict {
        /// The service's current authoritative state.
        current_state: CareerState,
    },
}

/// Client interface to the authoritative career service.
///
/// The transport behind this trait is an opaque request/response channel;
/// transport failures surface as [`crate::NetworkError`] in the error chain,
/// and outright rejections as [`crate::RequestValidationError`].
#[async_trait]
pub trait CareerServiceClient: Send + Sync {
    /// Starts a new career run.
    async fn start_career(
        &self,
        pokemon: CareerPokemon,
        supports: Vec<String>,
        initial_friendships: HashMap<String, u32>,
    ) -> Result<CareerState>;

    /// Reads the full current career state, if a run is active.
    async fn career_state(&self) -> Result<Option<CareerState>>;

    /// Trains a stat for the current turn.
    async fn train_stat(&self, stat: Stat, expected_version: u64) -> Result<ActionResponse<()>>;

    /// Rests for the current turn.
    async fn rest(&self, expected_version: u64) -> Result<ActionResponse<()>>;

    /// Generates training options for the current turn.
    async fn generate_training(&self) -> Result<(CareerState, Vec<TrainingOption>)>;

    /// Triggers a career event.
    async fn trigger_event(&self) -> Result<(CareerState, CareerEvent)>;

    /// Resolves a triggered event with the chosen option index.
    async fn resolve_event(
        &self,
        choice: usize,
        expected_version: u64,
    ) -> Result<ActionResponse<EventOutcome>>;

    /// Learns a move out of the learnable set.
    async fn learn_ability(
        &self,
        move_name: &str,
        expected_version: u64,
    ) -> Result<ActionResponse<()>>;

    /// Simulates a battle server-side and returns the finished battle log.
    async fn process_battle(
        &self,
        opponent: &str,
        is_gym_leader: bool,
        is_event_battle: bool,
        expected_version: u64,
    ) -> Result<ActionResponse<BattleResult>>;

    /// Completes the career and produces the Hall-of-Fame entry.
    async fn complete_career(
        &self,
        inspirations: Vec<InspirationRecord>,
        completion: CompletionType,
    ) -> Result<TrainedPokemon>;

    /// Abandons the career without producing a Hall-of-Fame entry.
    async fn abandon_career(&self) -> Result<()>;

    /// Consumes a pokeclock to retry a lost gym battle.
    async fn use_pokeclock(&self, expected_version: u64) -> Result<ActionResponse<()>>;

    /// Changes the active battle strategy.
    async fn change_strategy(
        &self,
        strategy: Strategy,
        expected_version: u64,
    ) -> Result<ActionResponse<()>>;
}
