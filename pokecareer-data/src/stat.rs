use ahash::HashMap;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single trainable stat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "HP"]
    HP,
    #[string = "Attack"]
    #[alias = "atk"]
    Attack,
    #[string = "Defense"]
    #[alias = "def"]
    Defense,
    #[string = "Instinct"]
    #[alias = "ins"]
    Instinct,
    #[string = "Speed"]
    #[alias = "spe"]
    Speed,
}

impl Stat {
    /// All trainable stats, in canonical order.
    pub const ALL: [Stat; 5] = [
        Stat::HP,
        Stat::Attack,
        Stat::Defense,
        Stat::Instinct,
        Stat::Speed,
    ];
}

/// A map of values per stat.
pub type StatMap<T> = HashMap<Stat, T>;
