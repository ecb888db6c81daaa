use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Grade,
    Stat,
};

/// The stat half of an inspiration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatInspiration {
    pub name: Stat,
    /// The stat's value at the time the inspiration was generated.
    pub value: u64,
    /// Star rating, 1 through 3.
    pub stars: u8,
}

/// The aptitude half of an inspiration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AptitudeInspiration {
    /// Display label, already translated from the aptitude's type color.
    pub name: String,
    pub grade: Grade,
    /// Star rating, 1 through 3.
    pub stars: u8,
}

/// A stat and aptitude bonus record generated once per completed career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspirationRecord {
    pub stat: StatInspiration,
    pub aptitude: AptitudeInspiration,
}
