use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A letter grade, ordered from worst to best.
///
/// Grades are recomputed from stored stats when displayed; they are never
/// persisted as derived state.
#[derive(
    Debug,
    Default,
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
pub enum Grade {
    #[string = "F"]
    #[default]
    F,
    #[string = "F+"]
    FPlus,
    #[string = "E"]
    E,
    #[string = "E+"]
    EPlus,
    #[string = "D"]
    D,
    #[string = "D+"]
    DPlus,
    #[string = "C"]
    C,
    #[string = "C+"]
    CPlus,
    #[string = "B"]
    B,
    #[string = "B+"]
    BPlus,
    #[string = "A"]
    A,
    #[string = "A+"]
    APlus,
    #[string = "S"]
    S,
    #[string = "S+"]
    SPlus,
    #[string = "UU"]
    UU,
    #[string = "UU+"]
    UUPlus,
}
