use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The color grouping of a type, used for aptitude keys and support card
/// affinities.
///
/// Aptitudes are keyed by color on the wire; [`Self::type_name`] translates a
/// color to the type name shown to the player.
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
pub enum TypeColor {
    #[string = "Red"]
    #[default]
    Red,
    #[string = "Blue"]
    Blue,
    #[string = "Green"]
    Green,
    #[string = "Yellow"]
    Yellow,
    #[string = "Purple"]
    Purple,
    #[string = "Pink"]
    Pink,
    #[string = "Brown"]
    Brown,
    #[string = "Gray"]
    Gray,
}

impl TypeColor {
    /// The type name displayed for the color.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Red => "Fire",
            Self::Blue => "Water",
            Self::Green => "Grass",
            Self::Yellow => "Electric",
            Self::Purple => "Psychic",
            Self::Pink => "Fairy",
            Self::Brown => "Ground",
            Self::Gray => "Steel",
        }
    }
}

#[cfg(test)]
mod type_color_test {
    use crate::TypeColor;

    #[test]
    fn translates_color_to_type_name() {
        assert_eq!(TypeColor::Red.type_name(), "Fire");
        assert_eq!(TypeColor::Yellow.type_name(), "Electric");
        assert_eq!(TypeColor::Gray.type_name(), "Steel");
    }
}
