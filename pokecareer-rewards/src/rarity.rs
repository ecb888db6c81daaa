use std::sync::LazyLock;

use ahash::HashSet;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Rarity tier of a Pokemon, derived from fixed name tables.
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
pub enum Rarity {
    #[string = "Common"]
    #[default]
    Common,
    #[string = "Rare"]
    Rare,
    #[string = "Epic"]
    Epic,
    #[string = "Legendary"]
    Legendary,
}

static LEGENDARY_POKEMON: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from_iter([
        "Articuno", "Zapdos", "Moltres", "Mewtwo", "Mew", "Raikou", "Entei", "Suicune", "Lugia",
        "Ho-Oh", "Celebi",
    ])
});

static EPIC_POKEMON: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from_iter([
        "Dragonite",
        "Tyranitar",
        "Salamence",
        "Metagross",
        "Garchomp",
        "Snorlax",
        "Lapras",
        "Gyarados",
    ])
});

static RARE_POKEMON: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from_iter([
        "Venusaur",
        "Charizard",
        "Blastoise",
        "Meganium",
        "Typhlosion",
        "Feraligatr",
        "Alakazam",
        "Gengar",
        "Machamp",
        "Arcanine",
        "Pikachu",
    ])
});

/// Classifies a Pokemon name into a rarity tier.
///
/// Names absent from every table are common.
pub fn rarity_for_name(name: &str) -> Rarity {
    if LEGENDARY_POKEMON.contains(name) {
        Rarity::Legendary
    } else if EPIC_POKEMON.contains(name) {
        Rarity::Epic
    } else if RARE_POKEMON.contains(name) {
        Rarity::Rare
    } else {
        Rarity::Common
    }
}
