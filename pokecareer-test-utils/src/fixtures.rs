use ahash::{
    HashMap,
    HashSet,
};
use pokecareer_data::{
    BattleTick,
    CareerPokemon,
    CareerState,
    CombatantState,
    CompletionType,
    Grade,
    Stat,
    StatMap,
    Strategy,
    TrainedPokemon,
    TypeColor,
};
use uuid::Uuid;

/// A canned mid-run career state.
pub fn career_state_for_test() -> CareerState {
    CareerState {
        turn: 10,
        state_version: 3,
        pokemon: CareerPokemon {
            name: "Charmander".to_owned(),
            primary_type: TypeColor::Red,
            type_aptitudes: HashMap::from_iter([
                (TypeColor::Red, Grade::A),
                (TypeColor::Blue, Grade::C),
            ]),
            learnable_abilities: HashSet::from_iter(["Ember".to_owned()]),
        },
        known_abilities: HashSet::from_iter(["Scratch".to_owned()]),
        move_hints: HashMap::from_iter([("Ember".to_owned(), 1)]),
        current_stats: StatMap::from_iter([
            (Stat::HP, 120),
            (Stat::Attack, 90),
            (Stat::Defense, 70),
            (Stat::Instinct, 60),
            (Stat::Speed, 80),
        ]),
        current_gym_index: 1,
        pokeclocks: 2,
        strategy: Strategy::Balanced,
    }
}

/// A canned Hall-of-Fame entry matching [`career_state_for_test`].
pub fn trained_pokemon_for_test() -> TrainedPokemon {
    let state = career_state_for_test();
    TrainedPokemon {
        uuid: Uuid::new_v4(),
        name: state.pokemon.name,
        primary_type: state.pokemon.primary_type,
        final_stats: state.current_stats,
        type_aptitudes: state.pokemon.type_aptitudes,
        known_abilities: state.known_abilities,
        inspirations: Vec::new(),
        completion: CompletionType::Victory,
    }
}

fn combatant(name: &str, current_hp: u64) -> CombatantState {
    CombatantState {
        name: name.to_owned(),
        current_hp,
        max_hp: 100,
        energy: 50,
        status_effects: Vec::new(),
    }
}

/// A battle log of the given length between "Charmander" and "Squirtle",
/// with a simple damage message on every tick after the first.
pub fn battle_log_for_test(len: usize) -> Vec<BattleTick> {
    (0..len)
        .map(|i| BattleTick {
            player_one: combatant("Charmander", 100u64.saturating_sub(i as u64)),
            player_two: combatant("Squirtle", 100u64.saturating_sub(2 * i as u64)),
            message: (i > 0).then(|| format!("Charmander dealt {i} damage to Squirtle")),
        })
        .collect()
}
