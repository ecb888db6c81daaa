use ahash::HashMap;
use pokecareer_data::{
    AptitudeInspiration,
    Grade,
    InspirationRecord,
    Stat,
    StatInspiration,
    StatMap,
    TypeColor,
};
use pokecareer_prng::{
    RandomNumberGenerator,
    rand_util,
};

/// Fallback aptitude for a Pokemon with no aptitudes at all.
const DEFAULT_APTITUDE: (TypeColor, Grade) = (TypeColor::Red, Grade::D);

/// Star weights (percent) for 1, 2, and 3 stars, conditioned on the sampled
/// stat's value.
///
/// These boundaries define the reward economy and must not drift.
fn stat_star_weights(value: u64) -> [u64; 3] {
    if value < 300 {
        [90, 10, 0]
    } else if value <= 400 {
        [50, 45, 5]
    } else {
        [20, 70, 10]
    }
}

fn stars_for_grade(grade: Grade) -> u8 {
    if grade >= Grade::A {
        3
    } else if grade >= Grade::B {
        2
    } else {
        1
    }
}

/// Generates an inspiration record for a completed career.
///
/// The stat and the aptitude are sampled uniformly among candidates (not
/// "best of"); the stat's star rating is then rolled from a distribution
/// conditioned on the stat's magnitude. Returns `None` when `stats` is empty.
///
/// `is_victory` is part of the career-end call contract but does not bias any
/// draw.
pub fn generate_inspiration(
    prng: &mut dyn RandomNumberGenerator,
    stats: &StatMap<u64>,
    aptitudes: &HashMap<TypeColor, Grade>,
    _is_victory: bool,
) -> Option<InspirationRecord> {
    if stats.is_empty() {
        return None;
    }

    let stat = *rand_util::sample_slice(prng, &Stat::ALL)?;
    let value = stats.get(&stat).copied().unwrap_or_default();
    let stars = match rand_util::weighted_index(prng, &stat_star_weights(value)) {
        Some(index) => index as u8 + 1,
        None => 1,
    };

    // Colors are sorted so that a given seed always replays the same pick.
    let mut colors = aptitudes.keys().copied().collect::<Vec<_>>();
    colors.sort_unstable();
    let (color, grade) = match rand_util::sample_slice(prng, &colors) {
        Some(color) => (*color, aptitudes.get(color).copied().unwrap_or_default()),
        None => DEFAULT_APTITUDE,
    };

    Some(InspirationRecord {
        stat: StatInspiration {
            name: stat,
            value,
            stars,
        },
        aptitude: AptitudeInspiration {
            name: color.type_name().to_owned(),
            grade,
            stars: stars_for_grade(grade),
        },
    })
}
