use pokecareer_data::{
    Grade,
    StatMap,
};

/// Ascending thresholds over the total stat sum, one per grade.
const GRADE_THRESHOLDS: [(u64, Grade); 16] = [
    (0, Grade::F),
    (150, Grade::FPlus),
    (300, Grade::E),
    (450, Grade::EPlus),
    (600, Grade::D),
    (750, Grade::DPlus),
    (900, Grade::C),
    (1050, Grade::CPlus),
    (1200, Grade::B),
    (1400, Grade::BPlus),
    (1600, Grade::A),
    (1800, Grade::APlus),
    (2000, Grade::S),
    (2200, Grade::SPlus),
    (2400, Grade::UU),
    (2800, Grade::UUPlus),
];

/// The grade for a total stat sum.
pub fn grade_for_total(total: u64) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .rev()
        .find(|(min, _)| total >= *min)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}

/// The grade for a stat vector.
///
/// Deterministic over the sum of the values, so the result is independent of
/// the map's iteration order and of which Pokemon carries the stats.
pub fn grade_for_stats(stats: &StatMap<u64>) -> Grade {
    grade_for_total(stats.values().sum())
}
