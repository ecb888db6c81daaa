use crate::RandomNumberGenerator;

/// Returns whether a random event with the given odds occurs.
pub fn chance(
    prng: &mut dyn RandomNumberGenerator,
    numerator: u64,
    denominator: u64,
) -> bool {
    prng.next().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn RandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random element from the given slice.
pub fn sample_slice<'a, T>(
    prng: &mut dyn RandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    if slice.len() == 1 {
        return slice.first();
    }
    let index = range(prng, 0, slice.len() as u64);
    slice.get(index as usize)
}

/// Samples an index from a list of weights, proportionally to each weight.
///
/// Returns `None` when the weights sum to zero.
pub fn weighted_index(prng: &mut dyn RandomNumberGenerator, weights: &[u64]) -> Option<usize> {
    let total = weights.iter().sum::<u64>();
    if total == 0 {
        return None;
    }
    let mut roll = range(prng, 0, total);
    for (index, weight) in weights.iter().enumerate() {
        if roll < *weight {
            return Some(index);
        }
        roll -= *weight;
    }
    None
}

#[cfg(test)]
mod rand_util_test {
    use crate::{
        RealRandomNumberGenerator,
        rand_util,
    };

    #[test]
    fn generates_number_in_range() {
        let mut prng = RealRandomNumberGenerator::new(None);
        let min = 5;
        let max = 12;
        for _ in 0..100 {
            let n = rand_util::range(&mut prng, min, max);
            assert!(n >= min);
            assert!(n < max);
        }
    }

    #[test]
    fn chance_matches_odds_over_many_draws() {
        let mut prng = RealRandomNumberGenerator::new(Some(100));
        let hits = (0..100000)
            .filter(|_| rand_util::chance(&mut prng, 1, 4))
            .count();
        let frequency = hits as f64 / 100000.0;
        assert!(frequency > 0.24 && frequency < 0.26, "frequency = {frequency}");
    }

    #[test]
    fn sample_slice_fails_empty_slice() {
        let mut prng = RealRandomNumberGenerator::new(Some(987654321));
        let items: Vec<&str> = Vec::new();
        assert_eq!(rand_util::sample_slice(&mut prng, &items), None);
    }

    #[test]
    fn samples_all_elements_eventually() {
        let mut prng = RealRandomNumberGenerator::new(Some(123456789));
        let items = ["a", "b", "c", "d"];
        let mut seen = [false; 4];
        for _ in 0..200 {
            let sampled = rand_util::sample_slice(&mut prng, &items).unwrap();
            seen[items.iter().position(|item| item == sampled).unwrap()] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn weighted_index_fails_zero_total() {
        let mut prng = RealRandomNumberGenerator::new(Some(1));
        assert_eq!(rand_util::weighted_index(&mut prng, &[0, 0, 0]), None);
        assert_eq!(rand_util::weighted_index(&mut prng, &[]), None);
    }

    #[test]
    fn weighted_index_never_picks_zero_weight() {
        let mut prng = RealRandomNumberGenerator::new(Some(42));
        for _ in 0..1000 {
            let index = rand_util::weighted_index(&mut prng, &[10, 0, 90]).unwrap();
            assert_ne!(index, 1);
        }
    }

    #[test]
    fn weighted_index_respects_proportions() {
        let mut prng = RealRandomNumberGenerator::new(Some(7));
        let mut counts = [0u64; 2];
        for _ in 0..100000 {
            counts[rand_util::weighted_index(&mut prng, &[90, 10]).unwrap()] += 1;
        }
        let frequency = counts[0] as f64 / 100000.0;
        assert!(frequency > 0.89 && frequency < 0.91, "frequency = {frequency}");
    }
}
