use std::collections::hash_map::Entry;

use ahash::{
    HashMap,
    HashMapExt,
};
use pokecareer_prng::{
    RandomNumberGenerator,
    RealRandomNumberGenerator,
};

/// A controlled random number generator, for tests that need fine-grained
/// control over reward rolls.
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: RealRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: RealRandomNumberGenerator::new(seed),
        }
    }

    /// The number of values generated so far.
    pub fn sequence_count(&self) -> usize {
        self.count
    }

    /// Fakes the value returned for the nth call (1-based) to
    /// [`RandomNumberGenerator::next`].
    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    pub fn insert_fake_values<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(iterable);
    }
}

impl RandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        // Roll the underlying generator to keep the sequence consistent, even
        // if we do not use the value.
        let next = self.real.next();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(fake_entry) => fake_entry.remove(),
            Entry::Vacant(_) => next,
        }
    }
}
