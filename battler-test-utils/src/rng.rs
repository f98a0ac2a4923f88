use std::{
    any::Any,
    collections::hash_map::Entry,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use battler_abilities::battle::Battle;
use battler_prng::{
    PrngState,
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// A controlled random number generator, for tests that need fine-grained control over battle RNG.
///
/// Forks carry the fake values that have not been consumed yet, so a value inserted for a
/// position in the sequence is returned whether the battle or one of its forks draws it.
#[derive(Clone)]
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: RealPseudoRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: RealPseudoRandomNumberGenerator::new(seed),
        }
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        // Roll the underlying RNG to keep the sequence consistent, even if we do not use the value.
        let next = self.real.next();
        self.count += 1;
        let fake_entry = self.fake_values.entry(self.count);
        match fake_entry {
            Entry::Occupied(fake_entry) => fake_entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn state(&self) -> PrngState {
        self.real.state()
    }

    // The sequence count is not part of the saved state, so fake values stay keyed to draws.
    fn restore(&mut self, state: PrngState) {
        self.real.restore(state)
    }

    fn fork(&self) -> Box<dyn PseudoRandomNumberGenerator> {
        Box::new(self.clone())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl ControlledRandomNumberGenerator {
    pub fn sequence_count(&self) -> usize {
        self.count
    }

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

/// Returns the controlled random number generator of a battle built with one.
pub fn get_controlled_rng_for_battle(
    battle: &mut Battle,
) -> Option<&mut ControlledRandomNumberGenerator> {
    battle
        .prng()
        .as_any_mut()
        .downcast_mut::<ControlledRandomNumberGenerator>()
}
