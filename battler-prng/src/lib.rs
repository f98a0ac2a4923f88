pub mod rand_util;

use std::any::Any;

use rand::Rng;
use serde::{
    Deserialize,
    Serialize,
};

/// A saved position in a random number generation sequence.
///
/// Restoring a generator to a saved state replays the exact same sequence from that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrngState {
    pub initial_seed: u64,
    pub seed: u64,
}

/// A pseudo-random number generator, created with the intention of using a random number generator
/// that can be deterministically "replayed" for battle simulations.
///
/// Generators can be forked. A fork continues the sequence independently of its parent, which
/// allows speculative evaluation (such as a simulated ability application) to draw the same
/// numbers the real evaluation would without advancing the parent.
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// Returns the initial seed the generator was created with.
    ///
    /// The initial seed can be used to replay the random number generation sequence.
    fn initial_seed(&self) -> u64;

    /// Returns the next integer in the sequence.
    fn next(&mut self) -> u64;

    /// Returns the current position in the sequence.
    fn state(&self) -> PrngState;

    /// Moves the generator to a previously saved position.
    fn restore(&mut self, state: PrngState);

    /// Creates an independent copy of the generator at its current position.
    fn fork(&self) -> Box<dyn PseudoRandomNumberGenerator>;

    /// Mutable cast to [`Any`] for testing.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A real implementation of [`PseudoRandomNumberGenerator`].
#[derive(Debug, Clone)]
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    seed: u64,
}

impl RealPseudoRandomNumberGenerator {
    /// Creates a new random number generator.
    ///
    /// If two random number generators are created with the same seed, their output should be
    /// exactly the same.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(Self::generate_seed);
        Self {
            initial_seed: seed,
            seed,
        }
    }

    fn generate_seed() -> u64 {
        let mut rng = rand::rng();
        rng.random()
    }

    /// Linear Congruential Generator (LCRNG).
    fn next_seed(seed: u64) -> u64 {
        const A: u64 = 0x5D588B656C078965;
        const C: u64 = 0x0000000000269EC3;
        seed.wrapping_mul(A).wrapping_add(C)
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.seed = Self::next_seed(self.seed);
        // Use the upper 32 bits. The lower ones are predictable in some situations.
        self.seed >> 32
    }

    fn state(&self) -> PrngState {
        PrngState {
            initial_seed: self.initial_seed,
            seed: self.seed,
        }
    }

    fn restore(&mut self, state: PrngState) {
        self.initial_seed = state.initial_seed;
        self.seed = state.seed;
    }

    fn fork(&self) -> Box<dyn PseudoRandomNumberGenerator> {
        Box::new(self.clone())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
