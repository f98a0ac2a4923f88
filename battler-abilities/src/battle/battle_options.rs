use battler_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
use serde::{
    Deserialize,
    Serialize,
};

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

fn default_true() -> bool {
    true
}

/// Options that change how abilities behave in a battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleOptions {
    /// The seed for random number generation.
    ///
    /// If not set, a random seed is generated.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Are passive abilities evaluated?
    ///
    /// If set to `false`, only the primary ability of each Mon ever applies.
    #[serde(default = "default_true")]
    pub passive_abilities: bool,

    /// Should ability indicators reveal the name of the ability?
    ///
    /// If set to `false`, ability indicators in the event log only identify the Mon.
    #[serde(default = "default_true")]
    pub reveal_abilities: bool,

    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,
}

impl Default for BattleOptions {
    fn default() -> Self {
        Self {
            seed: None,
            passive_abilities: true,
            reveal_abilities: true,
            rng_factory: default_rng_factory(),
        }
    }
}
