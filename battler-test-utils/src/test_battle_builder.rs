use std::sync::Arc;

use anyhow::Result;
use battler_abilities::{
    abilities::{
        AbilityCatalog,
        AbilityId,
    },
    battle::{
        Battle,
        BattleBuilder,
        BattleOptions,
        MonData,
        TerrainType,
        WeatherType,
    },
    mons::Type,
};

use crate::ControlledRandomNumberGenerator;

/// Battle builder object for integration tests.
///
/// Mons on side 0 are added with [`Self::add_mon_to_side_1`] and Mons on side 1 with
/// [`Self::add_mon_to_side_2`]. Handles are assigned in the order Mons are added.
pub struct TestBattleBuilder {
    options: BattleOptions,
    catalog: Option<Arc<AbilityCatalog>>,
    weather: Option<WeatherType>,
    terrain: Option<TerrainType>,
    mons: Vec<MonData>,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            options: BattleOptions::default(),
            catalog: None,
            weather: None,
            terrain: None,
            mons: Vec::new(),
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] from the battle builder.
    pub fn build(self) -> Result<Battle> {
        let mut builder = BattleBuilder::new(self.options);
        if self.controlled_rng {
            builder = builder.with_rng_factory(|seed: Option<u64>| {
                Box::new(ControlledRandomNumberGenerator::new(seed))
            });
        }
        if let Some(catalog) = self.catalog {
            builder = builder.with_catalog(catalog);
        }
        if let Some(weather) = self.weather {
            builder = builder.with_weather(weather);
        }
        if let Some(terrain) = self.terrain {
            builder = builder.with_terrain(terrain);
        }
        self.mons
            .into_iter()
            .fold(builder, |builder, mon| builder.add_mon(mon))
            .build()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_passive_abilities(mut self, passive_abilities: bool) -> Self {
        self.options.passive_abilities = passive_abilities;
        self
    }

    pub fn with_reveal_abilities(mut self, reveal_abilities: bool) -> Self {
        self.options.reveal_abilities = reveal_abilities;
        self
    }

    pub fn with_catalog(mut self, catalog: Arc<AbilityCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_weather(mut self, weather: WeatherType) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_terrain(mut self, terrain: TerrainType) -> Self {
        self.terrain = Some(terrain);
        self
    }

    /// Adds a fully configured Mon.
    pub fn add_mon(mut self, mon: MonData) -> Self {
        self.mons.push(mon);
        self
    }

    /// Adds a Mon with 100 HP to side 0.
    pub fn add_mon_to_side_1(self, name: &str, types: Vec<Type>, ability: AbilityId) -> Self {
        self.add_mon(MonData::new(name, types, 100, ability).on_side(0))
    }

    /// Adds a Mon with 100 HP to side 1.
    pub fn add_mon_to_side_2(self, name: &str, types: Vec<Type>, ability: AbilityId) -> Self {
        self.add_mon(MonData::new(name, types, 100, ability).on_side(1))
    }
}

impl Default for TestBattleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
