use std::sync::Arc;

use battler_prng::PseudoRandomNumberGenerator;

use crate::{
    abilities::AbilityCatalog,
    battle::{
        Battle,
        BattleOptions,
        Field,
        FieldData,
        Mon,
        MonData,
        TerrainType,
        WeatherType,
    },
    error::{
        Error,
        WrapResultError,
    },
};

/// Object for building a [`Battle`].
///
/// Mons are assigned handles in the order they are added.
#[derive(Default)]
pub struct BattleBuilder {
    options: BattleOptions,
    catalog: Option<Arc<AbilityCatalog>>,
    field: FieldData,
    mons: Vec<MonData>,
}

impl BattleBuilder {
    /// Creates a new [`BattleBuilder`].
    pub fn new(options: BattleOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Sets the seed for random number generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    /// Sets the ability catalog.
    ///
    /// If not set, the default catalog is used.
    pub fn with_catalog(mut self, catalog: Arc<AbilityCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets the function for creating the battle's random number generator.
    pub fn with_rng_factory(
        mut self,
        rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,
    ) -> Self {
        self.options.rng_factory = rng_factory;
        self
    }

    /// Enables or disables passive abilities.
    pub fn with_passive_abilities(mut self, passive_abilities: bool) -> Self {
        self.options.passive_abilities = passive_abilities;
        self
    }

    /// Sets the weather at the start of the battle.
    pub fn with_weather(mut self, weather: WeatherType) -> Self {
        self.field.weather = Some(weather);
        self
    }

    /// Sets the terrain at the start of the battle.
    pub fn with_terrain(mut self, terrain: TerrainType) -> Self {
        self.field.terrain = Some(terrain);
        self
    }

    /// Adds a Mon to the battle.
    pub fn add_mon(mut self, mon: MonData) -> Self {
        self.mons.push(mon);
        self
    }

    /// Builds the battle.
    ///
    /// Fails if any Mon has an ability that is not in the catalog.
    pub fn build(self) -> Result<Battle, Error> {
        let catalog = self
            .catalog
            .unwrap_or_else(AbilityCatalog::default_catalog);
        for mon in &self.mons {
            for ability in [Some(mon.ability), mon.passive_ability].into_iter().flatten() {
                catalog
                    .ability(ability)
                    .wrap_error_with_format(format_args!("invalid mon {}", mon.name))?;
            }
        }
        let mons = self.mons.into_iter().map(Mon::new).collect();
        Ok(Battle::new(
            self.options,
            catalog,
            mons,
            Field::new(self.field),
        ))
    }
}
