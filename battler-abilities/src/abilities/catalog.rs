use std::sync::Arc;

use log::warn;
use once_cell::sync::Lazy;

use crate::{
    abilities::{
        Ability,
        AbilityId,
        default_catalog,
    },
    common::FastHashMap,
    error::{
        Error,
        WrapOptionError,
    },
};

static DEFAULT_CATALOG: Lazy<Arc<AbilityCatalog>> =
    Lazy::new(|| Arc::new(default_catalog::build_default_catalog()));

/// An immutable collection of abilities, keyed by ID.
#[derive(Debug, Default)]
pub struct AbilityCatalog {
    abilities: FastHashMap<AbilityId, Ability>,
}

impl AbilityCatalog {
    /// Starts building a new catalog.
    pub fn builder() -> AbilityCatalogBuilder {
        AbilityCatalogBuilder::new()
    }

    /// The catalog of every ability implemented by this crate.
    ///
    /// Built once, on first use, and shared for the life of the process.
    pub fn default_catalog() -> Arc<AbilityCatalog> {
        DEFAULT_CATALOG.clone()
    }

    /// Looks up an ability by ID.
    pub fn ability(&self, id: AbilityId) -> Result<&Ability, Error> {
        self.abilities
            .get(&id)
            .wrap_not_found_error_with_format(format_args!("ability {id}"))
    }

    /// Looks up an ability by ID, if it exists.
    pub fn get(&self, id: AbilityId) -> Option<&Ability> {
        self.abilities.get(&id)
    }

    pub fn contains(&self, id: AbilityId) -> bool {
        self.abilities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Iterates over all abilities, in no particular order.
    pub fn abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.values()
    }
}

/// Object for building an [`AbilityCatalog`].
#[derive(Debug, Default)]
pub struct AbilityCatalogBuilder {
    abilities: FastHashMap<AbilityId, Ability>,
}

impl AbilityCatalogBuilder {
    /// Creates a new [`AbilityCatalogBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ability to the catalog.
    ///
    /// An ability registered twice replaces the first registration.
    pub fn ability(mut self, ability: Ability) -> Self {
        if let Some(replaced) = self.abilities.insert(ability.id(), ability) {
            warn!("{} was registered more than once", replaced.name());
        }
        self
    }

    /// Freezes the catalog.
    pub fn build(self) -> AbilityCatalog {
        AbilityCatalog {
            abilities: self.abilities,
        }
    }
}
