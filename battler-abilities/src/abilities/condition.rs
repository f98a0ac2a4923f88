use std::{
    fmt,
    fmt::Debug,
    sync::Arc,
};

use crate::{
    battle::{
        Battle,
        BattlerTagType,
        MonHandle,
        TerrainType,
        WeatherType,
    },
    mons::Status,
};

/// A predicate that gates whether an ability or attribute can apply.
///
/// Conditions are pure. They are evaluated against an immutable battle in both live and simulated
/// dispatch. Multiple conditions on the same ability or attribute must all hold.
#[derive(Clone)]
pub struct Condition(Arc<dyn Fn(&Battle, MonHandle) -> bool + Send + Sync>);

impl Condition {
    /// Creates a condition from a custom predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Battle, MonHandle) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Evaluates the condition for a Mon.
    pub fn evaluate(&self, battle: &Battle, mon: MonHandle) -> bool {
        (self.0)(battle, mon)
    }

    /// The effective weather is one of the given weathers.
    ///
    /// Weather suppressed by an ability on the field does not count.
    pub fn weather_is(weathers: &[WeatherType]) -> Self {
        let weathers = weathers.to_vec();
        Self::new(move |battle, _| {
            battle
                .effective_weather()
                .is_some_and(|weather| weathers.contains(&weather))
        })
    }

    /// The terrain is one of the given terrains.
    pub fn terrain_is(terrains: &[TerrainType]) -> Self {
        let terrains = terrains.to_vec();
        Self::new(move |battle, _| {
            battle
                .field
                .terrain_type()
                .is_some_and(|terrain| terrains.contains(&terrain))
        })
    }

    /// The Mon has any status.
    pub fn has_status() -> Self {
        Self::new(|battle, mon| battle.mon(mon).is_ok_and(|mon| mon.status.is_some()))
    }

    /// The Mon has one of the given statuses.
    pub fn status_is(statuses: &[Status]) -> Self {
        let statuses = statuses.to_vec();
        Self::new(move |battle, mon| {
            battle
                .mon(mon)
                .is_ok_and(|mon| mon.status.is_some_and(|status| statuses.contains(&status)))
        })
    }

    /// The Mon's HP is below the given ratio of its maximum HP.
    pub fn hp_ratio_below(ratio: f64) -> Self {
        Self::new(move |battle, mon| battle.mon(mon).is_ok_and(|mon| mon.hp_ratio() < ratio))
    }

    /// The Mon has the given tag.
    pub fn has_tag(tag_type: BattlerTagType) -> Self {
        Self::new(move |battle, mon| battle.mon(mon).is_ok_and(|mon| mon.has_tag(tag_type)))
    }

    /// The Mon is holding an item.
    pub fn holding_item() -> Self {
        Self::new(|battle, mon| battle.mon(mon).is_ok_and(|mon| mon.item.is_some()))
    }
}

impl Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition")
    }
}
