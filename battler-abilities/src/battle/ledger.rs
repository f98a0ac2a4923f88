use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::AbilityId,
    common::FastHashSet,
    mons::Type,
};

/// State scoped to a single stint on the field.
///
/// Reset every time the Mon is switched in.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummonData {
    /// Abilities applied since the last switch-in.
    #[serde(default)]
    pub abilities_applied: FastHashSet<AbilityId>,
    /// Types that replace the Mon's own types, such as after a type change.
    #[serde(default)]
    pub types: Option<Vec<Type>>,
    /// An ability that replaces the Mon's primary ability, such as after copying another ability.
    #[serde(default)]
    pub ability: Option<AbilityId>,
    /// Are the Mon's abilities suppressed for the rest of its stint?
    #[serde(default)]
    pub ability_suppressed: bool,
    /// Number of turns the Mon has been on the field.
    #[serde(default)]
    pub turn_count: u32,
}

/// State scoped to the whole battle.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleData {
    /// Abilities applied or revealed since the battle started.
    #[serde(default)]
    pub abilities_applied: FastHashSet<AbilityId>,
    /// Number of times the Mon has been hit.
    #[serde(default)]
    pub hit_count: u32,
}

/// State scoped to a single turn.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnData {
    /// Abilities applied this turn.
    #[serde(default)]
    pub abilities_applied: FastHashSet<AbilityId>,
    /// Total damage taken this turn.
    #[serde(default)]
    pub damage_taken: u32,
}

/// The application ledger for a single Mon, across every scope.
///
/// The ledger can be saved and restored, which allows a battle to be resumed from the middle of a
/// sequence of ability applications.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityLedger {
    #[serde(default)]
    pub summon_data: SummonData,
    #[serde(default)]
    pub battle_data: BattleData,
    #[serde(default)]
    pub turn_data: TurnData,
}

impl AbilityLedger {
    /// Records that an ability applied.
    ///
    /// Returns `true` if the ability had not applied in any scope before.
    pub fn record(&mut self, ability: AbilityId) -> bool {
        let summon = self.summon_data.abilities_applied.insert(ability);
        let battle = self.battle_data.abilities_applied.insert(ability);
        let turn = self.turn_data.abilities_applied.insert(ability);
        summon || battle || turn
    }

    /// Has the ability applied since the last switch-in?
    pub fn applied_since_summon(&self, ability: AbilityId) -> bool {
        self.summon_data.abilities_applied.contains(&ability)
    }

    /// Has the ability applied or been revealed during the battle?
    pub fn applied_in_battle(&self, ability: AbilityId) -> bool {
        self.battle_data.abilities_applied.contains(&ability)
    }

    /// Has the ability applied this turn?
    pub fn applied_this_turn(&self, ability: AbilityId) -> bool {
        self.turn_data.abilities_applied.contains(&ability)
    }
}
