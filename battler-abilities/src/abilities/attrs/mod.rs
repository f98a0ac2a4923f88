mod attack;
mod defend;
mod faint;
mod items;
mod stat;
mod status;
mod summon;
mod trapped;
mod turn;
mod weather;

pub use attack::{
    PostAttackArgs,
    PostAttackAttr,
    PreAttackArgs,
    PreAttackAttr,
    PreRecoilDamageArgs,
    PreRecoilDamageAttr,
};
pub use defend::{
    PostDefendArgs,
    PostDefendAttr,
    PreDefendArgs,
    PreDefendAttr,
};
pub use faint::{
    PostFaintArgs,
    PostFaintAttr,
    PostKnockOutArgs,
    PostKnockOutAttr,
    PostVictoryAttr,
};
pub use items::{
    PostBattleArgs,
    PostBattleAttr,
    PostItemLostAttr,
};
pub use stat::{
    AllyStatMultiplierArgs,
    AllyStatMultiplierAttr,
    CriticalHitArgs,
    CriticalHitAttr,
    FieldStatMultiplierArgs,
    FieldStatMultiplierAttr,
    IntimidatedArgs,
    IntimidatedAttr,
    PostStatStageChangeArgs,
    PostStatStageChangeAttr,
    PreStatStageChangeArgs,
    PreStatStageChangeAttr,
    StatMultiplierArgs,
    StatMultiplierAttr,
};
pub use status::{
    PostSetStatusArgs,
    PostSetStatusAttr,
    PreApplyBattlerTagArgs,
    PreApplyBattlerTagAttr,
    PreSetStatusArgs,
    PreSetStatusAttr,
};
pub use summon::{
    PostBattleInitAttr,
    PostSummonAttr,
    PreLeaveFieldAttr,
    PreSwitchOutAttr,
};
pub use trapped::{
    CheckTrappedArgs,
    CheckTrappedAttr,
    TrapKind,
};
pub use turn::{
    PostDamageArgs,
    PostDamageAttr,
    PostTurnAttr,
};
pub use weather::{
    PostTerrainChangeArgs,
    PostTerrainChangeAttr,
    PostWeatherChangeArgs,
    PostWeatherChangeAttr,
    PostWeatherLapseArgs,
    PostWeatherLapseAttr,
    PreWeatherDamageArgs,
    PreWeatherDamageAttr,
    PreWeatherEffectArgs,
    PreWeatherEffectAttr,
};

use battler_prng::rand_util;

use crate::{
    abilities::{
        AbilityId,
        DecisionContext,
        EffectContext,
    },
    battle::{
        Battle,
        MonHandle,
        WeatherType,
        actions,
    },
    error::Error,
    mons::Status,
};

/// Rolls a percent chance, without consuming a random number for guaranteed events.
fn roll_percent(context: &mut DecisionContext, chance: u64) -> bool {
    chance >= 100 || context.chance(chance, 100)
}

/// The primary ability of a Mon, if it can be copied by another Mon.
fn copyable_ability(battle: &Battle, mon: MonHandle) -> Option<AbilityId> {
    let id = battle.mon(mon).ok()?.ability_in_slot(false)?;
    let ability = battle.catalog().get(id)?;
    if ability.unsuppressable() || matches!(id, AbilityId::Trace | AbilityId::Receiver) {
        return None;
    }
    Some(id)
}

/// Checks if a Mon leaving the field should clear weather its ability set.
///
/// The weather stays if another Mon on the field has the same ability.
fn clears_weather(context: &DecisionContext, weathers: &[WeatherType]) -> bool {
    let battle = context.battle();
    if !battle
        .field
        .weather_type()
        .is_some_and(|weather| weathers.contains(&weather))
    {
        return false;
    }
    let ability = context.ability().id();
    !battle.mon_handles().any(|other| {
        other != context.mon_handle()
            && battle.mon(other).is_ok_and(|other| {
                other.on_field()
                    && (other.ability_in_slot(false) == Some(ability)
                        || other.ability_in_slot(true) == Some(ability))
            })
    })
}

/// Checks if any of the statuses can be set on the target.
fn can_set_any_status(
    context: &mut DecisionContext,
    target: MonHandle,
    statuses: &[Status],
) -> bool {
    statuses
        .iter()
        .any(|status| context.can_set_status(target, *status))
}

/// Sets a random status out of the ones that can be set on the target.
fn set_random_status(
    context: &mut EffectContext,
    target: MonHandle,
    statuses: &[Status],
) -> Result<(), Error> {
    let source = context.mon_handle();
    let battle = context.battle_mut();
    let mut prng = battle.fork_prng();
    let settable = statuses
        .iter()
        .copied()
        .filter(|status| actions::can_set_status(battle, prng.as_mut(), target, *status))
        .collect::<Vec<_>>();
    if let Some(status) = rand_util::sample_slice(battle.prng(), &settable).copied() {
        actions::try_set_status(battle, target, status, Some(source))?;
    }
    Ok(())
}
