//! Typed entry points for dispatching each hook.
//!
//! Every `apply_*` function dispatches a hook on the abilities of a single Mon, live or simulated,
//! and returns whether any attribute applied. Result holders passed by reference are written by
//! the attributes that apply. `query_*` functions run a simulated dispatch against an immutable
//! battle, for use in decisions that must not have side effects.

use battler_prng::PseudoRandomNumberGenerator;

use crate::{
    abilities::{
        attrs::{
            AllyStatMultiplierArgs,
            AllyStatMultiplierAttr,
            CheckTrappedArgs,
            CheckTrappedAttr,
            CriticalHitArgs,
            CriticalHitAttr,
            FieldStatMultiplierArgs,
            FieldStatMultiplierAttr,
            IntimidatedArgs,
            IntimidatedAttr,
            PostAttackArgs,
            PostAttackAttr,
            PostBattleArgs,
            PostBattleAttr,
            PostBattleInitAttr,
            PostDamageArgs,
            PostDamageAttr,
            PostDefendArgs,
            PostDefendAttr,
            PostFaintArgs,
            PostFaintAttr,
            PostItemLostAttr,
            PostKnockOutArgs,
            PostKnockOutAttr,
            PostSetStatusArgs,
            PostSetStatusAttr,
            PostStatStageChangeArgs,
            PostStatStageChangeAttr,
            PostSummonAttr,
            PostTerrainChangeArgs,
            PostTerrainChangeAttr,
            PostTurnAttr,
            PostVictoryAttr,
            PostWeatherChangeArgs,
            PostWeatherChangeAttr,
            PostWeatherLapseArgs,
            PostWeatherLapseAttr,
            PreApplyBattlerTagArgs,
            PreApplyBattlerTagAttr,
            PreAttackArgs,
            PreAttackAttr,
            PreDefendArgs,
            PreDefendAttr,
            PreLeaveFieldAttr,
            PreRecoilDamageArgs,
            PreRecoilDamageAttr,
            PreSetStatusArgs,
            PreSetStatusAttr,
            PreStatStageChangeArgs,
            PreStatStageChangeAttr,
            PreSwitchOutAttr,
            PreWeatherDamageArgs,
            PreWeatherDamageAttr,
            PreWeatherEffectArgs,
            PreWeatherEffectAttr,
            StatMultiplierArgs,
            StatMultiplierAttr,
        },
        dispatch::{
            DispatchOptions,
            apply_ab_attrs,
            simulate_ab_attrs,
        },
    },
    battle::{
        Battle,
        BattlerTagType,
        MonHandle,
        TerrainType,
        WeatherType,
    },
    error::Error,
    mons::{
        Boost,
        Stat,
        Status,
        Type,
    },
    moves::{
        HitResult,
        MoveData,
    },
};

pub fn apply_post_battle_init(
    battle: &mut Battle,
    mon: MonHandle,
    simulated: bool,
) -> Result<bool, Error> {
    apply_ab_attrs::<PostBattleInitAttr>(battle, mon, &mut (), DispatchOptions::new(simulated))
}

pub fn apply_post_summon(
    battle: &mut Battle,
    mon: MonHandle,
    simulated: bool,
) -> Result<bool, Error> {
    apply_ab_attrs::<PostSummonAttr>(battle, mon, &mut (), DispatchOptions::new(simulated))
}

/// Abilities that apply on switching out show immediately, since the Mon leaves the field before
/// queued indicators would run.
pub fn apply_pre_switch_out(
    battle: &mut Battle,
    mon: MonHandle,
    simulated: bool,
) -> Result<bool, Error> {
    apply_ab_attrs::<PreSwitchOutAttr>(
        battle,
        mon,
        &mut (),
        DispatchOptions::new(simulated).show_ability_instant(),
    )
}

pub fn apply_pre_leave_field(
    battle: &mut Battle,
    mon: MonHandle,
    simulated: bool,
) -> Result<bool, Error> {
    apply_ab_attrs::<PreLeaveFieldAttr>(battle, mon, &mut (), DispatchOptions::new(simulated))
}

#[allow(clippy::too_many_arguments)]
pub fn apply_pre_defend(
    battle: &mut Battle,
    mon: MonHandle,
    attacker: MonHandle,
    move_data: &MoveData,
    effectiveness: f64,
    cancelled: &mut bool,
    damage_multiplier: &mut f64,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PreDefendArgs {
        attacker,
        move_data,
        effectiveness,
        cancelled,
        damage_multiplier,
    };
    apply_ab_attrs::<PreDefendAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_post_defend(
    battle: &mut Battle,
    mon: MonHandle,
    attacker: MonHandle,
    move_data: &MoveData,
    hit_result: HitResult,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PostDefendArgs {
        attacker,
        move_data,
        hit_result,
    };
    apply_ab_attrs::<PostDefendAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_pre_attack(
    battle: &mut Battle,
    mon: MonHandle,
    target: Option<MonHandle>,
    move_data: &MoveData,
    move_type: &mut Type,
    power_multiplier: &mut f64,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PreAttackArgs {
        target,
        move_data,
        move_type,
        power_multiplier,
    };
    apply_ab_attrs::<PreAttackAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_post_attack(
    battle: &mut Battle,
    mon: MonHandle,
    target: MonHandle,
    move_data: &MoveData,
    hit_result: HitResult,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PostAttackArgs {
        target,
        move_data,
        hit_result,
    };
    apply_ab_attrs::<PostAttackAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_stat_multiplier(
    battle: &mut Battle,
    mon: MonHandle,
    stat: Stat,
    multiplier: &mut f64,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = StatMultiplierArgs { stat, multiplier };
    apply_ab_attrs::<StatMultiplierAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

/// Applies the field stat multipliers of `mon` to a stat of `target`.
#[allow(clippy::too_many_arguments)]
pub fn apply_field_stat_multiplier(
    battle: &mut Battle,
    mon: MonHandle,
    target: MonHandle,
    stat: Stat,
    multiplier: &mut f64,
    already_applied: &mut bool,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = FieldStatMultiplierArgs {
        target,
        stat,
        multiplier,
        already_applied,
    };
    apply_ab_attrs::<FieldStatMultiplierAttr>(
        battle,
        mon,
        &mut args,
        DispatchOptions::new(simulated),
    )
}

/// Applies the ally stat multipliers of `mon` to a stat of `ally`.
pub fn apply_ally_stat_multiplier(
    battle: &mut Battle,
    mon: MonHandle,
    ally: MonHandle,
    stat: Stat,
    multiplier: &mut f64,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = AllyStatMultiplierArgs {
        ally,
        stat,
        multiplier,
    };
    apply_ab_attrs::<AllyStatMultiplierAttr>(
        battle,
        mon,
        &mut args,
        DispatchOptions::new(simulated),
    )
}

pub fn apply_critical_hit(
    battle: &mut Battle,
    mon: MonHandle,
    blocked: &mut bool,
    crit_stage: &mut u8,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = CriticalHitArgs {
        blocked,
        crit_stage,
    };
    apply_ab_attrs::<CriticalHitAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_pre_recoil_damage(
    battle: &mut Battle,
    mon: MonHandle,
    cancelled: &mut bool,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PreRecoilDamageArgs { cancelled };
    apply_ab_attrs::<PreRecoilDamageAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_pre_set_status(
    battle: &mut Battle,
    mon: MonHandle,
    status: Status,
    cancelled: &mut bool,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PreSetStatusArgs { status, cancelled };
    apply_ab_attrs::<PreSetStatusAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

/// Checks if abilities prevent a status, without any side effects.
pub fn query_pre_set_status(
    battle: &Battle,
    prng: &mut dyn PseudoRandomNumberGenerator,
    mon: MonHandle,
    status: Status,
    cancelled: &mut bool,
) -> bool {
    let mut args = PreSetStatusArgs { status, cancelled };
    simulate_ab_attrs::<PreSetStatusAttr>(battle, prng, mon, &mut args, None).unwrap_or(false)
}

pub fn apply_post_set_status(
    battle: &mut Battle,
    mon: MonHandle,
    source: Option<MonHandle>,
    status: Status,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PostSetStatusArgs { source, status };
    apply_ab_attrs::<PostSetStatusAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_pre_apply_battler_tag(
    battle: &mut Battle,
    mon: MonHandle,
    tag_type: BattlerTagType,
    cancelled: &mut bool,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PreApplyBattlerTagArgs {
        tag_type,
        cancelled,
    };
    apply_ab_attrs::<PreApplyBattlerTagAttr>(
        battle,
        mon,
        &mut args,
        DispatchOptions::new(simulated),
    )
}

/// Checks if abilities prevent a tag, without any side effects.
pub fn query_pre_apply_battler_tag(
    battle: &Battle,
    prng: &mut dyn PseudoRandomNumberGenerator,
    mon: MonHandle,
    tag_type: BattlerTagType,
    cancelled: &mut bool,
) -> bool {
    let mut args = PreApplyBattlerTagArgs {
        tag_type,
        cancelled,
    };
    simulate_ab_attrs::<PreApplyBattlerTagAttr>(battle, prng, mon, &mut args, None)
        .unwrap_or(false)
}

#[allow(clippy::too_many_arguments)]
pub fn apply_pre_stat_stage_change(
    battle: &mut Battle,
    mon: MonHandle,
    boost: Boost,
    stages: i8,
    self_inflicted: bool,
    cancelled: &mut bool,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PreStatStageChangeArgs {
        boost,
        stages,
        self_inflicted,
        cancelled,
    };
    apply_ab_attrs::<PreStatStageChangeAttr>(
        battle,
        mon,
        &mut args,
        DispatchOptions::new(simulated),
    )
}

pub fn apply_post_stat_stage_change(
    battle: &mut Battle,
    mon: MonHandle,
    boosts: &[Boost],
    stages: i8,
    self_inflicted: bool,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PostStatStageChangeArgs {
        boosts,
        stages,
        self_inflicted,
    };
    apply_ab_attrs::<PostStatStageChangeAttr>(
        battle,
        mon,
        &mut args,
        DispatchOptions::new(simulated),
    )
}

/// Applies abilities of `mon` reacting to being intimidated by `source`.
pub fn apply_intimidated(
    battle: &mut Battle,
    mon: MonHandle,
    source: MonHandle,
    cancelled: &mut bool,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = IntimidatedArgs { source, cancelled };
    apply_ab_attrs::<IntimidatedAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

/// Weather suppression shows immediately, since it affects the rest of the turn.
pub fn apply_pre_weather_effect(
    battle: &mut Battle,
    mon: MonHandle,
    weather: WeatherType,
    cancelled: &mut bool,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PreWeatherEffectArgs { weather, cancelled };
    apply_ab_attrs::<PreWeatherEffectAttr>(
        battle,
        mon,
        &mut args,
        DispatchOptions::new(simulated).show_ability_instant(),
    )
}

/// Checks if abilities suppress the effects of weather, without any side effects.
pub fn query_pre_weather_effect(
    battle: &Battle,
    prng: &mut dyn PseudoRandomNumberGenerator,
    mon: MonHandle,
    weather: WeatherType,
    cancelled: &mut bool,
) -> bool {
    let mut args = PreWeatherEffectArgs { weather, cancelled };
    simulate_ab_attrs::<PreWeatherEffectAttr>(battle, prng, mon, &mut args, None).unwrap_or(false)
}

pub fn apply_pre_weather_damage(
    battle: &mut Battle,
    mon: MonHandle,
    weather: WeatherType,
    cancelled: &mut bool,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PreWeatherDamageArgs { weather, cancelled };
    apply_ab_attrs::<PreWeatherDamageAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_post_weather_change(
    battle: &mut Battle,
    mon: MonHandle,
    weather: Option<WeatherType>,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PostWeatherChangeArgs { weather };
    apply_ab_attrs::<PostWeatherChangeAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_post_weather_lapse(
    battle: &mut Battle,
    mon: MonHandle,
    weather: WeatherType,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PostWeatherLapseArgs { weather };
    apply_ab_attrs::<PostWeatherLapseAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_post_terrain_change(
    battle: &mut Battle,
    mon: MonHandle,
    terrain: Option<TerrainType>,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PostTerrainChangeArgs { terrain };
    apply_ab_attrs::<PostTerrainChangeAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_post_turn(
    battle: &mut Battle,
    mon: MonHandle,
    simulated: bool,
) -> Result<bool, Error> {
    apply_ab_attrs::<PostTurnAttr>(battle, mon, &mut (), DispatchOptions::new(simulated))
}

pub fn apply_post_damage(
    battle: &mut Battle,
    mon: MonHandle,
    damage: u32,
    source: Option<MonHandle>,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PostDamageArgs { damage, source };
    apply_ab_attrs::<PostDamageAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_post_faint(
    battle: &mut Battle,
    mon: MonHandle,
    attacker: Option<MonHandle>,
    move_data: Option<&MoveData>,
    hit_result: Option<HitResult>,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PostFaintArgs {
        attacker,
        move_data,
        hit_result,
    };
    apply_ab_attrs::<PostFaintAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_post_knock_out(
    battle: &mut Battle,
    mon: MonHandle,
    knocked_out: MonHandle,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PostKnockOutArgs { knocked_out };
    apply_ab_attrs::<PostKnockOutAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}

pub fn apply_post_victory(
    battle: &mut Battle,
    mon: MonHandle,
    simulated: bool,
) -> Result<bool, Error> {
    apply_ab_attrs::<PostVictoryAttr>(battle, mon, &mut (), DispatchOptions::new(simulated))
}

/// Applies trapping abilities of `mon` against `other`, which is trying to leave the field.
///
/// Messages explaining why `other` is trapped are collected in `messages`.
pub fn apply_check_trapped(
    battle: &mut Battle,
    mon: MonHandle,
    other: MonHandle,
    trapped: &mut bool,
    simulated: bool,
    messages: Option<&mut Vec<String>>,
) -> Result<bool, Error> {
    let mut args = CheckTrappedArgs { other, trapped };
    apply_ab_attrs::<CheckTrappedAttr>(
        battle,
        mon,
        &mut args,
        DispatchOptions::new(simulated).with_messages(messages),
    )
}

pub fn apply_post_item_lost(
    battle: &mut Battle,
    mon: MonHandle,
    simulated: bool,
) -> Result<bool, Error> {
    apply_ab_attrs::<PostItemLostAttr>(battle, mon, &mut (), DispatchOptions::new(simulated))
}

pub fn apply_post_battle(
    battle: &mut Battle,
    mon: MonHandle,
    victory: bool,
    simulated: bool,
) -> Result<bool, Error> {
    let mut args = PostBattleArgs { victory };
    apply_ab_attrs::<PostBattleAttr>(battle, mon, &mut args, DispatchOptions::new(simulated))
}
