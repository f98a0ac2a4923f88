use battler_prng::PseudoRandomNumberGenerator;
use log::debug;

use crate::{
    abilities::hooks,
    battle::{
        Battle,
        BattlerTag,
        BattlerTagType,
        Mon,
        MonHandle,
        Phase,
        Terrain,
        TerrainType,
        Weather,
        WeatherType,
    },
    common::Id,
    error::Error,
    log_event,
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

fn status_type_immune(mon: &Mon, status: Status) -> bool {
    match status {
        Status::Poison | Status::BadPoison => {
            mon.has_type(Type::Poison) || mon.has_type(Type::Steel)
        }
        Status::Burn => mon.has_type(Type::Fire),
        Status::Paralysis => mon.has_type(Type::Electric),
        Status::Freeze => mon.has_type(Type::Ice),
        Status::Sleep => false,
    }
}

/// Checks if a status can be set on a Mon, without any side effects.
pub fn can_set_status(
    battle: &Battle,
    prng: &mut dyn PseudoRandomNumberGenerator,
    target: MonHandle,
    status: Status,
) -> bool {
    let Ok(mon) = battle.mon(target) else {
        return false;
    };
    if mon.fainted() || mon.status.is_some() || status_type_immune(mon, status) {
        return false;
    }
    let mut cancelled = false;
    hooks::query_pre_set_status(battle, prng, target, status, &mut cancelled);
    !cancelled
}

/// Tries to set the status of a Mon.
pub fn try_set_status(
    battle: &mut Battle,
    target: MonHandle,
    status: Status,
    source: Option<MonHandle>,
) -> Result<bool, Error> {
    let mon = battle.mon(target)?;
    if mon.fainted() || mon.status.is_some() || status_type_immune(mon, status) {
        return Ok(false);
    }
    let mut cancelled = false;
    hooks::apply_pre_set_status(battle, target, status, &mut cancelled, false)?;
    if cancelled {
        return Ok(false);
    }
    battle.mon_mut(target)?.status = Some(status);
    let message = format!("{} was {}!", battle.mon_name(target), status.description());
    battle.queue_message(message);
    hooks::apply_post_set_status(battle, target, source, status, false)?;
    Ok(true)
}

/// Cures the status of a Mon, returning the cured status.
pub fn cure_status(battle: &mut Battle, target: MonHandle) -> Result<Option<Status>, Error> {
    let status = battle.mon_mut(target)?.status.take();
    if let Some(status) = status {
        let message = format!(
            "{} is no longer {}.",
            battle.mon_name(target),
            status.description()
        );
        battle.queue_message(message);
    }
    Ok(status)
}

/// Checks if a tag can be added to a Mon, without any side effects.
pub fn can_add_tag(
    battle: &Battle,
    prng: &mut dyn PseudoRandomNumberGenerator,
    target: MonHandle,
    tag_type: BattlerTagType,
) -> bool {
    let Ok(mon) = battle.mon(target) else {
        return false;
    };
    if !mon.on_field() || mon.has_tag(tag_type) {
        return false;
    }
    let mut cancelled = false;
    hooks::query_pre_apply_battler_tag(battle, prng, target, tag_type, &mut cancelled);
    !cancelled
}

/// Tries to add a tag to a Mon.
pub fn try_add_tag(battle: &mut Battle, target: MonHandle, tag: BattlerTag) -> Result<bool, Error> {
    let mon = battle.mon(target)?;
    if !mon.on_field() || mon.has_tag(tag.tag_type) {
        return Ok(false);
    }
    let mut cancelled = false;
    hooks::apply_pre_apply_battler_tag(battle, target, tag.tag_type, &mut cancelled, false)?;
    if cancelled {
        return Ok(false);
    }
    Ok(battle.mon_mut(target)?.add_tag(tag))
}

/// Queues a stat stage change to resolve after the current effect.
pub fn queue_stat_stage_change(
    battle: &mut Battle,
    target: MonHandle,
    boosts: Vec<Boost>,
    stages: i8,
    self_inflicted: bool,
    source: Option<MonHandle>,
) {
    battle.queue_mut().unshift(Phase::StatStageChange {
        target,
        boosts,
        stages,
        self_inflicted,
        source,
    });
}

fn stat_stage_change_message(name: &str, boost: Boost, delta: i8) -> String {
    let amount = match delta.abs() {
        1 => "",
        2 => " sharply",
        _ => " drastically",
    };
    let direction = if delta > 0 { "rose" } else { "fell" };
    format!("{name}'s {}{amount} {direction}!", boost.display_name())
}

/// Resolves a stat stage change, returning the boosts that actually changed.
///
/// Stat stage changes caused by other Mons can be prevented by abilities.
pub fn apply_stat_stage_change(
    battle: &mut Battle,
    target: MonHandle,
    boosts: &[Boost],
    stages: i8,
    self_inflicted: bool,
) -> Result<Vec<Boost>, Error> {
    if !battle.mon(target)?.on_field() {
        return Ok(Vec::new());
    }
    let mut changed = Vec::new();
    for boost in boosts.iter().copied() {
        if !self_inflicted {
            let mut cancelled = false;
            hooks::apply_pre_stat_stage_change(
                battle,
                target,
                boost,
                stages,
                self_inflicted,
                &mut cancelled,
                false,
            )?;
            if cancelled {
                continue;
            }
        }
        let delta = battle.mon_mut(target)?.boosts.change(boost, stages);
        let name = battle.mon_name(target);
        let message = if delta == 0 {
            format!(
                "{name}'s {} won't go any {}!",
                boost.display_name(),
                if stages > 0 { "higher" } else { "lower" }
            )
        } else {
            stat_stage_change_message(name, boost, delta)
        };
        battle.queue_message(message);
        if delta != 0 {
            changed.push(boost);
        }
    }
    if !changed.is_empty() {
        hooks::apply_post_stat_stage_change(
            battle,
            target,
            &changed,
            stages,
            self_inflicted,
            false,
        )?;
    }
    Ok(changed)
}

/// Removes the held item from a Mon because it was consumed or destroyed.
///
/// Consumed items are added to the battle's loot.
pub fn lose_item(battle: &mut Battle, mon: MonHandle) -> Result<Option<Id>, Error> {
    let Some(item) = battle.mon_mut(mon)?.item.take() else {
        return Ok(None);
    };
    battle.field.loot.push(item.clone());
    hooks::apply_post_item_lost(battle, mon, false)?;
    Ok(Some(item))
}

/// Moves the held item of one Mon to another.
///
/// Fails if the source has no item or the target already holds one.
pub fn transfer_item(battle: &mut Battle, from: MonHandle, to: MonHandle) -> Result<bool, Error> {
    if battle.mon(to)?.item.is_some() {
        return Ok(false);
    }
    let Some(item) = battle.mon_mut(from)?.item.take() else {
        return Ok(false);
    };
    let message = format!(
        "{} stole {}'s {item}!",
        battle.mon_name(to),
        battle.mon_name(from)
    );
    battle.mon_mut(to)?.item = Some(item);
    battle.queue_message(message);
    hooks::apply_post_item_lost(battle, from, false)?;
    Ok(true)
}

/// Sets the weather on the field.
///
/// Returns `false` if the weather cannot be changed.
pub fn set_weather(
    battle: &mut Battle,
    weather_type: WeatherType,
    turns: Option<u8>,
) -> Result<bool, Error> {
    if !battle.field.can_set_weather(weather_type) {
        return Ok(false);
    }
    battle.field.weather = Some(Weather {
        weather_type,
        turns_left: turns,
    });
    battle.queue_message(weather_type.start_message());
    battle
        .log_mut()
        .push(log_event!("weather", weather_type));
    for mon in battle.active_mons() {
        hooks::apply_post_weather_change(battle, mon, Some(weather_type), false)?;
    }
    Ok(true)
}

/// Clears the weather on the field.
pub fn clear_weather(battle: &mut Battle) -> Result<bool, Error> {
    let Some(weather) = battle.field.weather.take() else {
        return Ok(false);
    };
    battle.queue_message(weather.weather_type.clear_message());
    battle.log_mut().push(log_event!("clearweather"));
    for mon in battle.active_mons() {
        hooks::apply_post_weather_change(battle, mon, None, false)?;
    }
    Ok(true)
}

/// Sets the terrain on the field.
pub fn set_terrain(
    battle: &mut Battle,
    terrain_type: TerrainType,
    turns: Option<u8>,
) -> Result<bool, Error> {
    if battle.field.terrain_type() == Some(terrain_type) {
        return Ok(false);
    }
    battle.field.terrain = Some(Terrain {
        terrain_type,
        turns_left: turns,
    });
    battle.queue_message(terrain_type.start_message());
    battle
        .log_mut()
        .push(log_event!("terrain", terrain_type));
    for mon in battle.active_mons() {
        hooks::apply_post_terrain_change(battle, mon, Some(terrain_type), false)?;
    }
    Ok(true)
}

/// Switches a Mon into the battle.
pub fn switch_in(battle: &mut Battle, mon: MonHandle) -> Result<(), Error> {
    let mon_ref = battle.mon_mut(mon)?;
    mon_ref.switch_in();
    let event = log_event!("switch", mon_ref.log_details());
    battle.log_mut().push(event);
    hooks::apply_post_summon(battle, mon, false)?;
    Ok(())
}

/// Switches a Mon out of the battle.
pub fn switch_out(battle: &mut Battle, mon: MonHandle) -> Result<(), Error> {
    if !battle.mon(mon)?.on_field() {
        return Ok(());
    }
    hooks::apply_pre_switch_out(battle, mon, false)?;
    hooks::apply_pre_leave_field(battle, mon, false)?;
    battle.mon_mut(mon)?.switch_out();
    Ok(())
}

/// Handles a Mon fainting.
pub fn faint(
    battle: &mut Battle,
    target: MonHandle,
    attacker: Option<MonHandle>,
    move_data: Option<&MoveData>,
    hit_result: Option<HitResult>,
) -> Result<(), Error> {
    let message = format!("{} fainted!", battle.mon_name(target));
    battle.queue_message(message);
    let event = log_event!("faint", battle.mon(target)?.log_details());
    battle.log_mut().push(event);
    hooks::apply_post_faint(battle, target, attacker, move_data, hit_result, false)?;
    hooks::apply_pre_leave_field(battle, target, false)?;
    for mon in battle.active_mons() {
        hooks::apply_post_knock_out(battle, mon, target, false)?;
    }
    if let Some(attacker) = attacker {
        if battle.mon(attacker)?.on_field() {
            hooks::apply_post_victory(battle, attacker, false)?;
        }
    }
    Ok(())
}

/// Starts the battle, running abilities for the start of the battle and for every Mon already on
/// the field.
pub fn start_battle(battle: &mut Battle) -> Result<(), Error> {
    battle.new_battle();
    for mon in battle.mon_handles() {
        hooks::apply_post_battle_init(battle, mon, false)?;
    }
    for mon in battle.active_mons() {
        hooks::apply_post_summon(battle, mon, false)?;
    }
    Ok(())
}

/// Ends the turn, running end-of-turn abilities and lapsing the weather.
pub fn end_turn(battle: &mut Battle) -> Result<(), Error> {
    let mons = battle.active_mons();
    if let Some(weather) = battle.field.weather_type() {
        let mut cancelled = false;
        for mon in mons.iter().copied() {
            hooks::apply_pre_weather_effect(battle, mon, weather, &mut cancelled, false)?;
        }
        if !cancelled {
            for mon in mons.iter().copied() {
                lapse_weather(battle, mon, weather)?;
            }
        }
    }
    for mon in mons.iter().copied() {
        if battle.mon(mon)?.on_field() {
            hooks::apply_post_turn(battle, mon, false)?;
        }
    }
    for mon in mons {
        battle.mon_mut(mon)?.ledger.summon_data.turn_count += 1;
    }
    let weather_expired = match battle
        .field
        .weather
        .as_mut()
        .and_then(|weather| weather.turns_left.as_mut())
    {
        Some(turns_left) => {
            *turns_left = turns_left.saturating_sub(1);
            *turns_left == 0
        }
        None => false,
    };
    if weather_expired {
        clear_weather(battle)?;
    }
    battle.start_turn();
    Ok(())
}

fn lapse_weather(battle: &mut Battle, mon: MonHandle, weather: WeatherType) -> Result<(), Error> {
    if !battle.mon(mon)?.on_field() {
        return Ok(());
    }
    if weather.is_damaging()
        && !battle
            .mon(mon)?
            .types()
            .iter()
            .any(|typ| weather.is_type_immune(*typ))
    {
        let mut cancelled = false;
        hooks::apply_pre_weather_damage(battle, mon, weather, &mut cancelled, false)?;
        if !cancelled {
            let amount = battle.mon(mon)?.hp_fraction(1.0 / 16.0);
            battle.queue_mut().unshift(Phase::Damage {
                target: mon,
                amount,
                source: None,
            });
        }
    }
    hooks::apply_post_weather_lapse(battle, mon, weather, false)?;
    Ok(())
}

/// Checks if abilities of opponents prevent a Mon from leaving the field, without any side
/// effects.
///
/// Returns the reason for every ability that traps the Mon.
pub fn check_trapped(battle: &mut Battle, mon: MonHandle) -> Result<(bool, Vec<String>), Error> {
    let mut trapped = false;
    let mut messages = Vec::new();
    for opponent in battle.opponents(mon) {
        hooks::apply_check_trapped(
            battle,
            opponent,
            mon,
            &mut trapped,
            true,
            Some(&mut messages),
        )?;
    }
    Ok((trapped, messages))
}

/// Calculates the multiplier that abilities apply to a stat of a Mon.
///
/// Combines the Mon's own abilities, the abilities of allies, and field-wide abilities of every
/// other Mon. Field-wide effects of the same stat do not stack.
pub fn stat_multiplier(
    battle: &mut Battle,
    mon: MonHandle,
    stat: Stat,
    simulated: bool,
) -> Result<f64, Error> {
    let mut multiplier = 1.0;
    hooks::apply_stat_multiplier(battle, mon, stat, &mut multiplier, simulated)?;
    for ally in battle.allies(mon) {
        hooks::apply_ally_stat_multiplier(battle, ally, mon, stat, &mut multiplier, simulated)?;
    }
    let mut already_applied = false;
    for other in battle.active_mons() {
        if other != mon {
            hooks::apply_field_stat_multiplier(
                battle,
                other,
                mon,
                stat,
                &mut multiplier,
                &mut already_applied,
                simulated,
            )?;
        }
    }
    Ok(multiplier)
}

/// Ends the battle, running abilities for every Mon still on the field.
pub fn end_battle(battle: &mut Battle, winning_side: Option<usize>) -> Result<(), Error> {
    for mon in battle.active_mons() {
        let victory = winning_side == Some(battle.mon(mon)?.side);
        hooks::apply_post_battle(battle, mon, victory, false)?;
    }
    Ok(())
}

/// Runs a single phase.
pub fn run_phase(battle: &mut Battle, phase: Phase) -> Result<(), Error> {
    debug!("Running phase {phase:?}");
    match phase {
        Phase::Message(message) => battle.log_mut().push(log_event!("message", message)),
        Phase::ShowAbility { mon, ability, .. } => battle.log_ability(mon, ability)?,
        Phase::StatStageChange {
            target,
            boosts,
            stages,
            self_inflicted,
            ..
        } => {
            apply_stat_stage_change(battle, target, &boosts, stages, self_inflicted)?;
        }
        Phase::Damage {
            target,
            amount,
            source,
        } => {
            let mon = battle.mon_mut(target)?;
            if mon.fainted() {
                return Ok(());
            }
            let dealt = mon.damage(amount);
            let event = log_event!(
                "damage",
                mon.log_details(),
                format!("hp:{}/{}", mon.hp, mon.max_hp)
            );
            let fainted = mon.fainted();
            battle.log_mut().push(event);
            if dealt > 0 {
                hooks::apply_post_damage(battle, target, dealt, source, false)?;
            }
            if fainted {
                faint(battle, target, source, None, None)?;
            }
        }
        Phase::Heal { target, amount } => {
            let mon = battle.mon_mut(target)?;
            if mon.heal(amount) > 0 {
                let event = log_event!(
                    "heal",
                    mon.log_details(),
                    format!("hp:{}/{}", mon.hp, mon.max_hp)
                );
                battle.log_mut().push(event);
            }
        }
        Phase::SwitchOut { mon } => switch_out(battle, mon)?,
        Phase::FormChange { mon, form } => {
            let mon_ref = battle.mon_mut(mon)?;
            mon_ref.form = form;
            let event = log_event!("formechange", mon_ref.log_details(), format!("form:{form}"));
            battle.log_mut().push(event);
        }
    }
    Ok(())
}
