use battler_prng::rand_util;
use log::debug;

use crate::{
    abilities::{
        AbAttrHook,
        DecisionContext,
        EffectContext,
        attrs::{
            clears_weather,
            copyable_ability,
        },
        hooks,
    },
    battle::{
        Battle,
        BattlerTag,
        BattlerTagType,
        MonHandle,
        Phase,
        TerrainType,
        WeatherType,
        actions,
    },
    error::Error,
    mons::{
        Boost,
        Status,
    },
};

/// Turns that weather and terrain set by abilities last.
const ABILITY_FIELD_EFFECT_TURNS: u8 = 5;

/// Attributes that apply when the battle starts.
#[derive(Debug, Clone, PartialEq)]
pub enum PostBattleInitAttr {
    /// Changes to `form` while the Mon's HP is above `ratio` of its maximum, at or above
    /// `min_level`. Otherwise, the Mon is in its base form.
    FormChangeByHp { ratio: f64, min_level: u8, form: usize },
}

impl PostBattleInitAttr {
    fn target_form(&self, battle: &Battle, mon: MonHandle) -> Option<usize> {
        let mon = battle.mon(mon).ok()?;
        match self {
            Self::FormChangeByHp {
                ratio,
                min_level,
                form,
            } => {
                if mon.level >= *min_level && mon.hp_ratio() > *ratio {
                    Some(*form)
                } else {
                    Some(0)
                }
            }
        }
    }
}

impl AbAttrHook for PostBattleInitAttr {
    type Args<'a> = ();

    fn can_apply(&self, context: &mut DecisionContext, _: &mut Self::Args<'_>) -> bool {
        let Some(mon) = context.mon() else {
            return false;
        };
        self.target_form(context.battle(), context.mon_handle())
            .is_some_and(|form| form != mon.form)
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        if let Some(form) = self.target_form(context.battle(), mon) {
            context
                .battle_mut()
                .queue_mut()
                .unshift(Phase::FormChange { mon, form });
        }
        Ok(())
    }
}

/// Attributes that apply when the Mon enters the field.
#[derive(Debug, Clone, PartialEq)]
pub enum PostSummonAttr {
    /// Displays a message. `{mon}` and `{ability}` are replaced with the names of the Mon and the
    /// ability.
    Message(String),
    /// Changes stat stages of the Mon or of every opponent.
    ///
    /// Opponents can react to an intimidating stat stage change.
    StatStageChange {
        boosts: Vec<Boost>,
        stages: i8,
        self_target: bool,
        intimidate: bool,
    },
    WeatherChange(WeatherType),
    TerrainChange(TerrainType),
    AddTag(BattlerTagType),
    /// Copies the ability of a random opponent.
    Trace,
    /// Suppresses the abilities of every other Mon while on the field.
    SuppressAbilities,
    /// Cures allies of the given statuses.
    CureAlliesStatus(Vec<Status>),
}

impl PostSummonAttr {
    fn allies_to_cure(battle: &Battle, mon: MonHandle, statuses: &[Status]) -> Vec<MonHandle> {
        battle
            .allies(mon)
            .into_iter()
            .filter(|ally| {
                battle.mon(*ally).is_ok_and(|ally| {
                    ally.status
                        .is_some_and(|status| statuses.contains(&status))
                })
            })
            .collect()
    }

    fn traceable_opponents(battle: &Battle, mon: MonHandle) -> Vec<MonHandle> {
        battle
            .opponents(mon)
            .into_iter()
            .filter(|opponent| copyable_ability(battle, *opponent).is_some())
            .collect()
    }
}

impl AbAttrHook for PostSummonAttr {
    type Args<'a> = ();

    fn can_apply(&self, context: &mut DecisionContext, _: &mut Self::Args<'_>) -> bool {
        let battle = context.battle();
        let mon = context.mon_handle();
        match self {
            Self::Message(_) => true,
            Self::StatStageChange { self_target, .. } => {
                *self_target || !battle.opponents(mon).is_empty()
            }
            Self::WeatherChange(weather) => battle.field.can_set_weather(*weather),
            Self::TerrainChange(terrain) => battle.field.terrain_type() != Some(*terrain),
            Self::AddTag(tag_type) => context.can_add_tag(mon, *tag_type),
            Self::Trace => !Self::traceable_opponents(battle, mon).is_empty(),
            Self::SuppressAbilities => !battle.field.ability_suppressors.contains(&mon),
            Self::CureAlliesStatus(statuses) => {
                !Self::allies_to_cure(battle, mon, statuses).is_empty()
            }
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        let first_in_battle = context.first_in_battle();
        let battle = context.battle_mut();
        match self {
            Self::Message(_) => (),
            Self::StatStageChange {
                boosts,
                stages,
                self_target,
                intimidate,
            } => {
                if *self_target {
                    actions::queue_stat_stage_change(
                        battle,
                        mon,
                        boosts.clone(),
                        *stages,
                        true,
                        Some(mon),
                    );
                    return Ok(());
                }
                for opponent in battle.opponents(mon) {
                    if *intimidate {
                        let mut cancelled = false;
                        hooks::apply_intimidated(battle, opponent, mon, &mut cancelled, false)?;
                        if cancelled {
                            continue;
                        }
                    }
                    actions::queue_stat_stage_change(
                        battle,
                        opponent,
                        boosts.clone(),
                        *stages,
                        false,
                        Some(mon),
                    );
                }
            }
            Self::WeatherChange(weather) => {
                let turns = (!weather.is_immutable()).then_some(ABILITY_FIELD_EFFECT_TURNS);
                actions::set_weather(battle, *weather, turns)?;
            }
            Self::TerrainChange(terrain) => {
                actions::set_terrain(battle, *terrain, Some(ABILITY_FIELD_EFFECT_TURNS))?;
            }
            Self::AddTag(tag_type) => {
                actions::try_add_tag(battle, mon, BattlerTag::new(*tag_type).with_source(mon))?;
            }
            Self::Trace => {
                let targets = Self::traceable_opponents(battle, mon);
                let Some(target) = rand_util::sample_slice(battle.prng(), &targets).copied() else {
                    return Ok(());
                };
                let Some(ability) = copyable_ability(battle, target) else {
                    return Ok(());
                };
                battle.mon_mut(mon)?.ledger.summon_data.ability = Some(ability);
                if first_in_battle {
                    let name = battle.catalog().ability(ability)?.name().to_owned();
                    let message = format!(
                        "{} traced {}'s {name}!",
                        battle.mon_name(mon),
                        battle.mon_name(target)
                    );
                    battle.queue_message(message);
                }
                debug!("{} traced {ability}", battle.mon_name(mon));
                hooks::apply_post_summon(battle, mon, false)?;
            }
            Self::SuppressAbilities => battle.field.ability_suppressors.push(mon),
            Self::CureAlliesStatus(statuses) => {
                for ally in Self::allies_to_cure(battle, mon, statuses) {
                    actions::cure_status(battle, ally)?;
                }
            }
        }
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        mon: MonHandle,
        ability_name: &str,
        _: &Self::Args<'_>,
    ) -> Option<String> {
        match self {
            Self::Message(template) => Some(
                template
                    .replace("{mon}", battle.mon_name(mon))
                    .replace("{ability}", ability_name),
            ),
            Self::SuppressAbilities => Some("Neutralizing gas filled the area!".to_owned()),
            _ => None,
        }
    }
}

/// Attributes that apply when the Mon is about to switch out.
#[derive(Debug, Clone, PartialEq)]
pub enum PreSwitchOutAttr {
    CureStatus,
    /// Heals the given ratio of the Mon's maximum HP.
    Heal(f64),
    /// Clears any of the given weathers, unless another Mon on the field keeps it up.
    ClearWeather(Vec<WeatherType>),
}

impl AbAttrHook for PreSwitchOutAttr {
    type Args<'a> = ();

    fn can_apply(&self, context: &mut DecisionContext, _: &mut Self::Args<'_>) -> bool {
        let Some(mon) = context.mon() else {
            return false;
        };
        match self {
            Self::CureStatus => mon.status.is_some(),
            Self::Heal(_) => !mon.fainted() && !mon.full_hp(),
            Self::ClearWeather(weathers) => clears_weather(context, weathers),
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::CureStatus => {
                actions::cure_status(context.battle_mut(), mon)?;
            }
            // The Mon is leaving, so it heals right away.
            Self::Heal(ratio) => {
                let mon = context.mon_mut()?;
                let amount = mon.hp_fraction(*ratio);
                mon.heal(amount);
            }
            Self::ClearWeather(_) => {
                actions::clear_weather(context.battle_mut())?;
            }
        }
        Ok(())
    }
}

/// Attributes that apply when the Mon is about to leave the field, either by switching out or by
/// fainting.
#[derive(Debug, Clone, PartialEq)]
pub enum PreLeaveFieldAttr {
    /// Ends the suppression of abilities started by the Mon.
    EndAbilitySuppression,
}

impl AbAttrHook for PreLeaveFieldAttr {
    type Args<'a> = ();

    fn can_apply(&self, context: &mut DecisionContext, _: &mut Self::Args<'_>) -> bool {
        match self {
            Self::EndAbilitySuppression => context
                .battle()
                .field
                .ability_suppressors
                .contains(&context.mon_handle()),
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::EndAbilitySuppression => {
                let battle = context.battle_mut();
                battle.field.ability_suppressors.retain(|other| *other != mon);
                if battle.field.ability_suppressors.is_empty() {
                    // Abilities of Mons still on the field take effect again.
                    for other in battle.active_mons() {
                        if other != mon {
                            hooks::apply_post_summon(battle, other, false)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn trigger_message(
        &self,
        _: &Battle,
        _: MonHandle,
        _: &str,
        _: &Self::Args<'_>,
    ) -> Option<String> {
        match self {
            Self::EndAbilitySuppression => {
                Some("The effects of the neutralizing gas wore off!".to_owned())
            }
        }
    }
}
