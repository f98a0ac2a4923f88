use crate::{
    abilities::{
        AbAttrHook,
        DecisionContext,
        EffectContext,
        attrs::{
            clears_weather,
            copyable_ability,
        },
    },
    battle::{
        Battle,
        MonHandle,
        Phase,
        WeatherType,
        actions,
    },
    error::Error,
    mons::Boost,
    moves::{
        HitResult,
        MoveData,
    },
};

/// Arguments for [`PostFaintAttr`].
pub struct PostFaintArgs<'a> {
    pub attacker: Option<MonHandle>,
    pub move_data: Option<&'a MoveData>,
    pub hit_result: Option<HitResult>,
}

/// Attributes that apply after the Mon fainted.
#[derive(Debug, Clone, PartialEq)]
pub enum PostFaintAttr {
    /// Damages the attacker by a ratio of its maximum HP if the fainting move made contact.
    DamageAttacker(f64),
    /// Clears any of the given weathers, unless another Mon on the field keeps it up.
    ClearWeather(Vec<WeatherType>),
}

impl AbAttrHook for PostFaintAttr {
    type Args<'a> = PostFaintArgs<'a>;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        match self {
            Self::DamageAttacker(_) => {
                let Some(attacker) = args.attacker else {
                    return false;
                };
                attacker != context.mon_handle()
                    && args.move_data.is_some_and(|move_data| move_data.makes_contact())
                    && context
                        .battle()
                        .mon(attacker)
                        .is_ok_and(|attacker| attacker.on_field())
            }
            Self::ClearWeather(weathers) => clears_weather(context, weathers),
        }
    }

    fn apply(&self, context: &mut EffectContext, args: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::DamageAttacker(ratio) => {
                if let Some(attacker) = args.attacker {
                    let amount = context.battle().mon(attacker)?.hp_fraction(*ratio);
                    context.battle_mut().queue_mut().unshift(Phase::Damage {
                        target: attacker,
                        amount,
                        source: Some(mon),
                    });
                }
            }
            Self::ClearWeather(_) => {
                actions::clear_weather(context.battle_mut())?;
            }
        }
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        _: MonHandle,
        _: &str,
        args: &Self::Args<'_>,
    ) -> Option<String> {
        match (self, args.attacker) {
            (Self::DamageAttacker(_), Some(attacker)) => {
                Some(format!("{} was hurt!", battle.mon_name(attacker)))
            }
            _ => None,
        }
    }
}

/// Arguments for [`PostKnockOutAttr`].
pub struct PostKnockOutArgs {
    /// The Mon that fainted.
    pub knocked_out: MonHandle,
}

/// Attributes that apply after another Mon on the field fainted.
#[derive(Debug, Clone, PartialEq)]
pub enum PostKnockOutAttr {
    StatStageChange { boosts: Vec<Boost>, stages: i8 },
    /// Takes on the ability of a fainted ally.
    CopyFaintedAllyAbility,
}

impl AbAttrHook for PostKnockOutAttr {
    type Args<'a> = PostKnockOutArgs;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        let battle = context.battle();
        let mon = context.mon_handle();
        if args.knocked_out == mon || !context.mon().is_some_and(|mon| mon.on_field()) {
            return false;
        }
        match self {
            Self::StatStageChange { .. } => true,
            Self::CopyFaintedAllyAbility => {
                battle.allies(mon).contains(&args.knocked_out)
                    && copyable_ability(battle, args.knocked_out).is_some()
            }
        }
    }

    fn apply(&self, context: &mut EffectContext, args: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        let battle = context.battle_mut();
        match self {
            Self::StatStageChange { boosts, stages } => {
                actions::queue_stat_stage_change(
                    battle,
                    mon,
                    boosts.clone(),
                    *stages,
                    true,
                    Some(mon),
                );
            }
            Self::CopyFaintedAllyAbility => {
                if let Some(ability) = copyable_ability(battle, args.knocked_out) {
                    battle.mon_mut(mon)?.ledger.summon_data.ability = Some(ability);
                }
            }
        }
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        mon: MonHandle,
        _: &str,
        args: &Self::Args<'_>,
    ) -> Option<String> {
        match self {
            Self::StatStageChange { .. } => None,
            Self::CopyFaintedAllyAbility => {
                let ability = copyable_ability(battle, args.knocked_out)?;
                let ability = battle.catalog().get(ability)?;
                Some(format!(
                    "{} received {}'s {}!",
                    battle.mon_name(mon),
                    battle.mon_name(args.knocked_out),
                    ability.name()
                ))
            }
        }
    }
}

/// Attributes that apply after the Mon knocked out an opponent.
#[derive(Debug, Clone, PartialEq)]
pub enum PostVictoryAttr {
    StatStageChange { boosts: Vec<Boost>, stages: i8 },
}

impl AbAttrHook for PostVictoryAttr {
    type Args<'a> = ();

    fn can_apply(&self, context: &mut DecisionContext, _: &mut Self::Args<'_>) -> bool {
        match self {
            Self::StatStageChange { boosts, stages } => context.mon().is_some_and(|mon| {
                boosts
                    .iter()
                    .any(|boost| mon.boosts.can_change(*boost, *stages))
            }),
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::StatStageChange { boosts, stages } => {
                actions::queue_stat_stage_change(
                    context.battle_mut(),
                    mon,
                    boosts.clone(),
                    *stages,
                    true,
                    Some(mon),
                );
            }
        }
        Ok(())
    }
}
