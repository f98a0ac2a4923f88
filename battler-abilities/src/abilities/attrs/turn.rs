use crate::{
    abilities::{
        AbAttrHook,
        DecisionContext,
        EffectContext,
        attrs::roll_percent,
    },
    battle::{
        Battle,
        MonHandle,
        Phase,
        actions,
    },
    error::Error,
    mons::{
        Boost,
        Status,
    },
};

/// Attributes that apply at the end of each turn.
#[derive(Debug, Clone, PartialEq)]
pub enum PostTurnAttr {
    /// Has a percent chance to cure the Mon's status.
    CureStatus(u64),
    /// Changes stat stages of the Mon, starting from its second turn on the field.
    StatStageChange { boosts: Vec<Boost>, stages: i8 },
    /// Damages sleeping opponents by a ratio of their maximum HP.
    HurtSleepingFoes(f64),
}

impl PostTurnAttr {
    fn sleeping_foes(battle: &Battle, mon: MonHandle) -> Vec<MonHandle> {
        battle
            .opponents(mon)
            .into_iter()
            .filter(|foe| {
                battle
                    .mon(*foe)
                    .is_ok_and(|foe| foe.status == Some(Status::Sleep))
            })
            .collect()
    }
}

impl AbAttrHook for PostTurnAttr {
    type Args<'a> = ();

    fn can_apply(&self, context: &mut DecisionContext, _: &mut Self::Args<'_>) -> bool {
        let Some(mon) = context.mon() else {
            return false;
        };
        match self {
            Self::CureStatus(chance) => mon.status.is_some() && roll_percent(context, *chance),
            Self::StatStageChange { boosts, stages } => {
                mon.ledger.summon_data.turn_count > 0
                    && boosts
                        .iter()
                        .any(|boost| mon.boosts.can_change(*boost, *stages))
            }
            Self::HurtSleepingFoes(_) => {
                !Self::sleeping_foes(context.battle(), context.mon_handle()).is_empty()
            }
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        let battle = context.battle_mut();
        match self {
            Self::CureStatus(_) => {
                actions::cure_status(battle, mon)?;
            }
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
            Self::HurtSleepingFoes(ratio) => {
                for foe in Self::sleeping_foes(battle, mon) {
                    let message = format!("{} is tormented!", battle.mon_name(foe));
                    battle.queue_message(message);
                    let amount = battle.mon(foe)?.hp_fraction(*ratio);
                    battle.queue_mut().unshift(Phase::Damage {
                        target: foe,
                        amount,
                        source: Some(mon),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Arguments for [`PostDamageAttr`].
pub struct PostDamageArgs {
    pub damage: u32,
    pub source: Option<MonHandle>,
}

/// Attributes that apply after the Mon took damage.
#[derive(Debug, Clone, PartialEq)]
pub enum PostDamageAttr {
    /// Switches the Mon out when damage drops its HP below the given ratio of its maximum.
    ForceSwitchOnLowHp(f64),
}

impl AbAttrHook for PostDamageAttr {
    type Args<'a> = PostDamageArgs;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        let Some(mon) = context.mon() else {
            return false;
        };
        match self {
            Self::ForceSwitchOnLowHp(ratio) => {
                let threshold = mon.max_hp as f64 * ratio;
                mon.on_field()
                    && (mon.hp as f64) < threshold
                    && (mon.hp + args.damage) as f64 >= threshold
            }
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::ForceSwitchOnLowHp(_) => {
                context
                    .battle_mut()
                    .queue_mut()
                    .unshift(Phase::SwitchOut { mon });
            }
        }
        Ok(())
    }
}
