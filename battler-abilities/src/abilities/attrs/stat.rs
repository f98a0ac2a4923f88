use crate::{
    abilities::{
        AbAttrHook,
        DecisionContext,
        EffectContext,
    },
    battle::{
        Battle,
        MonHandle,
        actions,
    },
    error::Error,
    mons::{
        Boost,
        Stat,
    },
};

/// Arguments for [`StatMultiplierAttr`].
pub struct StatMultiplierArgs<'a> {
    pub stat: Stat,
    pub multiplier: &'a mut f64,
}

/// Multiplies one of the Mon's stats.
#[derive(Debug, Clone, PartialEq)]
pub struct StatMultiplierAttr {
    pub stat: Stat,
    pub multiplier: f64,
}

impl AbAttrHook for StatMultiplierAttr {
    type Args<'a> = StatMultiplierArgs<'a>;

    fn can_apply(&self, _: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        if args.stat != self.stat {
            return false;
        }
        *args.multiplier *= self.multiplier;
        true
    }

    fn shows_ability(&self) -> bool {
        false
    }
}

/// Arguments for [`FieldStatMultiplierAttr`].
pub struct FieldStatMultiplierArgs<'a> {
    pub target: MonHandle,
    pub stat: Stat,
    pub multiplier: &'a mut f64,
    /// Set once an effect of the same kind applied, since they do not stack.
    pub already_applied: &'a mut bool,
}

/// Multiplies a stat of every other Mon on the field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStatMultiplierAttr {
    pub stat: Stat,
    pub multiplier: f64,
}

impl AbAttrHook for FieldStatMultiplierAttr {
    type Args<'a> = FieldStatMultiplierArgs<'a>;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        if args.stat != self.stat || args.target == context.mon_handle() || *args.already_applied {
            return false;
        }
        *args.multiplier *= self.multiplier;
        *args.already_applied = true;
        true
    }

    fn shows_ability(&self) -> bool {
        false
    }
}

/// Arguments for [`AllyStatMultiplierAttr`].
pub struct AllyStatMultiplierArgs<'a> {
    pub ally: MonHandle,
    pub stat: Stat,
    pub multiplier: &'a mut f64,
}

/// Multiplies a stat of allies on the field.
#[derive(Debug, Clone, PartialEq)]
pub struct AllyStatMultiplierAttr {
    pub stat: Stat,
    pub multiplier: f64,
}

impl AbAttrHook for AllyStatMultiplierAttr {
    type Args<'a> = AllyStatMultiplierArgs<'a>;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        if args.stat != self.stat || args.ally == context.mon_handle() {
            return false;
        }
        *args.multiplier *= self.multiplier;
        true
    }

    fn shows_ability(&self) -> bool {
        false
    }
}

/// Arguments for [`CriticalHitAttr`].
pub struct CriticalHitArgs<'a> {
    pub blocked: &'a mut bool,
    pub crit_stage: &'a mut u8,
}

/// Attributes that apply when a critical hit is calculated.
#[derive(Debug, Clone, PartialEq)]
pub enum CriticalHitAttr {
    /// Moves cannot land critical hits on the Mon.
    BlockCrit,
    /// Raises the critical hit stage of the Mon's moves.
    BonusCritStage(u8),
}

impl AbAttrHook for CriticalHitAttr {
    type Args<'a> = CriticalHitArgs<'a>;

    fn can_apply(&self, _: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        match self {
            Self::BlockCrit => *args.blocked = true,
            Self::BonusCritStage(stages) => {
                *args.crit_stage = args.crit_stage.saturating_add(*stages)
            }
        }
        true
    }

    fn shows_ability(&self) -> bool {
        false
    }
}

/// Arguments for [`PreStatStageChangeAttr`].
pub struct PreStatStageChangeArgs<'a> {
    pub boost: Boost,
    pub stages: i8,
    pub self_inflicted: bool,
    pub cancelled: &'a mut bool,
}

/// Attributes that apply when one of the Mon's stat stages is about to change.
#[derive(Debug, Clone, PartialEq)]
pub enum PreStatStageChangeAttr {
    /// Prevents other Mons from lowering a stat, or all stats if none is given.
    ProtectStat(Option<Boost>),
}

impl AbAttrHook for PreStatStageChangeAttr {
    type Args<'a> = PreStatStageChangeArgs<'a>;

    fn can_apply(&self, _: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        match self {
            Self::ProtectStat(protected) => {
                if args.self_inflicted
                    || args.stages >= 0
                    || protected.is_some_and(|boost| boost != args.boost)
                {
                    return false;
                }
                *args.cancelled = true;
                true
            }
        }
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        mon: MonHandle,
        ability_name: &str,
        args: &Self::Args<'_>,
    ) -> Option<String> {
        let name = battle.mon_name(mon);
        match self {
            Self::ProtectStat(Some(_)) => Some(format!(
                "{name}'s {ability_name} prevents lowering its {}!",
                args.boost.display_name()
            )),
            Self::ProtectStat(None) => {
                Some(format!("{name}'s {ability_name} prevents lowering its stats!"))
            }
        }
    }
}

/// Arguments for [`PostStatStageChangeAttr`].
pub struct PostStatStageChangeArgs<'a> {
    /// Boosts that actually changed.
    pub boosts: &'a [Boost],
    pub stages: i8,
    pub self_inflicted: bool,
}

/// Attributes that apply after the Mon's stat stages changed.
#[derive(Debug, Clone, PartialEq)]
pub enum PostStatStageChangeAttr {
    /// Changes a stat stage of the Mon when another Mon lowers its stats.
    StatStageChangeOnLowered { boost: Boost, stages: i8 },
}

impl AbAttrHook for PostStatStageChangeAttr {
    type Args<'a> = PostStatStageChangeArgs<'a>;

    fn can_apply(&self, _: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        match self {
            Self::StatStageChangeOnLowered { .. } => {
                !args.self_inflicted && args.stages < 0 && !args.boosts.is_empty()
            }
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::StatStageChangeOnLowered { boost, stages } => {
                actions::queue_stat_stage_change(
                    context.battle_mut(),
                    mon,
                    vec![*boost],
                    *stages,
                    true,
                    Some(mon),
                );
            }
        }
        Ok(())
    }
}

/// Arguments for [`IntimidatedAttr`].
pub struct IntimidatedArgs<'a> {
    /// The Mon doing the intimidating.
    pub source: MonHandle,
    /// Set when the intimidating stat stage change should not apply.
    pub cancelled: &'a mut bool,
}

/// Attributes that apply when an opponent intimidates the Mon.
#[derive(Debug, Clone, PartialEq)]
pub enum IntimidatedAttr {
    Immunity,
    /// Changes a stat stage of the Mon in response.
    StatStageChange { boost: Boost, stages: i8 },
}

impl AbAttrHook for IntimidatedAttr {
    type Args<'a> = IntimidatedArgs<'a>;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        if args.source == context.mon_handle() {
            return false;
        }
        match self {
            Self::Immunity => {
                *args.cancelled = true;
                true
            }
            Self::StatStageChange { boost, stages } => context
                .mon()
                .is_some_and(|mon| mon.boosts.can_change(*boost, *stages)),
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::Immunity => (),
            Self::StatStageChange { boost, stages } => {
                actions::queue_stat_stage_change(
                    context.battle_mut(),
                    mon,
                    vec![*boost],
                    *stages,
                    true,
                    Some(mon),
                );
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
            Self::Immunity => Some(format!(
                "{}'s {ability_name} prevents it from being intimidated!",
                battle.mon_name(mon)
            )),
            Self::StatStageChange { .. } => None,
        }
    }
}
