use crate::{
    abilities::{
        AbAttrHook,
        DecisionContext,
        EffectContext,
        attrs::{
            can_set_any_status,
            roll_percent,
            set_random_status,
        },
    },
    battle::{
        MonHandle,
        actions,
    },
    error::Error,
    mons::{
        Status,
        Type,
    },
    moves::{
        HitResult,
        MoveData,
        MoveFilter,
    },
};

/// Arguments for [`PreAttackAttr`].
pub struct PreAttackArgs<'a> {
    pub target: Option<MonHandle>,
    pub move_data: &'a MoveData,
    pub move_type: &'a mut Type,
    pub power_multiplier: &'a mut f64,
}

/// Attributes that apply when the Mon is about to use a move.
#[derive(Debug, Clone, PartialEq)]
pub enum PreAttackAttr {
    /// Changes damaging moves of one type to another, multiplying their power.
    TypeChange { from: Type, to: Type, multiplier: f64 },
    /// Multiplies the power of matching moves.
    PowerBoost { filter: MoveFilter, multiplier: f64 },
}

impl AbAttrHook for PreAttackAttr {
    type Args<'a> = PreAttackArgs<'a>;

    fn can_apply(&self, _: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        match self {
            Self::TypeChange {
                from,
                to,
                multiplier,
            } => {
                if !args.move_data.is_damaging() || *args.move_type != *from {
                    return false;
                }
                *args.move_type = *to;
                *args.power_multiplier *= multiplier;
                true
            }
            Self::PowerBoost { filter, multiplier } => {
                if !filter.matches(args.move_data, 1.0) {
                    return false;
                }
                *args.power_multiplier *= multiplier;
                true
            }
        }
    }

    fn shows_ability(&self) -> bool {
        false
    }
}

/// Arguments for [`PostAttackAttr`].
pub struct PostAttackArgs<'a> {
    pub target: MonHandle,
    pub move_data: &'a MoveData,
    pub hit_result: HitResult,
}

/// Attributes that apply after the Mon used a move on a target.
#[derive(Debug, Clone, PartialEq)]
pub enum PostAttackAttr {
    /// Has a percent chance to set one of the statuses on the target.
    StatusOnAttack {
        contact_required: bool,
        chance: u64,
        statuses: Vec<Status>,
    },
    /// Steals the target's item if the Mon is not holding one.
    StealItem,
}

impl AbAttrHook for PostAttackAttr {
    type Args<'a> = PostAttackArgs<'a>;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        if args.target == context.mon_handle() || !args.hit_result.dealt_damage() {
            return false;
        }
        let Ok(target) = context.battle().mon(args.target) else {
            return false;
        };
        match self {
            Self::StatusOnAttack {
                contact_required,
                chance,
                statuses,
            } => {
                (!contact_required || args.move_data.makes_contact())
                    && target.status.is_none()
                    && roll_percent(context, *chance)
                    && can_set_any_status(context, args.target, statuses)
            }
            Self::StealItem => {
                target.item.is_some() && context.mon().is_some_and(|mon| mon.item.is_none())
            }
        }
    }

    fn apply(&self, context: &mut EffectContext, args: &Self::Args<'_>) -> Result<(), Error> {
        match self {
            Self::StatusOnAttack { statuses, .. } => {
                set_random_status(context, args.target, statuses)?;
            }
            Self::StealItem => {
                let mon = context.mon_handle();
                actions::transfer_item(context.battle_mut(), args.target, mon)?;
            }
        }
        Ok(())
    }
}

/// Arguments for [`PreRecoilDamageAttr`].
pub struct PreRecoilDamageArgs<'a> {
    pub cancelled: &'a mut bool,
}

/// Attributes that apply when the Mon is about to take recoil damage.
#[derive(Debug, Clone, PartialEq)]
pub enum PreRecoilDamageAttr {
    BlockRecoil,
}

impl AbAttrHook for PreRecoilDamageAttr {
    type Args<'a> = PreRecoilDamageArgs<'a>;

    fn can_apply(&self, _: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        match self {
            Self::BlockRecoil => {
                *args.cancelled = true;
                true
            }
        }
    }

    fn shows_ability(&self) -> bool {
        false
    }
}
