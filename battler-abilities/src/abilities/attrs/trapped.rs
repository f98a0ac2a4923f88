use crate::{
    abilities::{
        AbAttrHook,
        AbilityId,
        DecisionContext,
    },
    battle::{
        Battle,
        MonHandle,
    },
    mons::Type,
};

/// The Mons an ability traps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapKind {
    /// Every opponent, unless it has the same ability.
    All,
    /// Opponents that are on the ground.
    Grounded,
    /// Steel-type opponents.
    Steel,
}

/// Arguments for [`CheckTrappedAttr`].
pub struct CheckTrappedArgs<'a> {
    /// The Mon trying to leave the field.
    pub other: MonHandle,
    pub trapped: &'a mut bool,
}

/// Attributes that apply when an opponent checks if it can leave the field.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckTrappedAttr {
    Trap(TrapKind),
}

impl AbAttrHook for CheckTrappedAttr {
    type Args<'a> = CheckTrappedArgs<'a>;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        let Ok(other) = context.battle().mon(args.other) else {
            return false;
        };
        if args.other == context.mon_handle() || other.has_type(Type::Ghost) {
            return false;
        }
        let has_ability = |id| {
            other.ability_in_slot(false) == Some(id) || other.ability_in_slot(true) == Some(id)
        };
        let traps = match self {
            Self::Trap(TrapKind::All) => !has_ability(AbilityId::ShadowTag),
            Self::Trap(TrapKind::Grounded) => {
                !other.has_type(Type::Flying) && !has_ability(AbilityId::Levitate)
            }
            Self::Trap(TrapKind::Steel) => other.has_type(Type::Steel),
        };
        if traps {
            *args.trapped = true;
        }
        traps
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        mon: MonHandle,
        ability_name: &str,
        args: &Self::Args<'_>,
    ) -> Option<String> {
        Some(format!(
            "{} can't escape because of {}'s {ability_name}!",
            battle.mon_name(args.other),
            battle.mon_name(mon)
        ))
    }

    fn shows_ability(&self) -> bool {
        false
    }
}
