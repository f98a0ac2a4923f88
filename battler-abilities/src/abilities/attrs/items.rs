use battler_prng::rand_util;

use crate::{
    abilities::{
        AbAttrHook,
        DecisionContext,
        EffectContext,
    },
    battle::{
        BattlerTag,
        BattlerTagType,
        actions,
    },
    error::Error,
};

/// Attributes that apply after the Mon lost its held item.
#[derive(Debug, Clone, PartialEq)]
pub enum PostItemLostAttr {
    AddTag(BattlerTagType),
}

impl AbAttrHook for PostItemLostAttr {
    type Args<'a> = ();

    fn can_apply(&self, context: &mut DecisionContext, _: &mut Self::Args<'_>) -> bool {
        let mon = context.mon_handle();
        match self {
            Self::AddTag(tag_type) => context.can_add_tag(mon, *tag_type),
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::AddTag(tag_type) => {
                actions::try_add_tag(
                    context.battle_mut(),
                    mon,
                    BattlerTag::new(*tag_type).with_source(mon),
                )?;
            }
        }
        Ok(())
    }
}

/// Arguments for [`PostBattleAttr`].
pub struct PostBattleArgs {
    /// Did the Mon's side win?
    pub victory: bool,
}

/// Attributes that apply when the battle ends.
#[derive(Debug, Clone, PartialEq)]
pub enum PostBattleAttr {
    /// Picks up a random item consumed during the battle if the Mon is not holding one.
    Loot,
}

impl AbAttrHook for PostBattleAttr {
    type Args<'a> = PostBattleArgs;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        match self {
            Self::Loot => {
                args.victory
                    && !context.battle().field.loot.is_empty()
                    && context.mon().is_some_and(|mon| mon.item.is_none())
            }
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::Loot => {
                let battle = context.battle_mut();
                let loot = battle.field.loot.len() as u64;
                if loot == 0 {
                    return Ok(());
                }
                let index = rand_util::range(battle.prng(), 0, loot);
                let item = battle.field.loot.remove(index as usize);
                let message = format!("{} picked up {item}!", battle.mon_name(mon));
                battle.mon_mut(mon)?.item = Some(item);
                battle.queue_message(message);
            }
        }
        Ok(())
    }
}
