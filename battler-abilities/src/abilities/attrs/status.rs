use crate::{
    abilities::{
        AbAttrHook,
        DecisionContext,
        EffectContext,
    },
    battle::{
        Battle,
        BattlerTagType,
        MonHandle,
        actions,
    },
    error::Error,
    mons::Status,
};

/// Arguments for [`PreSetStatusAttr`].
pub struct PreSetStatusArgs<'a> {
    pub status: Status,
    pub cancelled: &'a mut bool,
}

/// Attributes that apply when a status is about to be set on the Mon.
#[derive(Debug, Clone, PartialEq)]
pub enum PreSetStatusAttr {
    /// Prevents the given statuses, or every status if empty.
    StatusImmunity(Vec<Status>),
}

impl AbAttrHook for PreSetStatusAttr {
    type Args<'a> = PreSetStatusArgs<'a>;

    fn can_apply(&self, _: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        match self {
            Self::StatusImmunity(statuses) => {
                if !statuses.is_empty() && !statuses.contains(&args.status) {
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
        Some(format!(
            "{}'s {ability_name} prevents it from being {}!",
            battle.mon_name(mon),
            args.status.description()
        ))
    }
}

/// Arguments for [`PostSetStatusAttr`].
pub struct PostSetStatusArgs {
    /// The Mon that caused the status.
    pub source: Option<MonHandle>,
    pub status: Status,
}

/// Attributes that apply after a status was set on the Mon.
#[derive(Debug, Clone, PartialEq)]
pub enum PostSetStatusAttr {
    /// Passes burns, paralysis, and poison back to the Mon that caused them.
    Synchronize,
}

impl AbAttrHook for PostSetStatusAttr {
    type Args<'a> = PostSetStatusArgs;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        match self {
            Self::Synchronize => {
                let Some(source) = args.source else {
                    return false;
                };
                source != context.mon_handle()
                    && !matches!(args.status, Status::Sleep | Status::Freeze)
                    && context.can_set_status(source, args.status)
            }
        }
    }

    fn apply(&self, context: &mut EffectContext, args: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::Synchronize => {
                if let Some(source) = args.source {
                    actions::try_set_status(context.battle_mut(), source, args.status, Some(mon))?;
                }
            }
        }
        Ok(())
    }
}

/// Arguments for [`PreApplyBattlerTagAttr`].
pub struct PreApplyBattlerTagArgs<'a> {
    pub tag_type: BattlerTagType,
    pub cancelled: &'a mut bool,
}

/// Attributes that apply when a tag is about to be added to the Mon.
#[derive(Debug, Clone, PartialEq)]
pub enum PreApplyBattlerTagAttr {
    TagImmunity(Vec<BattlerTagType>),
}

impl AbAttrHook for PreApplyBattlerTagAttr {
    type Args<'a> = PreApplyBattlerTagArgs<'a>;

    fn can_apply(&self, _: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        match self {
            Self::TagImmunity(tag_types) => {
                if !tag_types.contains(&args.tag_type) {
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
        Some(format!(
            "{}'s {ability_name} prevents {}!",
            battle.mon_name(mon),
            args.tag_type.display_name()
        ))
    }
}
