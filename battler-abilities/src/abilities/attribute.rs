use std::{
    fmt,
    fmt::Display,
};

use crate::{
    abilities::{
        Condition,
        DecisionContext,
        EffectContext,
        attrs::{
            AllyStatMultiplierAttr,
            CheckTrappedAttr,
            CriticalHitAttr,
            FieldStatMultiplierAttr,
            IntimidatedAttr,
            PostAttackAttr,
            PostBattleAttr,
            PostBattleInitAttr,
            PostDamageAttr,
            PostDefendAttr,
            PostFaintAttr,
            PostItemLostAttr,
            PostKnockOutAttr,
            PostSetStatusAttr,
            PostStatStageChangeAttr,
            PostSummonAttr,
            PostTerrainChangeAttr,
            PostTurnAttr,
            PostVictoryAttr,
            PostWeatherChangeAttr,
            PostWeatherLapseAttr,
            PreApplyBattlerTagAttr,
            PreAttackAttr,
            PreDefendAttr,
            PreLeaveFieldAttr,
            PreRecoilDamageAttr,
            PreSetStatusAttr,
            PreStatStageChangeAttr,
            PreSwitchOutAttr,
            PreWeatherDamageAttr,
            PreWeatherEffectAttr,
            StatMultiplierAttr,
        },
    },
    battle::{
        Battle,
        MonHandle,
    },
    error::Error,
};

/// An attribute that implements a single hook.
///
/// Implemented for every hook's attribute type by the `ability_hooks` macro.
pub trait HookAttr: Sized {
    /// The hook the attribute implements.
    const HOOK: AbilityHook;

    /// Selects the attribute out of an [`AbAttr`], if it implements this hook.
    fn select(attr: &AbAttr) -> Option<&Self>;
}

/// The behavior of an attribute for the hook it implements.
///
/// Application is split in two:
/// 1. [`Self::can_apply`] decides whether the attribute applies. It only has an immutable view of
///    the battle, so it runs identically in live and simulated dispatch. It may write the result
///    holders in the hook arguments.
/// 2. [`Self::apply`] performs the effect of the attribute. It only runs in live dispatch, after
///    the attribute decided to apply.
pub trait AbAttrHook: HookAttr {
    /// Arguments passed to every attribute of the hook, including result holders.
    type Args<'a>;

    /// Decides whether the attribute applies.
    ///
    /// Declining is not an error. Missing data (such as an invalid opponent handle) should be
    /// treated as a decline.
    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool;

    /// Performs the effect of the attribute.
    fn apply(&self, _context: &mut EffectContext, _args: &Self::Args<'_>) -> Result<(), Error> {
        Ok(())
    }

    /// The message displayed when the attribute applies.
    fn trigger_message(
        &self,
        _battle: &Battle,
        _mon: MonHandle,
        _ability_name: &str,
        _args: &Self::Args<'_>,
    ) -> Option<String> {
        None
    }

    /// Does applying the attribute show the ability indicator by default?
    fn shows_ability(&self) -> bool {
        true
    }
}

/// Generates [`AbilityHook`] and [`AbAttr`] from the list of hooks and the attribute type that
/// implements each one.
macro_rules! ability_hooks {
    ($($(#[$meta:meta])* $hook:ident => $attr:ident),* $(,)?) => {
        /// A category of battle event that ability attributes hook into.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum AbilityHook {
            $($(#[$meta])* $hook,)*
        }

        impl Display for AbilityHook {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$hook => write!(f, stringify!($hook)),)*
                }
            }
        }

        /// An ability attribute, tagged by the hook it implements.
        #[derive(Debug, Clone)]
        pub enum AbAttr {
            $($hook($attr),)*
        }

        impl AbAttr {
            /// The hook the attribute implements.
            pub fn hook(&self) -> AbilityHook {
                match self {
                    $(Self::$hook(_) => AbilityHook::$hook,)*
                }
            }

            fn shows_ability(&self) -> bool {
                match self {
                    $(Self::$hook(attr) => attr.shows_ability(),)*
                }
            }
        }

        $(
            impl From<$attr> for AbAttr {
                fn from(attr: $attr) -> Self {
                    Self::$hook(attr)
                }
            }

            impl HookAttr for $attr {
                const HOOK: AbilityHook = AbilityHook::$hook;

                fn select(attr: &AbAttr) -> Option<&Self> {
                    match attr {
                        AbAttr::$hook(attr) => Some(attr),
                        _ => None,
                    }
                }
            }
        )*
    };
}

ability_hooks! {
    /// The battle starts.
    PostBattleInit => PostBattleInitAttr,
    /// The Mon enters the field.
    PostSummon => PostSummonAttr,
    /// The Mon is about to switch out.
    PreSwitchOut => PreSwitchOutAttr,
    /// The Mon is about to leave the field, by switching out or fainting.
    PreLeaveField => PreLeaveFieldAttr,
    /// The Mon is about to be hit by a move.
    PreDefend => PreDefendAttr,
    /// The Mon was hit by a move.
    PostDefend => PostDefendAttr,
    /// The Mon is about to use a move.
    PreAttack => PreAttackAttr,
    /// The Mon used a move on a target.
    PostAttack => PostAttackAttr,
    /// One of the Mon's stats is being calculated.
    StatMultiplier => StatMultiplierAttr,
    /// A stat of any other Mon on the field is being calculated.
    FieldStatMultiplier => FieldStatMultiplierAttr,
    /// A stat of an ally is being calculated.
    AllyStatMultiplier => AllyStatMultiplierAttr,
    /// A critical hit is being calculated for a move involving the Mon.
    CriticalHit => CriticalHitAttr,
    /// The Mon is about to take recoil damage.
    PreRecoilDamage => PreRecoilDamageAttr,
    /// A status is about to be set on the Mon.
    PreSetStatus => PreSetStatusAttr,
    /// A status was set on the Mon.
    PostSetStatus => PostSetStatusAttr,
    /// A tag is about to be added to the Mon.
    PreApplyBattlerTag => PreApplyBattlerTagAttr,
    /// One of the Mon's stat stages is about to change.
    PreStatStageChange => PreStatStageChangeAttr,
    /// The Mon's stat stages changed.
    PostStatStageChange => PostStatStageChangeAttr,
    /// An opponent is intimidating the Mon.
    Intimidated => IntimidatedAttr,
    /// Weather is about to take effect.
    PreWeatherEffect => PreWeatherEffectAttr,
    /// The Mon is about to take damage from weather.
    PreWeatherDamage => PreWeatherDamageAttr,
    /// The weather changed.
    PostWeatherChange => PostWeatherChangeAttr,
    /// The weather lasted another turn.
    PostWeatherLapse => PostWeatherLapseAttr,
    /// The terrain changed.
    PostTerrainChange => PostTerrainChangeAttr,
    /// The turn ended.
    PostTurn => PostTurnAttr,
    /// The Mon took damage.
    PostDamage => PostDamageAttr,
    /// The Mon fainted.
    PostFaint => PostFaintAttr,
    /// Another Mon on the field fainted.
    PostKnockOut => PostKnockOutAttr,
    /// The Mon knocked out an opponent.
    PostVictory => PostVictoryAttr,
    /// An opponent is checking if it can switch out.
    CheckTrapped => CheckTrappedAttr,
    /// The Mon lost its held item.
    PostItemLost => PostItemLostAttr,
    /// The battle ended.
    PostBattle => PostBattleAttr,
}

/// A single attribute of an ability, along with the configuration that gates it.
#[derive(Debug, Clone)]
pub struct AbilityAttribute {
    attr: AbAttr,
    show_ability: bool,
    conditions: Vec<Condition>,
}

impl AbilityAttribute {
    /// Creates a new attribute, with the default visibility of the attribute type.
    pub fn new<A>(attr: A) -> Self
    where
        A: Into<AbAttr>,
    {
        let attr = attr.into();
        let show_ability = attr.shows_ability();
        Self {
            attr,
            show_ability,
            conditions: Vec::new(),
        }
    }

    /// Adds a condition that must hold for the attribute to apply.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Overrides whether applying the attribute shows the ability indicator.
    pub fn with_show_ability(mut self, show_ability: bool) -> Self {
        self.show_ability = show_ability;
        self
    }

    pub fn attr(&self) -> &AbAttr {
        &self.attr
    }

    pub fn hook(&self) -> AbilityHook {
        self.attr.hook()
    }

    /// Does applying the attribute show the ability indicator?
    pub fn show_ability(&self) -> bool {
        self.show_ability
    }

    /// Checks if all conditions on the attribute hold.
    pub fn conditions_met(&self, battle: &Battle, mon: MonHandle) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.evaluate(battle, mon))
    }
}
