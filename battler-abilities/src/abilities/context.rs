use battler_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    abilities::Ability,
    battle::{
        Battle,
        BattlerTagType,
        Mon,
        MonHandle,
        actions,
    },
    error::Error,
    mons::Status,
};

/// The context for deciding whether an attribute applies.
///
/// Only provides an immutable view of the battle. Random numbers are drawn from a generator that is
/// only committed back to the battle in live dispatch.
pub struct DecisionContext<'d> {
    battle: &'d Battle,
    prng: &'d mut dyn PseudoRandomNumberGenerator,
    mon: MonHandle,
    ability: &'d Ability,
    passive: bool,
    simulated: bool,
}

impl<'d> DecisionContext<'d> {
    pub(crate) fn new(
        battle: &'d Battle,
        prng: &'d mut dyn PseudoRandomNumberGenerator,
        mon: MonHandle,
        ability: &'d Ability,
        passive: bool,
        simulated: bool,
    ) -> Self {
        Self {
            battle,
            prng,
            mon,
            ability,
            passive,
            simulated,
        }
    }

    pub fn battle(&self) -> &'d Battle {
        self.battle
    }

    /// The Mon whose ability is being applied.
    pub fn mon_handle(&self) -> MonHandle {
        self.mon
    }

    pub fn mon(&self) -> Option<&'d Mon> {
        self.battle.mon(self.mon).ok()
    }

    pub fn ability(&self) -> &'d Ability {
        self.ability
    }

    /// Is the ability in the passive slot?
    pub fn passive(&self) -> bool {
        self.passive
    }

    /// Is this decision part of a simulated dispatch?
    pub fn simulated(&self) -> bool {
        self.simulated
    }

    pub fn prng(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        &mut *self.prng
    }

    /// Returns whether a random event occurs.
    pub fn chance(&mut self, numerator: u64, denominator: u64) -> bool {
        rand_util::chance(&mut *self.prng, numerator, denominator)
    }

    /// Checks if a status can be set on a Mon.
    pub fn can_set_status(&mut self, target: MonHandle, status: Status) -> bool {
        actions::can_set_status(self.battle, &mut *self.prng, target, status)
    }

    /// Checks if a tag can be added to a Mon.
    pub fn can_add_tag(&mut self, target: MonHandle, tag_type: BattlerTagType) -> bool {
        actions::can_add_tag(self.battle, &mut *self.prng, target, tag_type)
    }
}

/// The context for performing the effect of an attribute.
///
/// Only created in live dispatch.
pub struct EffectContext<'e> {
    battle: &'e mut Battle,
    mon: MonHandle,
    ability: &'e Ability,
    passive: bool,
    first_in_battle: bool,
}

impl<'e> EffectContext<'e> {
    pub(crate) fn new(
        battle: &'e mut Battle,
        mon: MonHandle,
        ability: &'e Ability,
        passive: bool,
        first_in_battle: bool,
    ) -> Self {
        Self {
            battle,
            mon,
            ability,
            passive,
            first_in_battle,
        }
    }

    pub fn battle(&self) -> &Battle {
        self.battle
    }

    pub fn battle_mut(&mut self) -> &mut Battle {
        self.battle
    }

    /// The Mon whose ability is being applied.
    pub fn mon_handle(&self) -> MonHandle {
        self.mon
    }

    pub fn mon(&self) -> Result<&Mon, Error> {
        self.battle.mon(self.mon)
    }

    pub fn mon_mut(&mut self) -> Result<&mut Mon, Error> {
        self.battle.mon_mut(self.mon)
    }

    pub fn mon_name(&self) -> String {
        self.battle.mon_name(self.mon).to_owned()
    }

    pub fn ability(&self) -> &'e Ability {
        self.ability
    }

    /// Is the ability in the passive slot?
    pub fn passive(&self) -> bool {
        self.passive
    }

    /// Is this the first time the ability has applied for the Mon in the battle?
    ///
    /// Output that only reveals the ability is skipped on later applications.
    pub fn first_in_battle(&self) -> bool {
        self.first_in_battle
    }
}
