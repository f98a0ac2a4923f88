use std::{
    borrow::Cow,
    fmt,
    fmt::Display,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::AbilityId,
    battle::{
        AbilityLedger,
        BattlerTag,
        BattlerTagType,
    },
    common::Id,
    log::BattleLoggable,
    mons::{
        BoostTable,
        Status,
        Type,
    },
};

/// A handle to a Mon in a battle.
///
/// Handles are stable for the life of the battle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonHandle(usize);

impl MonHandle {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for MonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn default_level() -> u8 {
    100
}

fn default_true() -> bool {
    true
}

/// Data for a single Mon entering a battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonData {
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u8,
    pub types: Vec<Type>,
    pub max_hp: u32,
    pub ability: AbilityId,
    #[serde(default)]
    pub passive_ability: Option<AbilityId>,
    #[serde(default)]
    pub item: Option<Id>,
    #[serde(default)]
    pub status: Option<Status>,
    /// The side of the field the Mon battles on.
    #[serde(default)]
    pub side: usize,
    /// Does the Mon start the battle on the field?
    #[serde(default = "default_true")]
    pub active: bool,
}

impl MonData {
    /// Creates data for a level 100 Mon with full health.
    pub fn new(name: &str, types: Vec<Type>, max_hp: u32, ability: AbilityId) -> Self {
        Self {
            name: name.to_owned(),
            level: default_level(),
            types,
            max_hp,
            ability,
            passive_ability: None,
            item: None,
            status: None,
            side: 0,
            active: true,
        }
    }

    pub fn with_passive(mut self, ability: AbilityId) -> Self {
        self.passive_ability = Some(ability);
        self
    }

    pub fn with_item(mut self, item: &str) -> Self {
        self.item = Some(Id::from(item));
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn on_side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn benched(mut self) -> Self {
        self.active = false;
        self
    }
}

/// A single Mon in a battle.
///
/// The ability engine treats Mons as plain data. Damage formulas and move execution live
/// elsewhere; only the state that abilities read or write is modeled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mon {
    pub name: String,
    pub level: u8,
    pub types: Vec<Type>,
    pub hp: u32,
    pub max_hp: u32,
    pub status: Option<Status>,
    pub boosts: BoostTable,
    pub tags: Vec<BattlerTag>,
    pub item: Option<Id>,
    pub ability: AbilityId,
    pub passive_ability: Option<AbilityId>,
    pub side: usize,
    pub active: bool,
    pub form: usize,
    pub ledger: AbilityLedger,
}

impl Mon {
    /// Creates a new Mon at full health.
    pub fn new(data: MonData) -> Self {
        Self {
            name: data.name,
            level: data.level,
            types: data.types,
            hp: data.max_hp,
            max_hp: data.max_hp,
            status: data.status,
            boosts: BoostTable::default(),
            tags: Vec::new(),
            item: data.item,
            ability: data.ability,
            passive_ability: data.passive_ability,
            side: data.side,
            active: data.active,
            form: 0,
            ledger: AbilityLedger::default(),
        }
    }

    /// The ability in the given slot.
    ///
    /// The primary slot respects abilities copied onto the Mon during its current stint.
    pub fn ability_in_slot(&self, passive: bool) -> Option<AbilityId> {
        if passive {
            self.passive_ability
        } else {
            Some(self.ledger.summon_data.ability.unwrap_or(self.ability))
        }
    }

    /// The Mon's current types.
    pub fn types(&self) -> &[Type] {
        self.ledger
            .summon_data
            .types
            .as_deref()
            .unwrap_or(&self.types)
    }

    pub fn has_type(&self, typ: Type) -> bool {
        self.types().contains(&typ)
    }

    pub fn fainted(&self) -> bool {
        self.hp == 0
    }

    /// Is the Mon on the field and able to act?
    pub fn on_field(&self) -> bool {
        self.active && !self.fainted()
    }

    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp as f64 / self.max_hp as f64
    }

    pub fn full_hp(&self) -> bool {
        self.hp == self.max_hp
    }

    /// Calculates a fraction of the Mon's maximum HP, which is always at least 1.
    pub fn hp_fraction(&self, ratio: f64) -> u32 {
        ((self.max_hp as f64 * ratio).floor() as u32).max(1)
    }

    pub fn tag(&self, tag_type: BattlerTagType) -> Option<&BattlerTag> {
        self.tags.iter().find(|tag| tag.tag_type == tag_type)
    }

    pub fn has_tag(&self, tag_type: BattlerTagType) -> bool {
        self.tag(tag_type).is_some()
    }

    /// Adds a tag to the Mon.
    ///
    /// Returns `false` if the tag is already present.
    pub fn add_tag(&mut self, tag: BattlerTag) -> bool {
        if self.has_tag(tag.tag_type) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Removes a tag from the Mon.
    ///
    /// Returns `false` if the tag is not present.
    pub fn remove_tag(&mut self, tag_type: BattlerTagType) -> bool {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.tag_type != tag_type);
        self.tags.len() != before
    }

    /// Applies damage to the Mon, returning the damage actually dealt.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        self.ledger.turn_data.damage_taken += dealt;
        dealt
    }

    /// Heals the Mon, returning the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if self.fainted() {
            return 0;
        }
        let healed = amount.min(self.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    /// Resets state for a new stint on the field.
    pub fn switch_in(&mut self) {
        self.active = true;
        self.boosts = BoostTable::default();
        self.tags.clear();
        self.ledger.summon_data = Default::default();
    }

    /// Removes the Mon from the field.
    pub fn switch_out(&mut self) {
        self.active = false;
        self.boosts = BoostTable::default();
        self.tags.clear();
    }

    /// Resets state for a new turn.
    pub fn start_turn(&mut self) {
        self.ledger.turn_data = Default::default();
    }

    /// Resets state for a new battle.
    pub fn start_battle(&mut self) {
        self.ledger = AbilityLedger::default();
        self.form = 0;
    }
}

/// Identifies a Mon in the battle log.
pub struct MonLogDetails<'m> {
    pub name: &'m str,
    pub side: usize,
}

impl BattleLoggable for MonLogDetails<'_> {
    fn log<'s>(&'s self, items: &mut Vec<Cow<'s, str>>) {
        items.push(format!("mon:{},{}", self.name, self.side).into());
    }
}

impl Mon {
    pub fn log_details(&self) -> MonLogDetails<'_> {
        MonLogDetails {
            name: &self.name,
            side: self.side,
        }
    }
}
