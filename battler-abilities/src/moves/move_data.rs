use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    common::{
        FastHashSet,
        Id,
    },
    mons::Type,
};

/// The category of a move, which decides which stats are used for damage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    #[string = "Physical"]
    Physical,
    #[string = "Special"]
    Special,
    #[string = "Status"]
    Status,
}

/// Flags that categorize moves for ability interactions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveFlag {
    /// Makes contact with the target.
    #[string = "Contact"]
    Contact,
    #[string = "Sound"]
    Sound,
    #[string = "Punch"]
    Punch,
    #[string = "Bite"]
    Bite,
    /// Damages the user in proportion to the damage dealt.
    #[string = "Recoil"]
    Recoil,
    #[string = "Powder"]
    Powder,
}

/// Data about a move being used.
///
/// Move execution lives outside of the ability engine. Abilities only inspect the move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub typ: Type,
    pub category: MoveCategory,
    #[serde(default)]
    pub base_power: u32,
    #[serde(default)]
    pub flags: FastHashSet<MoveFlag>,
}

impl MoveData {
    /// Creates a new move with no flags.
    pub fn new(name: &str, typ: Type, category: MoveCategory, base_power: u32) -> Self {
        Self {
            id: Id::from(name),
            name: name.to_owned(),
            typ,
            category,
            base_power,
            flags: FastHashSet::default(),
        }
    }

    /// Adds a flag to the move.
    pub fn with_flag(mut self, flag: MoveFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Checks if the move has the given flag.
    pub fn has_flag(&self, flag: MoveFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Checks if the move makes contact.
    pub fn makes_contact(&self) -> bool {
        self.has_flag(MoveFlag::Contact)
    }

    /// Checks if the move deals damage.
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status
    }
}
