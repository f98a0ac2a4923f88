use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::battle::MonHandle;

/// The type of a volatile condition attached to a single Mon.
///
/// Tags are removed when the Mon leaves the field.
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
pub enum BattlerTagType {
    #[string = "confusion"]
    Confused,
    #[string = "attract"]
    Infatuated,
    #[string = "flinch"]
    Flinched,
    #[string = "taunt"]
    Taunt,
    #[string = "drowsy"]
    Drowsy,
    #[string = "substitute"]
    Substitute,
    #[string = "trapped"]
    Trapped,
    #[string = "charged"]
    Charged,
    /// Boosts Fire-type moves after absorbing one.
    #[string = "flashfire"]
    FlashFire,
    /// Doubles Speed after losing a held item.
    #[string = "unburden"]
    Unburden,
    /// Boosts the highest stat in harsh sunlight.
    #[string = "protosynthesis"]
    Protosynthesis,
    /// Boosts the highest stat on Electric Terrain.
    #[string = "quarkdrive"]
    QuarkDrive,
}

impl BattlerTagType {
    /// The name of the tag used in messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Confused => "confusion",
            Self::Infatuated => "infatuation",
            Self::Flinched => "flinching",
            Self::Taunt => "the taunt",
            Self::Drowsy => "drowsiness",
            Self::Substitute => "the substitute",
            Self::Trapped => "trapping",
            Self::Charged => "the charge",
            Self::FlashFire => "Flash Fire",
            Self::Unburden => "Unburden",
            Self::Protosynthesis => "Protosynthesis",
            Self::QuarkDrive => "Quark Drive",
        }
    }
}

/// A volatile condition attached to a single Mon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlerTag {
    pub tag_type: BattlerTagType,
    /// Turns remaining before the tag wears off, if it ever does.
    #[serde(default)]
    pub turns_left: Option<u8>,
    /// The Mon that caused the tag.
    #[serde(default)]
    pub source: Option<MonHandle>,
}

impl BattlerTag {
    /// Creates a new tag that lasts until the Mon leaves the field.
    pub fn new(tag_type: BattlerTagType) -> Self {
        Self {
            tag_type,
            turns_left: None,
            source: None,
        }
    }

    /// Sets the number of turns the tag lasts.
    pub fn with_turns(mut self, turns: u8) -> Self {
        self.turns_left = Some(turns);
        self
    }

    /// Sets the source of the tag.
    pub fn with_source(mut self, source: MonHandle) -> Self {
        self.source = Some(source);
        self
    }
}
