use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A non-volatile status condition.
///
/// A Mon can have at most one status at a time.
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
pub enum Status {
    #[string = "brn"]
    #[alias = "Burn"]
    Burn,
    #[string = "frz"]
    #[alias = "Freeze"]
    Freeze,
    #[string = "par"]
    #[alias = "Paralysis"]
    Paralysis,
    #[string = "psn"]
    #[alias = "Poison"]
    Poison,
    #[string = "tox"]
    #[alias = "Toxic"]
    BadPoison,
    #[string = "slp"]
    #[alias = "Sleep"]
    Sleep,
}

impl Status {
    /// The past-tense description used in messages, as in "cannot be *paralyzed*".
    pub fn description(&self) -> &'static str {
        match self {
            Self::Burn => "burned",
            Self::Freeze => "frozen",
            Self::Paralysis => "paralyzed",
            Self::Poison | Self::BadPoison => "poisoned",
            Self::Sleep => "put to sleep",
        }
    }
}
