use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The outcome of a move hitting a target.
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
pub enum HitResult {
    #[string = "effective"]
    Effective,
    #[string = "supereffective"]
    SuperEffective,
    #[string = "notveryeffective"]
    NotVeryEffective,
    #[string = "ohko"]
    OneHitKo,
    #[string = "noeffect"]
    NoEffect,
    #[string = "status"]
    Status,
    #[string = "miss"]
    Miss,
    #[string = "fail"]
    Fail,
}

impl HitResult {
    /// Did the move deal damage?
    pub fn dealt_damage(&self) -> bool {
        matches!(
            self,
            Self::Effective | Self::SuperEffective | Self::NotVeryEffective | Self::OneHitKo
        )
    }
}
