use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    mons::Type,
    moves::{
        MoveCategory,
        MoveData,
        MoveFlag,
    },
};

/// A declarative check against a move, configured on attributes that only react to some moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MoveFilter {
    /// Any move.
    Any,
    /// Moves of the given type.
    OfType(Type),
    /// Moves of the given category.
    Category(MoveCategory),
    /// Moves with the given flag.
    Flag(MoveFlag),
    /// Damaging moves that make contact.
    Contact,
    /// Moves that are super effective against the target.
    SuperEffective,
    /// Damaging moves with base power at or below the given value.
    PowerAtMost(u32),
    /// Damaging moves of any of the given types.
    AnyOfTypes(Vec<Type>),
}

impl MoveFilter {
    /// Checks if the move matches the filter.
    ///
    /// `effectiveness` is the type effectiveness multiplier of the move against its target.
    pub fn matches(&self, move_data: &MoveData, effectiveness: f64) -> bool {
        match self {
            Self::Any => true,
            Self::OfType(typ) => move_data.typ == *typ,
            Self::Category(category) => move_data.category == *category,
            Self::Flag(flag) => move_data.has_flag(*flag),
            Self::Contact => move_data.is_damaging() && move_data.makes_contact(),
            Self::SuperEffective => move_data.is_damaging() && effectiveness > 1.0,
            Self::PowerAtMost(power) => move_data.is_damaging() && move_data.base_power <= *power,
            Self::AnyOfTypes(types) => move_data.is_damaging() && types.contains(&move_data.typ),
        }
    }
}
