use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    battle::MonHandle,
    common::Id,
    mons::Type,
};

/// The type of weather on the field.
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
pub enum WeatherType {
    #[string = "sunnyday"]
    #[alias = "Sun"]
    Sunny,
    #[string = "raindance"]
    #[alias = "Rain"]
    Rain,
    #[string = "sandstorm"]
    Sandstorm,
    #[string = "hail"]
    Hail,
    #[string = "snow"]
    Snow,
    #[string = "fog"]
    Fog,
    #[string = "primordialsea"]
    #[alias = "Heavy Rain"]
    HeavyRain,
    #[string = "desolateland"]
    #[alias = "Harsh Sun"]
    HarshSun,
    #[string = "deltastream"]
    #[alias = "Strong Winds"]
    StrongWinds,
}

impl WeatherType {
    /// Can the weather only be replaced by another immutable weather?
    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::HeavyRain | Self::HarshSun | Self::StrongWinds)
    }

    /// Does the weather damage Mons at the end of each turn?
    pub fn is_damaging(&self) -> bool {
        matches!(self, Self::Sandstorm | Self::Hail)
    }

    /// Is the given type immune to damage from this weather?
    pub fn is_type_immune(&self, typ: Type) -> bool {
        match self {
            Self::Sandstorm => matches!(typ, Type::Rock | Type::Ground | Type::Steel),
            Self::Hail => typ == Type::Ice,
            _ => false,
        }
    }

    /// The message shown when the weather starts.
    pub fn start_message(&self) -> &'static str {
        match self {
            Self::Sunny => "The sunlight turned harsh!",
            Self::Rain => "It started to rain!",
            Self::Sandstorm => "A sandstorm kicked up!",
            Self::Hail => "It started to hail!",
            Self::Snow => "It started to snow!",
            Self::Fog => "A thick fog emerged!",
            Self::HeavyRain => "A heavy rain began to fall!",
            Self::HarshSun => "The sunlight turned extremely harsh!",
            Self::StrongWinds => "Mysterious strong winds are protecting Flying-type Pokémon!",
        }
    }

    /// The message shown when the weather ends.
    pub fn clear_message(&self) -> &'static str {
        match self {
            Self::Sunny | Self::HarshSun => "The sunlight faded.",
            Self::Rain | Self::HeavyRain => "The rain stopped.",
            Self::Sandstorm => "The sandstorm subsided.",
            Self::Hail => "The hail stopped.",
            Self::Snow => "The snow stopped.",
            Self::Fog => "The fog disappeared.",
            Self::StrongWinds => "The mysterious air current has dissipated!",
        }
    }
}

/// The type of terrain on the field.
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
pub enum TerrainType {
    #[string = "electricterrain"]
    #[alias = "Electric"]
    Electric,
    #[string = "grassyterrain"]
    #[alias = "Grassy"]
    Grassy,
    #[string = "mistyterrain"]
    #[alias = "Misty"]
    Misty,
    #[string = "psychicterrain"]
    #[alias = "Psychic"]
    Psychic,
}

impl TerrainType {
    pub fn start_message(&self) -> &'static str {
        match self {
            Self::Electric => "An electric current ran across the battlefield!",
            Self::Grassy => "Grass grew to cover the battlefield!",
            Self::Misty => "Mist swirled around the battlefield!",
            Self::Psychic => "The battlefield got weird!",
        }
    }
}

/// Weather on the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    pub weather_type: WeatherType,
    /// Turns remaining, or `None` if the weather lasts until replaced.
    #[serde(default)]
    pub turns_left: Option<u8>,
}

/// Terrain on the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terrain {
    pub terrain_type: TerrainType,
    #[serde(default)]
    pub turns_left: Option<u8>,
}

/// Data for the field of a battle.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldData {
    /// The weather on the field when the battle starts.
    #[serde(default)]
    pub weather: Option<WeatherType>,
    /// The terrain on the field when the battle starts.
    #[serde(default)]
    pub terrain: Option<TerrainType>,
}

/// The battle field, which represents the shared environment that all Mons (from both sides) battle
/// on.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
    /// Mons suppressing all other abilities on the field.
    #[serde(default)]
    pub ability_suppressors: Vec<MonHandle>,
    /// Are ignorable abilities currently being ignored?
    ///
    /// Set while a Mon that ignores abilities is using a move.
    #[serde(default)]
    pub ignore_abilities: bool,
    /// The Mon whose move is ignoring abilities.
    #[serde(default)]
    pub ignoring_source: Option<MonHandle>,
    /// Items consumed during the battle, available for pickup.
    #[serde(default)]
    pub loot: Vec<Id>,
}

impl Field {
    /// Creates a new field.
    pub fn new(data: FieldData) -> Self {
        Self {
            weather: data.weather.map(|weather_type| Weather {
                weather_type,
                turns_left: None,
            }),
            terrain: data.terrain.map(|terrain_type| Terrain {
                terrain_type,
                turns_left: None,
            }),
            ..Default::default()
        }
    }

    pub fn weather_type(&self) -> Option<WeatherType> {
        self.weather.as_ref().map(|weather| weather.weather_type)
    }

    pub fn terrain_type(&self) -> Option<TerrainType> {
        self.terrain.as_ref().map(|terrain| terrain.terrain_type)
    }

    /// Checks if the weather can be changed to the given weather.
    ///
    /// Immutable weather can only be replaced by other immutable weather.
    pub fn can_set_weather(&self, weather_type: WeatherType) -> bool {
        match self.weather_type() {
            Some(current) if current == weather_type => false,
            Some(current) if current.is_immutable() => weather_type.is_immutable(),
            _ => true,
        }
    }

    /// Is any Mon suppressing abilities on the whole field?
    pub fn abilities_suppressed(&self) -> bool {
        !self.ability_suppressors.is_empty()
    }
}
