pub mod actions;
mod battle;
mod battle_builder;
mod battle_options;
mod field;
mod ledger;
mod mon;
mod queue;
mod tags;

pub use battle::Battle;
pub use battle_builder::BattleBuilder;
pub use battle_options::BattleOptions;
pub use field::{
    Field,
    FieldData,
    Terrain,
    TerrainType,
    Weather,
    WeatherType,
};
pub use ledger::{
    AbilityLedger,
    BattleData,
    SummonData,
    TurnData,
};
pub use mon::{
    Mon,
    MonData,
    MonHandle,
    MonLogDetails,
};
pub use queue::{
    Phase,
    PhaseQueue,
};
pub use tags::{
    BattlerTag,
    BattlerTagType,
};
