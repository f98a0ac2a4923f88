mod boosts;
mod status;
mod types;

pub use boosts::{
    Boost,
    BoostTable,
    Stat,
};
pub use status::Status;
pub use types::Type;
