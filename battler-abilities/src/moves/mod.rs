mod hit_result;
mod move_data;
mod move_filter;

pub use hit_result::HitResult;
pub use move_data::{
    MoveCategory,
    MoveData,
    MoveFlag,
};
pub use move_filter::MoveFilter;
