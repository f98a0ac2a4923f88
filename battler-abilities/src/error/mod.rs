mod context;
mod engine_error;
mod wrap;

pub use anyhow::Error;
pub use engine_error::{
    GeneralError,
    NotFoundError,
    general_error,
    not_found_error,
};
pub use wrap::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
