extern crate alloc;

pub mod abilities;
pub mod battle;
pub mod common;
pub mod error;
pub mod log;
pub mod mons;
pub mod moves;
