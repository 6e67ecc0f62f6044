//! Command-line interface module.

mod args;
pub mod capacity;
pub mod common;
pub mod hide;
pub mod reveal;

pub use args::{CapacityArgs, Cli, Commands, HideArgs, RevealArgs};
