//! Command-line interface module.

mod args;
pub mod batch;
pub mod convert;
pub mod name;

pub use args::{BatchArgs, Cli, Commands, ConvertArgs};
