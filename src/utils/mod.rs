//! Small helpers shared by the CLI and batch driver.

pub mod path;
pub mod plural;
