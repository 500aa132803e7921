//! CLI command implementations

pub mod play;
pub mod reset;
pub mod show;
pub mod simulate;
