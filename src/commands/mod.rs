//! Subcommand implementations

pub mod browse;
pub mod delete;
pub mod list;
pub mod reveal;
pub mod size;
