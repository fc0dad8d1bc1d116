//! DiskMan - an interactive disk usage browser
//!
//! This crate provides functionality for:
//! - Computing the cumulative size of files and directory trees
//! - Listing a directory's entries sorted largest-first
//! - Deleting entries and revealing them in the system file manager
//! - An interactive terminal browser built on the above

pub mod actions;
pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod platform;
pub mod progress;
pub mod scanner;

// Re-export commonly used types
pub use actions::delete_entry;
pub use config::Config;
pub use error::{DiskManError, Result};
pub use scanner::{compute_size, list_directory, DirectoryEntry};
