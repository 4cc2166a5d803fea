//! Command-line interface
//!
//! This module contains the argument parsing structures and their
//! conversion into the application configuration.

pub mod args;

// Re-export the main CLI structure for convenience
pub use args::Cli;
