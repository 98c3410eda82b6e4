//! CLI module for scribe
//!
//! Contains argument parsing and command implementations.

pub mod args;
pub mod commands;
pub mod completions;
mod sample;

pub use args::{Cli, Commands, ConfigCommand};
pub use sample::SAMPLE_TRANSCRIPT;
