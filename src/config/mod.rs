//! Configuration module for scribe
//!
//! Handles loading settings from TOML files, `.env` and the environment.

mod settings;

pub use settings::{Settings, API_KEY_ENV_VARS};
