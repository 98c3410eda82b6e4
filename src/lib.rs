//! scribe - Meeting transcript analysis backed by a hosted LLM
//!
//! A transcript goes in; an executive summary, the key decisions and a
//! structured list of action items come out.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod llm;
pub mod server;

use thiserror::Error;

/// Main error type for scribe
#[derive(Error, Debug)]
pub enum ScribeError {
    /// A required setting (the API credential) is missing. Fatal at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The model handle could not be constructed. Fatal at startup.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Caller-supplied input was rejected before reaching the model.
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ScribeError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "scribe";
