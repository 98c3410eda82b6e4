//! Transcript analysis
//!
//! Fans one transcript out into three model calls and folds the answers
//! back into a single [`AnalysisResult`].

mod models;
mod normalizer;
mod orchestrator;

pub use models::{ActionItem, ActionItems, AnalysisResult, ErrorPayload, NOT_AVAILABLE};
pub use normalizer::{normalize_action_items, strip_code_fences, PARSE_FAILURE_MESSAGE};
pub use orchestrator::{Analyzer, GenerationFailure};
