//! Data types returned by an analysis

use serde::{Deserialize, Serialize};

/// Placeholder for a field the model could not determine.
pub const NOT_AVAILABLE: &str = "N/A";

/// A task extracted from the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub owner: String,
    pub deadline: String,
}

/// Returned in place of action items when they could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
    /// Untouched model output, kept for diagnosis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

/// Either the parsed action items or the reason there are none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionItems {
    Items(Vec<ActionItem>),
    Error(ErrorPayload),
}

impl ActionItems {
    pub fn is_error(&self) -> bool {
        matches!(self, ActionItems::Error(_))
    }
}

/// Aggregate answer for one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub decisions: String,
    pub action_items: ActionItems,
}
