//! Turns the raw action-items reply into typed records.

use serde::Deserialize;

use crate::analysis::models::{ActionItem, ActionItems, ErrorPayload, NOT_AVAILABLE};

/// Error message carried by the payload when the reply is not usable JSON.
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse the response as JSON.";

const FENCE: &str = "```";

/// Lenient view of one element: missing and `null` fields are both `None`.
#[derive(Debug, Deserialize)]
struct RawActionItem {
    #[serde(default)]
    task: Option<String>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    deadline: Option<String>,
}

impl From<RawActionItem> for ActionItem {
    fn from(raw: RawActionItem) -> Self {
        let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        Self {
            task: or_na(raw.task),
            owner: or_na(raw.owner),
            deadline: or_na(raw.deadline),
        }
    }
}

/// Parse the model's action-items reply.
///
/// Never fails: output that is not a JSON array of objects with string (or
/// absent) `task`, `owner` and `deadline` values becomes an [`ErrorPayload`]
/// carrying `raw_text` exactly as received.
pub fn normalize_action_items(raw_text: &str) -> ActionItems {
    let cleaned = strip_code_fences(raw_text.trim());

    match serde_json::from_str::<Vec<RawActionItem>>(cleaned.trim()) {
        Ok(items) => ActionItems::Items(items.into_iter().map(ActionItem::from).collect()),
        Err(e) => {
            tracing::warn!("Action items reply is not valid JSON: {}", e);
            ActionItems::Error(ErrorPayload {
                error: PARSE_FAILURE_MESSAGE.to_string(),
                raw_response: Some(raw_text.to_string()),
            })
        }
    }
}

/// Remove every markdown fence marker, together with a language tag that
/// directly follows it, wherever it appears in `text`.
pub fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(FENCE) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + FENCE.len()..];
        let tag_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '+'))
            .unwrap_or(rest.len());
        rest = &rest[tag_len..];
    }
    out.push_str(rest);

    out
}
