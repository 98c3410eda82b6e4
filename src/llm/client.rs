use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;
use crate::ScribeError;

/// The three independent questions asked about every transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisTask {
    Summary,
    Decisions,
    ActionItems,
}

impl AnalysisTask {
    pub const ALL: [AnalysisTask; 3] = [
        AnalysisTask::Summary,
        AnalysisTask::Decisions,
        AnalysisTask::ActionItems,
    ];

    /// Human readable name used in logs and degraded field messages.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisTask::Summary => "summary generation",
            AnalysisTask::Decisions => "decision extraction",
            AnalysisTask::ActionItems => "action item extraction",
        }
    }
}

impl fmt::Display for AnalysisTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Generation request payload.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub task: AnalysisTask,
    pub transcript: &'a str,
}

/// A configured handle to a hosted text model.
///
/// Implementations hold no per-call mutable state, so a single handle is
/// shared across concurrent requests behind an `Arc`.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String>;
}

/// Build the model handle from runtime settings.
///
/// Fails with [`ScribeError::Configuration`] when no credential is
/// configured and with [`ScribeError::Initialization`] for anything else.
pub fn initialize(settings: &Settings) -> crate::Result<Arc<dyn LlmProvider>> {
    if settings.llm.api_key.trim().is_empty() {
        return Err(ScribeError::Configuration(
            "Gemini API key is missing. Set llm.api_key in config, SCRIBE_GEMINI_API_KEY or GOOGLE_API_KEY."
                .to_string(),
        ));
    }

    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => {
            let client = GeminiClient::from_settings(settings)
                .map_err(|e| ScribeError::Initialization(format!("{:#}", e)))?;
            tracing::info!(model = client.model(), "Gemini model handle ready");
            Ok(Arc::new(client))
        }
        other => Err(ScribeError::Initialization(format!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ))),
    }
}
