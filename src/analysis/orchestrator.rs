//! Runs the three generation calls for a transcript and aggregates them.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::analysis::models::{ActionItems, AnalysisResult, ErrorPayload};
use crate::analysis::normalizer::normalize_action_items;
use crate::llm::{AnalysisTask, GenerationRequest, LlmProvider};
use crate::ScribeError;

/// Why a single generation call produced no text.
#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error("{0:#}")]
    Provider(anyhow::Error),

    #[error("timed out after {}s", .0.as_secs())]
    TimedOut(Duration),
}

/// Orchestrates analyses against one shared model handle.
#[derive(Clone)]
pub struct Analyzer {
    provider: Arc<dyn LlmProvider>,
    call_timeout: Duration,
}

impl Analyzer {
    pub fn new(provider: Arc<dyn LlmProvider>, call_timeout: Duration) -> Self {
        Self {
            provider,
            call_timeout,
        }
    }

    /// Analyze a transcript.
    ///
    /// Only an empty transcript is an error, and it is reported before any
    /// model call. A failed call degrades its own field and leaves the
    /// other two untouched.
    pub async fn analyze(&self, transcript: &str) -> crate::Result<AnalysisResult> {
        if transcript.trim().is_empty() {
            return Err(ScribeError::Validation(
                "Transcript must not be empty".to_string(),
            ));
        }

        info!(chars = transcript.len(), "Analyzing transcript");

        let (summary, decisions, action_items) = tokio::join!(
            self.generate(AnalysisTask::Summary, transcript),
            self.generate(AnalysisTask::Decisions, transcript),
            self.generate(AnalysisTask::ActionItems, transcript),
        );

        Ok(AnalysisResult {
            summary: summary.unwrap_or_else(|e| degraded_text(AnalysisTask::Summary, &e)),
            decisions: decisions.unwrap_or_else(|e| degraded_text(AnalysisTask::Decisions, &e)),
            action_items: match action_items {
                Ok(raw) => normalize_action_items(&raw),
                Err(e) => ActionItems::Error(ErrorPayload {
                    error: degraded_text(AnalysisTask::ActionItems, &e),
                    raw_response: None,
                }),
            },
        })
    }

    async fn generate(
        &self,
        task: AnalysisTask,
        transcript: &str,
    ) -> Result<String, GenerationFailure> {
        debug!("Requesting {}", task);

        let request = GenerationRequest { task, transcript };
        let outcome = match tokio::time::timeout(self.call_timeout, self.provider.generate(request))
            .await
        {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(GenerationFailure::Provider(e)),
            Err(_) => Err(GenerationFailure::TimedOut(self.call_timeout)),
        };

        if let Err(e) = &outcome {
            warn!("{} failed: {}", task, e);
        }
        outcome
    }
}

fn degraded_text(task: AnalysisTask, failure: &GenerationFailure) -> String {
    format!("An error occurred during {}: {}", task, failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{ActionItem, NOT_AVAILABLE};
    use crate::llm::testing::{StubProvider, StubReply};

    fn analyzer(stub: Arc<StubProvider>) -> Analyzer {
        Analyzer::new(stub, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn aggregates_all_three_fields() {
        let stub = Arc::new(StubProvider::new());
        let result = analyzer(stub.clone()).analyze("Sarah: let's ship.").await.unwrap();

        assert_eq!(result.summary, "The team agreed on the login redesign.");
        assert_eq!(result.decisions, "1. Use the single-column layout.");
        assert_eq!(
            result.action_items,
            ActionItems::Items(vec![ActionItem {
                task: "Final assets".to_string(),
                owner: "Chloe".to_string(),
                deadline: "Wednesday EOD".to_string(),
            }])
        );
        assert_eq!(stub.calls(), 3);
    }

    #[tokio::test]
    async fn empty_transcript_is_rejected_without_model_calls() {
        let stub = Arc::new(StubProvider::new());
        let analyzer = analyzer(stub.clone());

        for transcript in ["", "   \n\t"] {
            let err = analyzer.analyze(transcript).await.unwrap_err();
            assert!(matches!(err, ScribeError::Validation(_)));
        }
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn summary_failure_leaves_other_fields_intact() {
        let stub = Arc::new(
            StubProvider::new().with(AnalysisTask::Summary, StubReply::Fail("quota".to_string())),
        );
        let result = analyzer(stub).analyze("transcript").await.unwrap();

        assert_eq!(
            result.summary,
            "An error occurred during summary generation: quota"
        );
        assert_eq!(result.decisions, "1. Use the single-column layout.");
        assert!(!result.action_items.is_error());
    }

    #[tokio::test]
    async fn action_item_call_failure_becomes_payload_without_raw_text() {
        let stub = Arc::new(
            StubProvider::new()
                .with(AnalysisTask::ActionItems, StubReply::Fail("offline".to_string())),
        );
        let result = analyzer(stub).analyze("transcript").await.unwrap();

        assert_eq!(
            result.action_items,
            ActionItems::Error(ErrorPayload {
                error: "An error occurred during action item extraction: offline".to_string(),
                raw_response: None,
            })
        );
        assert_eq!(result.summary, "The team agreed on the login redesign.");
    }

    #[tokio::test]
    async fn fenced_and_partial_action_items_are_normalized() {
        let stub = Arc::new(StubProvider::new().with(
            AnalysisTask::ActionItems,
            StubReply::Text("```json\n[{\"task\":\"Docs\",\"owner\":\"Mark\"}]\n```".to_string()),
        ));
        let result = analyzer(stub).analyze("transcript").await.unwrap();

        match result.action_items {
            ActionItems::Items(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].deadline, NOT_AVAILABLE);
            }
            other => panic!("expected items, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_call_times_out_into_degraded_field() {
        let stub = Arc::new(StubProvider::new().with(AnalysisTask::Decisions, StubReply::Hang));
        let result = Analyzer::new(stub, Duration::from_secs(30))
            .analyze("transcript")
            .await
            .unwrap();

        assert_eq!(
            result.decisions,
            "An error occurred during decision extraction: timed out after 30s"
        );
        assert_eq!(result.summary, "The team agreed on the login redesign.");
    }

    #[tokio::test]
    async fn identical_transcripts_give_identical_results() {
        let analyzer = analyzer(Arc::new(StubProvider::new()));

        let first = analyzer.analyze("same input").await.unwrap();
        let second = analyzer.analyze("same input").await.unwrap();
        assert_eq!(first, second);
    }
}
