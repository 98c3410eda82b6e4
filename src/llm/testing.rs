//! Deterministic provider used by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::llm::client::{AnalysisTask, GenerationRequest, LlmProvider};

pub(crate) enum StubReply {
    Text(String),
    Fail(String),
    Hang,
}

/// Answers each task with a canned reply and counts calls.
pub(crate) struct StubProvider {
    replies: HashMap<AnalysisTask, StubReply>,
    calls: AtomicUsize,
}

impl StubProvider {
    /// A provider that answers every task successfully.
    pub(crate) fn new() -> Self {
        let mut replies = HashMap::new();
        replies.insert(
            AnalysisTask::Summary,
            StubReply::Text("The team agreed on the login redesign.".to_string()),
        );
        replies.insert(
            AnalysisTask::Decisions,
            StubReply::Text("1. Use the single-column layout.".to_string()),
        );
        replies.insert(
            AnalysisTask::ActionItems,
            StubReply::Text(
                r#"[{"task":"Final assets","owner":"Chloe","deadline":"Wednesday EOD"}]"#
                    .to_string(),
            ),
        );
        Self {
            replies,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with(mut self, task: AnalysisTask, reply: StubReply) -> Self {
        self.replies.insert(task, reply);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(&request.task) {
            Some(StubReply::Text(text)) => Ok(text.clone()),
            Some(StubReply::Fail(message)) => Err(anyhow::anyhow!("{}", message)),
            Some(StubReply::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                anyhow::bail!("stub woke up")
            }
            None => anyhow::bail!("no stub reply for {}", request.task),
        }
    }
}
