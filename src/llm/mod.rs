//! LLM module for scribe
//!
//! Holds the model handle and the prompt templates sent to it.

mod client;
mod gemini;
mod prompts;
#[cfg(test)]
pub(crate) mod testing;

pub use client::{initialize, AnalysisTask, GenerationRequest, LlmProvider};
pub use gemini::GeminiClient;
pub use prompts::{
    build_action_items_prompt, build_decisions_prompt, build_prompt, build_summary_prompt,
};
