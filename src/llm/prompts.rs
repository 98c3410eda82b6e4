use crate::llm::client::AnalysisTask;

/// Build the prompt for one analysis task.
pub fn build_prompt(task: AnalysisTask, transcript: &str) -> String {
    match task {
        AnalysisTask::Summary => build_summary_prompt(transcript),
        AnalysisTask::Decisions => build_decisions_prompt(transcript),
        AnalysisTask::ActionItems => build_action_items_prompt(transcript),
    }
}

/// Executive summary prompt. The response is relayed verbatim.
pub fn build_summary_prompt(transcript: &str) -> String {
    format!(
        "You are an expert meeting assistant. Your task is to provide a concise, professional \
executive summary of the following meeting transcript. Focus on the main objectives, outcomes, \
and conclusions.\n\
\n\
Transcript:\n\
{transcript}"
    )
}

/// Key decisions prompt. The response is relayed verbatim.
pub fn build_decisions_prompt(transcript: &str) -> String {
    format!(
        "Analyze the following meeting transcript and extract the key decisions that were made.\n\
Present them as a clear, numbered list. If no specific decisions are found, state that \
explicitly and do not invent any.\n\
\n\
Transcript:\n\
{transcript}"
    )
}

/// Action items prompt. The response must be a bare JSON array.
pub fn build_action_items_prompt(transcript: &str) -> String {
    format!(
        "You are a highly accurate task extraction bot. From the following meeting transcript, \
identify all action items.\n\
\n\
Rules:\n\
- Your response MUST be a valid JSON list of objects.\n\
- Each object represents one action item and has exactly the keys 'task', 'owner' and 'deadline'.\n\
- If a value for a key is not explicitly mentioned, use the string 'N/A'.\n\
- Do not include any text, explanation, or markdown formatting (no code fences) before or after the JSON list.\n\
- If there are no action items, respond with [].\n\
\n\
Transcript:\n\
{transcript}"
    )
}
