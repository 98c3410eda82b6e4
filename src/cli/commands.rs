//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::analysis::{ActionItems, AnalysisResult, Analyzer};
use crate::cli::args::ConfigCommand;
use crate::cli::SAMPLE_TRANSCRIPT;
use crate::config::Settings;
use crate::llm;
use crate::ScribeError;

/// Analyze a transcript read from a file or stdin
pub async fn analyze_transcript(
    settings: &Settings,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let transcript = read_transcript(file.as_deref())?;
    if transcript.trim().is_empty() {
        return Err(ScribeError::Validation("Transcript is empty".to_string()).into());
    }

    run_analysis(settings, &transcript, json).await
}

/// Analyze the built-in sample meeting
pub async fn run_demo(settings: &Settings, json: bool) -> Result<()> {
    if !json {
        println!("Processing sample transcript with Gemini...");
        println!();
    }
    run_analysis(settings, SAMPLE_TRANSCRIPT, json).await
}

/// Run the HTTP API
pub async fn serve(settings: &Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    let analyzer = build_analyzer(&settings)?;
    crate::server::run(&settings, analyzer).await
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.is_empty() {
                shown.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Helper functions

fn build_analyzer(settings: &Settings) -> Result<Analyzer> {
    let provider = llm::initialize(settings)?;
    Ok(Analyzer::new(provider, settings.call_timeout()))
}

async fn run_analysis(settings: &Settings, transcript: &str, json: bool) -> Result<()> {
    let analyzer = build_analyzer(settings)?;
    let result = analyzer.analyze(transcript).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_result(&result));
    }

    Ok(())
}

fn read_transcript(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript: {}", path.display())),
        _ => {
            let mut transcript = String::new();
            std::io::stdin()
                .read_to_string(&mut transcript)
                .context("Failed to read transcript from stdin")?;
            Ok(transcript)
        }
    }
}

fn render_result(result: &AnalysisResult) -> String {
    let rule = "-".repeat(30);
    let mut output = String::new();

    output.push_str("Executive Summary\n");
    output.push_str(&format!("{}\n{}\n\n", rule, result.summary.trim()));

    output.push_str("Key Decisions\n");
    output.push_str(&format!("{}\n{}\n\n", rule, result.decisions.trim()));

    output.push_str("Action Items\n");
    output.push_str(&format!("{}\n", rule));
    match &result.action_items {
        ActionItems::Items(items) if items.is_empty() => {
            output.push_str("(none)\n");
        }
        ActionItems::Items(items) => {
            for (i, item) in items.iter().enumerate() {
                output.push_str(&format!(
                    "{}. {} (owner: {}, deadline: {})\n",
                    i + 1,
                    item.task,
                    item.owner,
                    item.deadline
                ));
            }
        }
        ActionItems::Error(payload) => {
            output.push_str(&format!("Error: {}\n", payload.error));
            if let Some(raw) = &payload.raw_response {
                output.push_str(&format!("Raw response from model:\n{}\n", raw));
            }
        }
    }

    output
}
