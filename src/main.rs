//! scribe - Meeting transcript analysis
//!
//! Entry point for the scribe CLI and HTTP API.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scribe::cli::{Cli, Commands};
use scribe::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            scribe::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Analyze { file, json } => {
                    scribe::cli::commands::analyze_transcript(&settings, file, json).await?;
                }
                Commands::Demo { json } => {
                    scribe::cli::commands::run_demo(&settings, json).await?;
                }
                Commands::Serve { host, port } => {
                    scribe::cli::commands::serve(&settings, host, port).await?;
                }
                Commands::Config(config_cmd) => {
                    scribe::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
