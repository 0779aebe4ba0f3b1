//! Sentiscope CLI - Command-line client for the sentiment classification service.

use clap::Parser;
use sentiscope_cli::commands;
use sentiscope_cli::repl;
use sentiscope_cli::{Cli, Command, Config, Formatter, Session};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> sentiscope_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config; an unreadable default file is not fatal
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default configuration");
            Config::default()
        }),
    };

    config.apply_api_override(cli.api_url);
    if let Some(timeout) = cli.timeout {
        config.api.timeout_secs = timeout;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let session = Session::new(&config)?;

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, &session, &formatter).await?;
        }
        Some(Command::Health) => {
            commands::execute_health(&session, &formatter).await?;
        }
        Some(Command::Analyze(args)) => {
            commands::execute_analyze(args, &session, &formatter).await?;
        }
        Some(Command::Batch(args)) => {
            commands::execute_batch(args, &session, &formatter).await?;
        }
        Some(Command::Examples(args)) => {
            commands::execute_examples(args, &session, &formatter).await?;
        }
        Some(Command::Scale) => {
            commands::execute_scale(&session, &formatter).await?;
        }
    }

    Ok(())
}
