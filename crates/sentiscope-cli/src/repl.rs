//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Any line that is not a `:` command is analyzed as review text.

use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sentiscope_domain::SentimentScore;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl(config: &Config, session: &Session, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info(
            "Sentiscope REPL - Type text to analyze, ':help' for commands, ':quit' to exit"
        )
    );

    let connected = session.probe().await;
    println!("{}", formatter.health_banner(connected, session.client().base_url()));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut detailed = false;

    loop {
        let prompt = if session.is_connected() {
            "sentiscope> "
        } else {
            "sentiscope (disconnected)> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                let outcome = match parse_repl_command(line) {
                    Ok(ReplCommand::Quit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                        Ok(())
                    }
                    Ok(ReplCommand::Detailed) => {
                        detailed = !detailed;
                        let mode = if detailed { "on" } else { "off" };
                        println!("{}", formatter.info(&format!("Detailed probabilities {}", mode)));
                        Ok(())
                    }
                    Ok(ReplCommand::Health) => commands::execute_health(session, formatter).await,
                    Ok(ReplCommand::Examples) => show_examples(session, formatter).await,
                    Ok(ReplCommand::Try(score)) => {
                        commands::try_example(score, detailed, session, formatter).await
                    }
                    Ok(ReplCommand::Analyze(text)) => {
                        commands::submit_and_render(&text, detailed, session, formatter).await
                    }
                    Err(e) => Err(e),
                };

                if let Err(e) = outcome {
                    eprintln!("{}", formatter.error(&e.to_string()));
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use ':quit' to exit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Quit,
    Help,
    Detailed,
    Health,
    Examples,
    Try(SentimentScore),
    Analyze(String),
}

/// Parse a REPL line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(ReplCommand::Analyze(line.to_string()));
    };

    let parts: Vec<&str> = command.split_whitespace().collect();
    let Some(name) = parts.first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match *name {
        "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
        "help" | "?" => Ok(ReplCommand::Help),
        "detailed" | "d" => Ok(ReplCommand::Detailed),
        "health" => Ok(ReplCommand::Health),
        "examples" => Ok(ReplCommand::Examples),
        "try" => parse_try_command(&parts[1..]),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: :{}. Type ':help' for available commands.",
            name
        ))),
    }
}

fn parse_try_command(args: &[&str]) -> Result<ReplCommand> {
    let usage = || CliError::InvalidInput("Usage: :try <score> (-3..3)".to_string());

    let raw = args.first().ok_or_else(usage)?;
    let score: SentimentScore = raw.parse().map_err(|_| usage())?;
    Ok(ReplCommand::Try(score))
}

async fn show_examples(session: &Session, formatter: &Formatter) -> Result<()> {
    let examples = session.examples().get(session.client()).await?;
    println!("{}", formatter.format_examples(examples)?);
    Ok(())
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let sentiscope_dir = home.join(".sentiscope");
    std::fs::create_dir_all(&sentiscope_dir)?;
    Ok(sentiscope_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <text>               - Analyze the sentiment of <text>");
    println!("  :examples            - List example reviews by score");
    println!("  :try <score>         - Analyze the first example for a score (-3..3)");
    println!("  :detailed, :d        - Toggle 2-decimal probabilities");
    println!("  :health              - Re-check the service connection");
    println!("  :help, :?            - Show this help");
    println!("  :quit, :exit, :q     - Exit REPL");
    println!();
}
