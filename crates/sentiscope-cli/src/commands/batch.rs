//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use sentiscope_sdk::transform_batch;
use std::fs;

/// Most texts the service accepts per batch
pub const MAX_BATCH: usize = 100;

/// Execute the batch command.
pub async fn execute_batch(
    args: BatchArgs,
    session: &Session,
    formatter: &Formatter,
) -> Result<()> {
    let texts = collect_texts(&args)?;

    let responses = session.client().analyze_batch(&texts).await?;
    let results = transform_batch(&responses)?;

    println!("{}", formatter.format_batch(&texts, &results)?);
    Ok(())
}

/// Gather texts from arguments and the optional file.
fn collect_texts(args: &BatchArgs) -> Result<Vec<String>> {
    let mut texts = args.texts.clone();

    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path)?;
        texts.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }

    if texts.is_empty() {
        return Err(CliError::InvalidInput(
            "Provide texts as arguments or with --file".to_string(),
        ));
    }

    if let Some(position) = texts.iter().position(|t| t.trim().is_empty()) {
        return Err(CliError::InvalidInput(format!(
            "Text #{} is empty",
            position + 1
        )));
    }

    if texts.len() > MAX_BATCH {
        return Err(CliError::InvalidInput(format!(
            "At most {} texts per batch, got {}",
            MAX_BATCH,
            texts.len()
        )));
    }

    Ok(texts)
}
