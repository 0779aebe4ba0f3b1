//! Examples command implementation.

use crate::cli::ExamplesArgs;
use crate::commands::analyze::submit_and_render;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use sentiscope_domain::SentimentScore;

/// Execute the examples command.
pub async fn execute_examples(
    args: ExamplesArgs,
    session: &Session,
    formatter: &Formatter,
) -> Result<()> {
    match args.try_score {
        Some(score) => {
            let score = SentimentScore::new(score)
                .map_err(|e| CliError::InvalidInput(e.to_string()))?;
            session.probe().await;
            try_example(score, args.detailed, session, formatter).await
        }
        None => {
            let examples = session.examples().get(session.client()).await?;
            println!("{}", formatter.format_examples(examples)?);
            Ok(())
        }
    }
}

/// Analyze the first cached example for `score`.
pub async fn try_example(
    score: SentimentScore,
    detailed: bool,
    session: &Session,
    formatter: &Formatter,
) -> Result<()> {
    let examples = session.examples().get(session.client()).await?;
    let text = examples.first_for(score).ok_or_else(|| {
        CliError::InvalidInput(format!("No example available for score {}", score))
    })?;

    println!("{}", formatter.info(&format!("Example {}/3: {}", score, text)));
    submit_and_render(text, detailed, session, formatter).await
}
