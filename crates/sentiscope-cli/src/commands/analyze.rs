//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use sentiscope_sdk::RequestState;

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    session: &Session,
    formatter: &Formatter,
) -> Result<()> {
    if !session.probe().await {
        eprintln!("{}", formatter.health_banner(false, session.client().base_url()));
    }

    submit_and_render(&args.joined(), args.detailed, session, formatter).await
}

/// Submit `text` through the session lifecycle and print the final state.
///
/// A failed request comes back as an error so the process exits non-zero.
pub async fn submit_and_render(
    text: &str,
    detailed: bool,
    session: &Session,
    formatter: &Formatter,
) -> Result<()> {
    session.lifecycle().submit(text).await?;

    let state = session.lifecycle().state();
    match &state {
        RequestState::Failed(info) => Err(CliError::Request(info.message.clone())),
        _ => {
            println!("{}", formatter.format_state(&state, detailed)?);
            Ok(())
        }
    }
}
