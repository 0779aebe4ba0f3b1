//! Scale command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the scale command.
pub async fn execute_scale(session: &Session, formatter: &Formatter) -> Result<()> {
    let scale = session.client().get_sentiment_scale().await?;
    println!("{}", formatter.format_scale(&scale)?);
    Ok(())
}
