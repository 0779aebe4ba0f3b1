//! Health command implementation.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;

/// Execute the health command.
pub async fn execute_health(session: &Session, formatter: &Formatter) -> Result<()> {
    let connected = session.probe().await;
    let banner = formatter.health_banner(connected, session.client().base_url());

    if connected {
        println!("{}", banner);
        Ok(())
    } else {
        eprintln!("{}", banner);
        Err(CliError::Sdk(sentiscope_sdk::SdkError::Connectivity(
            "Failed to connect to API".to_string(),
        )))
    }
}
