//! Session-scoped cache for the example set.

use crate::client::SentimentClient;
use crate::error::SdkError;
use crate::types::ExampleSet;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Lazily fetched, read-only example set.
///
/// The first successful fetch populates the cache; failures are returned and
/// not cached, so a later call may try again. Once populated the network is
/// never touched again.
#[derive(Debug, Default)]
pub struct ExampleCache {
    cell: OnceCell<ExampleSet>,
}

impl ExampleCache {
    /// Empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached examples, fetching them on first use
    pub async fn get(&self, client: &SentimentClient) -> Result<&ExampleSet, SdkError> {
        self.cell
            .get_or_try_init(|| async {
                debug!("Fetching example set");
                let examples = client.get_examples().await?;
                info!(scores = examples.len(), "Example set cached");
                Ok(examples)
            })
            .await
    }

    /// Cached examples without fetching
    pub fn cached(&self) -> Option<&ExampleSet> {
        self.cell.get()
    }
}
