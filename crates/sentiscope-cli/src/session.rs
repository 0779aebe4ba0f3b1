//! Process-scoped session state: one client, one lifecycle, one example cache.

use crate::config::Config;
use crate::error::Result;
use sentiscope_sdk::{
    probe_connectivity, ConnectivityFlag, ExampleCache, RequestLifecycle, SentimentClient,
};
use std::time::Duration;

/// Everything a presentation session shares.
///
/// Created once at startup; dropped at exit.
pub struct Session {
    client: SentimentClient,
    lifecycle: RequestLifecycle<SentimentClient>,
    examples: ExampleCache,
}

impl Session {
    /// Build a session for the configured service.
    pub fn new(config: &Config) -> Result<Self> {
        let client = SentimentClient::with_timeout(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )?;
        Ok(Self::with_client(client))
    }

    /// Build a session around an existing client.
    pub fn with_client(client: SentimentClient) -> Self {
        let lifecycle = RequestLifecycle::new(client.clone(), ConnectivityFlag::default());
        Self {
            client,
            lifecycle,
            examples: ExampleCache::new(),
        }
    }

    /// Probe the service and update the connectivity flag.
    pub async fn probe(&self) -> bool {
        probe_connectivity(&self.client, self.lifecycle.connectivity()).await
    }

    /// Whether the last probe succeeded.
    pub fn is_connected(&self) -> bool {
        self.lifecycle.connectivity().is_connected()
    }

    /// HTTP client.
    pub fn client(&self) -> &SentimentClient {
        &self.client
    }

    /// Request lifecycle.
    pub fn lifecycle(&self) -> &RequestLifecycle<SentimentClient> {
        &self.lifecycle
    }

    /// Example cache.
    pub fn examples(&self) -> &ExampleCache {
        &self.examples
    }
}
