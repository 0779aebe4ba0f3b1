//! Request lifecycle: the state machine behind one analysis view.
//!
//! `Idle` until the first accepted submission, then `Loading`, then `Success`
//! or `Failed`. Both terminal states accept a new submission, which moves the
//! machine back to `Loading`.
//!
//! Every submission takes a new sequence token. An outcome is applied only if
//! its token is still the newest one when it arrives, so a slow earlier
//! request can never overwrite a later one. Nothing is cancelled; superseded
//! outcomes are dropped.

use crate::client::{Analyzer, SentimentClient};
use crate::error::{ErrorInfo, SdkError};
use crate::transform::{transform, DisplayResult};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Message shown when the submitted text is blank
pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text to analyze";

/// Message shown when the service is known to be unreachable
pub const DISCONNECTED_MESSAGE: &str = "API is not connected. Please check the backend server.";

/// Observable state of the current analysis
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The newest request succeeded
    Success(Arc<DisplayResult>),
    /// The newest request failed
    Failed(ErrorInfo),
}

impl RequestState {
    /// True while a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// The result, when in `Success`
    pub fn result(&self) -> Option<&DisplayResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// The error, when in `Failed`
    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            RequestState::Failed(info) => Some(info),
            _ => None,
        }
    }
}

/// Whether an outcome became the visible state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome was applied
    Applied,
    /// A newer submission superseded this one; the outcome was dropped
    Discarded,
}

/// Identifies one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Sequence number of the submission
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Shared "is the service reachable" flag, fed by health probes.
///
/// Starts disconnected until a probe succeeds.
#[derive(Debug, Clone, Default)]
pub struct ConnectivityFlag(Arc<AtomicBool>);

impl ConnectivityFlag {
    /// New flag in the given state
    pub fn new(connected: bool) -> Self {
        Self(Arc::new(AtomicBool::new(connected)))
    }

    /// Read the flag
    pub fn is_connected(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Set the flag
    pub fn set(&self, connected: bool) {
        self.0.store(connected, Ordering::Release);
    }
}

/// Probe the service and record the outcome in `flag`
pub async fn probe_connectivity(client: &SentimentClient, flag: &ConnectivityFlag) -> bool {
    let connected = client.check_health().await.is_ok();
    flag.set(connected);
    info!(connected, "Connectivity probe finished");
    connected
}

/// Coordinates the single in-flight analysis of a session
pub struct RequestLifecycle<A> {
    analyzer: A,
    connectivity: ConnectivityFlag,
    state: watch::Sender<RequestState>,
    sequence: AtomicU64,
}

impl<A: Analyzer> RequestLifecycle<A> {
    /// Create a lifecycle in `Idle`
    pub fn new(analyzer: A, connectivity: ConnectivityFlag) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            analyzer,
            connectivity,
            state,
            sequence: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Receive every state transition
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Connectivity flag consulted before each submission
    pub fn connectivity(&self) -> &ConnectivityFlag {
        &self.connectivity
    }

    /// The analyzer requests are sent through
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Submit `text` for analysis.
    ///
    /// Precondition failures return an error and leave the state untouched:
    /// [`SdkError::Validation`] for blank text, [`SdkError::Connectivity`] when
    /// the connectivity flag reads disconnected. Otherwise the state moves to
    /// `Loading`, the analyzer is called, and the outcome is applied unless a
    /// newer submission started meanwhile.
    pub async fn submit(&self, text: &str) -> Result<Resolution, SdkError> {
        if text.trim().is_empty() {
            warn!("Rejected blank submission");
            return Err(SdkError::Validation(EMPTY_TEXT_MESSAGE.to_string()));
        }

        if !self.connectivity.is_connected() {
            warn!("Rejected submission while disconnected");
            return Err(SdkError::Connectivity(DISCONNECTED_MESSAGE.to_string()));
        }

        let token = self.begin();
        let outcome = match self.analyzer.analyze_text(text).await {
            Ok(response) => transform(&response),
            Err(e) => Err(e),
        };

        Ok(self.resolve(token, outcome))
    }

    /// Move to `Loading` under a fresh token
    fn begin(&self) -> RequestToken {
        let mut token = RequestToken(0);
        self.state.send_modify(|state| {
            token = RequestToken(self.sequence.fetch_add(1, Ordering::AcqRel) + 1);
            *state = RequestState::Loading;
        });
        debug!(sequence = token.0, "Request started");
        token
    }

    /// Apply an outcome if `token` is still the newest submission
    fn resolve(&self, token: RequestToken, outcome: Result<DisplayResult, SdkError>) -> Resolution {
        let applied = self.state.send_if_modified(|state| {
            if self.sequence.load(Ordering::Acquire) != token.0 {
                return false;
            }
            *state = match outcome {
                Ok(result) => RequestState::Success(Arc::new(result)),
                Err(e) => RequestState::Failed(ErrorInfo::from(e)),
            };
            true
        });

        if applied {
            info!(sequence = token.0, "Request resolved");
            Resolution::Applied
        } else {
            debug!(sequence = token.0, "Discarded stale response");
            Resolution::Discarded
        }
    }
}
