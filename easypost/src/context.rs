//! Per-call cancellation and deadline.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::{CancelReason, EasyPostError, Result};

/// Caller-supplied context for a single API call.
///
/// Cloning shares the cancellation token, so one token can abort a batch of
/// calls. The default context never cancels and has no deadline of its own
/// (the client's configured timeout still applies).
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: CancellationToken,
    timeout: Option<Duration>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the call when `cancel` fires.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Abort the call once `timeout` has elapsed. Overrides the client default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Drive `fut` until it completes, the token fires, or `timeout` elapses.
    ///
    /// The future is dropped on cancellation, which aborts any in-flight I/O.
    pub(crate) async fn run<F, T>(&self, timeout: Option<Duration>, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.cancel.is_cancelled() {
            return Err(EasyPostError::Cancelled(CancelReason::Cancelled));
        }

        let deadline = async {
            match timeout {
                Some(d) => tokio::time::sleep(d).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(EasyPostError::Cancelled(CancelReason::Cancelled)),
            _ = deadline => Err(EasyPostError::Cancelled(CancelReason::DeadlineExceeded)),
            res = fut => res,
        }
    }
}
