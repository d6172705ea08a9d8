//! Request context: cooperative cancellation + deadline
//!
//! Every port call receives a `&RequestContext`. The only place the core
//! actually suspends is the payment rail retry wait, which uses
//! [`RequestContext::sleep`] so that a cancel or an expired deadline unblocks
//! it immediately.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::Instant;

/// Why a context is done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    Cancelled,
    DeadlineExceeded,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::Cancelled => write!(f, "context cancelled"),
            CancelReason::DeadlineExceeded => write!(f, "context deadline exceeded"),
        }
    }
}

#[derive(Debug, Default)]
struct CancelState {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Shareable cancel handle. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal {
    state: Arc<CancelState>,
}

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake every waiter
    pub fn cancel(&self) {
        self.state.cancelled.store(true, Ordering::SeqCst);
        self.state.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once [`cancel`](Self::cancel) has been called
    pub async fn cancelled(&self) {
        let notified = self.state.notify.notified();
        tokio::pin!(notified);
        // Register before checking the flag so a concurrent cancel is not lost
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Per-request context threaded through the workflow and its ports
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    signal: CancelSignal,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// Context with a deadline `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            signal: CancelSignal::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Attach an existing cancel handle
    pub fn with_signal(mut self, signal: CancelSignal) -> Self {
        self.signal = signal;
        self
    }

    pub fn signal(&self) -> &CancelSignal {
        &self.signal
    }

    pub fn cancel(&self) {
        self.signal.cancel();
    }

    /// Non-blocking check
    pub fn done_reason(&self) -> Option<CancelReason> {
        if self.signal.is_cancelled() {
            return Some(CancelReason::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(CancelReason::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolves when the context is cancelled or its deadline passes
    pub async fn done(&self) -> CancelReason {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = self.signal.cancelled() => CancelReason::Cancelled,
                    _ = tokio::time::sleep_until(deadline) => CancelReason::DeadlineExceeded,
                }
            }
            None => {
                self.signal.cancelled().await;
                CancelReason::Cancelled
            }
        }
    }

    /// Sleep for `duration` unless the context finishes first
    pub async fn sleep(&self, duration: Duration) -> Result<(), CancelReason> {
        if let Some(reason) = self.done_reason() {
            return Err(reason);
        }
        tokio::select! {
            reason = self.done() => Err(reason),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }
}
