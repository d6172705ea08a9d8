//! Payment Rail Client
//!
//! Wraps an unreliable rail transport with retry + full-jitter backoff.
//!
//! ```text
//! attempt 0 ──fail──▶ wait delay(0) ──▶ attempt 1 ──fail──▶ ... ──▶ attempt N ──fail──▶ FAILED
//!     │                    │                                                │
//!    ok                 cancel                                             ok
//!     ▼                    ▼                                                ▼
//!     OK               CANCELLED                                            OK
//! ```
//!
//! `N = max_retries`. The backoff wait is the only suspension point and
//! observes the request context, so a cancel or an expired deadline returns
//! `CANCELLED` without another attempt.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{error, info, warn};

use super::PaymentGateway;
use crate::account::AccountId;
use crate::backoff::RetryPolicy;
use crate::context::RequestContext;
use crate::error::LedgerError;
use crate::transfer::types::ApprovalStatus;

/// One call to the external rail
#[async_trait]
pub trait RailTransport: Send + Sync {
    /// `Err(cause)` is a transient failure worth retrying
    async fn attempt(&self, from: &AccountId, to: &AccountId, amount: i64) -> Result<(), String>;
}

/// Simulated rail: each attempt succeeds with probability `success_rate`
pub struct SimulatedTransport {
    success_rate: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedTransport {
    pub const DEFAULT_SUCCESS_RATE: f64 = 0.7;

    /// `success_rate` is clamped to `[0, 1]`; NaN counts as 0
    pub fn new(success_rate: f64, rng: StdRng) -> Self {
        let success_rate = if success_rate.is_nan() {
            0.0
        } else {
            success_rate.clamp(0.0, 1.0)
        };
        Self {
            success_rate,
            rng: Mutex::new(rng),
        }
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

#[async_trait]
impl RailTransport for SimulatedTransport {
    async fn attempt(&self, _from: &AccountId, _to: &AccountId, _amount: i64) -> Result<(), String> {
        let approved = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.gen_bool(self.success_rate)
        };
        if approved {
            Ok(())
        } else {
            Err("temporary rail outage".to_string())
        }
    }
}

/// Payment gateway with retry/backoff around a [`RailTransport`]
pub struct PaymentRailClient<T: RailTransport> {
    transport: T,
    policy: RetryPolicy,
    /// Jitter source, injected so tests can seed it
    rng: Mutex<StdRng>,
}

impl<T: RailTransport> PaymentRailClient<T> {
    pub fn new(transport: T, policy: RetryPolicy, rng: StdRng) -> Self {
        Self {
            transport,
            policy,
            rng: Mutex::new(rng),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn next_delay(&self, attempt: u32) -> std::time::Duration {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        self.policy.delay(attempt, &mut *rng)
    }
}

#[async_trait]
impl<T: RailTransport> PaymentGateway for PaymentRailClient<T> {
    fn name(&self) -> &'static str {
        "payment_rail"
    }

    async fn send_transfer(
        &self,
        ctx: &RequestContext,
        from: &AccountId,
        to: &AccountId,
        amount: i64,
    ) -> Result<ApprovalStatus, LedgerError> {
        let max_retries = self.policy.max_retries;
        let mut attempt: u32 = 0;

        loop {
            let cause = match self.transport.attempt(from, to, amount).await {
                Ok(()) => {
                    if attempt > 0 {
                        info!(from = %from, to = %to, attempt, "Payment rail approved after retry");
                    }
                    return Ok(ApprovalStatus::Ok);
                }
                Err(cause) => cause,
            };

            if attempt >= max_retries {
                error!(
                    from = %from,
                    to = %to,
                    attempts = attempt + 1,
                    error = %cause,
                    "Payment rail failed after retries"
                );
                return Err(LedgerError::transient(ApprovalStatus::Failed, cause));
            }

            let sleep = self.next_delay(attempt);
            warn!(
                attempt,
                sleep_ms = sleep.as_millis() as u64,
                error = %cause,
                "Payment rail transient error, retrying"
            );

            if let Err(reason) = ctx.sleep(sleep).await {
                warn!(from = %from, to = %to, attempt, reason = %reason, "Payment rail retry cancelled");
                return Err(LedgerError::transient(
                    ApprovalStatus::Cancelled,
                    reason.to_string(),
                ));
            }

            attempt += 1;
        }
    }
}
