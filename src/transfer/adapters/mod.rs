//! Outbound Adapters
//!
//! Ports the transfer workflow depends on besides the account store:
//! - [`PaymentGateway`]: external payment rail ([`PaymentRailClient`])
//! - [`EventPublisher`]: integration events ([`LocalEventBus`])

pub mod event_bus;
pub mod payment_rail;

// Re-export adapters for convenient access
pub use event_bus::LocalEventBus;
pub use payment_rail::{PaymentRailClient, RailTransport, SimulatedTransport};

use async_trait::async_trait;

use crate::account::AccountId;
use crate::context::RequestContext;
use crate::error::LedgerError;

use super::types::ApprovalStatus;

/// External payment rail
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Adapter name for logging
    fn name(&self) -> &'static str;

    /// Ask the rail to move `amount` from `from` to `to`
    ///
    /// `Ok(ApprovalStatus::Ok)` means approved. A terminal failure or a
    /// cancellation is reported as [`LedgerError::Transient`] carrying the
    /// status and its cause. Callers treat any non-OK status as a failed leg.
    async fn send_transfer(
        &self,
        ctx: &RequestContext,
        from: &AccountId,
        to: &AccountId,
        amount: i64,
    ) -> Result<ApprovalStatus, LedgerError>;
}

/// Best-effort event publisher
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(
        &self,
        ctx: &RequestContext,
        topic: &str,
        payload: serde_json::Value,
    ) -> anyhow::Result<()>;
}


#[cfg(test)]
pub use mock::{MockGateway, MockPublisher};
