//! Transfer Workflow
//!
//! Moves funds between two accounts, gated by the payment rail.
//!
//! ```text
//! by_id(from) → by_id(to) → debit/credit (local copies)
//!      → send_transfer ──non-OK──▶ abort (nothing saved)
//!      → save(from) → save(to) → publish (best effort) → balances
//! ```
//!
//! Balance changes are applied to detached snapshots and only reach the store
//! after the rail approves. A rejected or cancelled payment leaves the store
//! untouched. The two saves are independent writes.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::adapters::{EventPublisher, PaymentGateway};
use super::types::{
    TRANSFER_COMPLETED_TOPIC, TransferCompleted, TransferOutcome, TransferRequest,
};
use crate::account::{AccountReader, AccountWriter};
use crate::context::RequestContext;
use crate::error::LedgerError;

/// Transfer orchestration over the store, rail and event ports
pub struct TransferWorkflow {
    reader: Arc<dyn AccountReader>,
    writer: Arc<dyn AccountWriter>,
    gateway: Arc<dyn PaymentGateway>,
    publisher: Arc<dyn EventPublisher>,
}

impl TransferWorkflow {
    pub fn new(
        reader: Arc<dyn AccountReader>,
        writer: Arc<dyn AccountWriter>,
        gateway: Arc<dyn PaymentGateway>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            reader,
            writer,
            gateway,
            publisher,
        }
    }

    /// Run one transfer
    ///
    /// Domain errors from the accounts surface unchanged. A non-OK rail
    /// result surfaces as [`LedgerError::Transient`].
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        req: TransferRequest,
    ) -> Result<TransferOutcome, LedgerError> {
        if req.from == req.to {
            return Err(LedgerError::SameAccount);
        }

        let mut source = self.reader.by_id(ctx, &req.from).await?;
        let mut destination = self.reader.by_id(ctx, &req.to).await?;

        source.debit(req.amount)?;
        destination.credit(req.amount)?;

        debug!(
            gateway = self.gateway.name(),
            from = %req.from,
            to = %req.to,
            amount = req.amount,
            "Requesting payment rail approval"
        );
        let status = self
            .gateway
            .send_transfer(ctx, &req.from, &req.to, req.amount)
            .await?;
        if !status.is_ok() {
            return Err(LedgerError::transient(
                status,
                format!("payment rail returned {}", status),
            ));
        }

        self.writer.save(ctx, &source).await?;
        self.writer.save(ctx, &destination).await?;

        info!(
            from = %req.from,
            to = %req.to,
            amount = req.amount,
            from_balance = source.balance(),
            to_balance = destination.balance(),
            "Transfer committed"
        );

        self.publish_completed(ctx, &req).await;

        Ok(TransferOutcome {
            from_balance: source.balance(),
            to_balance: destination.balance(),
        })
    }

    async fn publish_completed(&self, ctx: &RequestContext, req: &TransferRequest) {
        let event = TransferCompleted::from_request(req);
        let payload = match serde_json::to_value(&event) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to encode transfer event");
                return;
            }
        };

        if let Err(e) = self
            .publisher
            .publish(ctx, TRANSFER_COMPLETED_TOPIC, payload)
            .await
        {
            warn!(
                topic = TRANSFER_COMPLETED_TOPIC,
                from = %req.from,
                to = %req.to,
                error = %e,
                "Failed to publish transfer event"
            );
        }
    }
}
