//! Fund Transfers
//!
//! Moves money between two accounts once the external payment rail approves.
//!
//! # Architecture
//!
//! - [`workflow::TransferWorkflow`] orchestrates a transfer over four ports:
//!   account reader, account writer, payment gateway and event publisher.
//! - [`adapters::PaymentRailClient`] talks to the (simulated) rail with
//!   retry and full-jitter backoff. Its retry wait is the only suspension
//!   point and honours the request's cancel signal and deadline.
//! - [`adapters::LocalEventBus`] records `transfer.completed` events.
//!
//! # Safety
//!
//! 1. **Validate before calling out**: debit/credit run on local snapshots
//!    before the rail is contacted, so domain errors never reach the rail.
//! 2. **Persist only on OK**: the snapshots are saved only after approval.
//!    Any other outcome discards them.
//! 3. **Best-effort events**: a publish failure is logged and never changes
//!    the transfer result.

pub mod adapters;
pub mod state;
pub mod types;
pub mod workflow;

// Re-exports for convenience
pub use adapters::{EventPublisher, LocalEventBus, PaymentGateway, PaymentRailClient};
pub use state::ApprovalStatus;
pub use types::{TRANSFER_COMPLETED_TOPIC, TransferCompleted, TransferOutcome, TransferRequest};
pub use workflow::TransferWorkflow;
