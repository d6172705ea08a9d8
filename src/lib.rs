//! Hexledger - in-memory ledger service
//!
//! Accounts with validated 18-digit account numbers, deposits, and transfers
//! gated by a simulated payment rail that retries with full-jitter backoff.
//!
//! # Modules
//!
//! - [`account`] - Account entity, account number, store ports, account service
//! - [`transfer`] - Transfer workflow, payment rail client, event bus
//! - [`backoff`] - Exponential backoff with full jitter
//! - [`context`] - Per-request cancel signal and deadline
//! - [`error`] - `LedgerError`
//! - [`gateway`] - HTTP API (axum + OpenAPI docs)
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod account;
pub mod backoff;
pub mod config;
pub mod context;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountId, AccountNumber, AccountService, InMemoryAccountStore};
pub use backoff::RetryPolicy;
pub use context::RequestContext;
pub use error::LedgerError;
pub use transfer::{ApprovalStatus, TransferRequest, TransferWorkflow};
