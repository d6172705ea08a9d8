//! Transfer Core Types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::account::AccountId;

pub use super::state::ApprovalStatus;

/// Topic of the event published after a committed transfer
pub const TRANSFER_COMPLETED_TOPIC: &str = "transfer.completed";

/// Transfer request from the API layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub from: AccountId,
    pub to: AccountId,
    /// Amount in the smallest currency unit, must be > 0
    pub amount: i64,
}

impl TransferRequest {
    pub fn new(from: impl Into<AccountId>, to: impl Into<AccountId>, amount: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

impl fmt::Display for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transfer {} -> {} amount={}", self.from, self.to, self.amount)
    }
}

/// Post-transfer balances of both legs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOutcome {
    pub from_balance: i64,
    pub to_balance: i64,
}

/// Payload of [`TRANSFER_COMPLETED_TOPIC`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferCompleted {
    pub from_id: String,
    pub to_id: String,
    pub amount: i64,
    pub occurred_at: DateTime<Utc>,
}

impl TransferCompleted {
    pub fn from_request(req: &TransferRequest) -> Self {
        Self {
            from_id: req.from.to_string(),
            to_id: req.to.to_string(),
            amount: req.amount,
            occurred_at: Utc::now(),
        }
    }
}
