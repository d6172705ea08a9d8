//! Ledger Error Types
//!
//! Every failure the core can report. The HTTP gateway maps each kind to its
//! own response category via [`LedgerError::http_status`].

use thiserror::Error;

use crate::transfer::types::ApprovalStatus;

/// Ledger error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // === Domain Errors ===
    #[error("invalid amount: must be > 0")]
    InvalidAmount,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("invalid account number: must be 18 digits")]
    InvalidAccountNumber,

    #[error("holder name cannot be empty")]
    EmptyHolder,

    #[error("amount would overflow the account balance")]
    Overflow,

    #[error("source and destination account cannot be the same")]
    SameAccount,

    // === Store Errors ===
    #[error("account not found: {0}")]
    NotFound(String),

    #[error("account already exists: {0}")]
    AlreadyExists(String),

    // === Payment Rail ===
    #[error("payment rail {status}: {cause}")]
    Transient {
        status: ApprovalStatus,
        cause: String,
    },
}

impl LedgerError {
    pub fn transient(status: ApprovalStatus, cause: impl Into<String>) -> Self {
        LedgerError::Transient {
            status,
            cause: cause.into(),
        }
    }

    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InvalidAmount => "INVALID_AMOUNT",
            LedgerError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            LedgerError::InvalidAccountNumber => "INVALID_ACCOUNT_NUMBER",
            LedgerError::EmptyHolder => "EMPTY_HOLDER",
            LedgerError::Overflow => "OVERFLOW",
            LedgerError::SameAccount => "SAME_ACCOUNT",
            LedgerError::NotFound(_) => "NOT_FOUND",
            LedgerError::AlreadyExists(_) => "ALREADY_EXISTS",
            LedgerError::Transient {
                status: ApprovalStatus::Cancelled,
                ..
            } => "PAYMENT_CANCELLED",
            LedgerError::Transient { .. } => "PAYMENT_FAILED",
        }
    }

    /// HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            LedgerError::InvalidAmount | LedgerError::SameAccount => 400,
            LedgerError::InsufficientFunds
            | LedgerError::InvalidAccountNumber
            | LedgerError::EmptyHolder
            | LedgerError::Overflow => 422,
            LedgerError::NotFound(_) => 404,
            LedgerError::AlreadyExists(_) => 409,
            LedgerError::Transient {
                status: ApprovalStatus::Cancelled,
                ..
            } => 503,
            LedgerError::Transient { .. } => 502,
        }
    }

    /// True for failures raised by the payment rail rather than the domain
    pub fn is_transient(&self) -> bool {
        matches!(self, LedgerError::Transient { .. })
    }
}
