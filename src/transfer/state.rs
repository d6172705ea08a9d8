//! Payment rail approval status

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final status reported by the payment rail for one transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    /// Rail approved the transfer
    Ok,
    /// Every attempt failed transiently
    Failed,
    /// Caller cancelled (or its deadline passed) while waiting to retry
    Cancelled,
}

impl ApprovalStatus {
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, ApprovalStatus::Ok)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Ok => "OK",
            ApprovalStatus::Failed => "FAILED",
            ApprovalStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApprovalStatus::Ok.to_string(), "OK");
        assert_eq!(ApprovalStatus::Failed.to_string(), "FAILED");
        assert_eq!(ApprovalStatus::Cancelled.to_string(), "CANCELLED");
    }

    #[test]
    fn test_only_ok_is_ok() {
        assert!(ApprovalStatus::Ok.is_ok());
        assert!(!ApprovalStatus::Failed.is_ok());
        assert!(!ApprovalStatus::Cancelled.is_ok());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&ApprovalStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
    }
}
