//! Input validation for account numbers
//!
//! [`AccountNumber`] is a value object: the inner string is private so the
//! only way to obtain one is through the validating constructor.

use std::fmt;

use crate::error::LedgerError;

/// Number of digits in a normalized account number
pub const ACCOUNT_NUMBER_LEN: usize = 18;

// ============================================================================
// AccountNumber - Validated 18-digit Account Number (Private Fields)
// ============================================================================

/// Validated account number (CLABE-like: exactly 18 ASCII digits)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Create a new validated AccountNumber
    ///
    /// # Validation Rules
    /// - All whitespace is removed first (`"0321 8000 0118 3597 19"` is accepted)
    /// - The remainder must be exactly 18 characters
    /// - Every character must be an ASCII digit
    ///
    /// # Errors
    /// Returns [`LedgerError::InvalidAccountNumber`] if validation fails
    ///
    /// # Examples
    /// ```
    /// use hexledger::account::validation::AccountNumber;
    ///
    /// let number = AccountNumber::new("032180000118359719").unwrap();
    /// assert_eq!(number.as_str(), "032180000118359719");
    ///
    /// assert!(AccountNumber::new("12345").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, LedgerError> {
        let normalized: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        if normalized.len() != ACCOUNT_NUMBER_LEN {
            return Err(LedgerError::InvalidAccountNumber);
        }

        if !normalized.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LedgerError::InvalidAccountNumber);
        }

        Ok(Self(normalized))
    }

    /// Get the normalized account number as &str
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_number_valid() {
        let number = AccountNumber::new("032180000118359719").unwrap();
        assert_eq!(number.as_str(), "032180000118359719");
        assert_eq!(number.to_string(), "032180000118359719");
    }

    #[test]
    fn test_account_number_strips_spaces() {
        let spaced = AccountNumber::new("032 180 000 118 359 719").unwrap();
        let plain = AccountNumber::new("032180000118359719").unwrap();
        assert_eq!(spaced, plain);

        let padded = AccountNumber::new("  032180000118359719\t").unwrap();
        assert_eq!(padded, plain);
    }

    #[test]
    fn test_account_number_wrong_length() {
        assert_eq!(
            AccountNumber::new("12345"),
            Err(LedgerError::InvalidAccountNumber)
        );
        assert!(AccountNumber::new("").is_err());
        assert!(AccountNumber::new("   ").is_err());
        // 17 and 19 digits
        assert!(AccountNumber::new("03218000011835971").is_err());
        assert!(AccountNumber::new("0321800001183597190").is_err());
    }

    #[test]
    fn test_account_number_non_digits() {
        assert!(AccountNumber::new("03218000011835971A").is_err());
        assert!(AccountNumber::new("03218000011835971-").is_err());
        // Non-ASCII digits are rejected even though char::is_numeric accepts them
        assert!(AccountNumber::new("03218000011835971٣").is_err());
    }

    #[test]
    fn test_account_number_any_18_digits() {
        for digit in '0'..='9' {
            let raw: String = std::iter::repeat_n(digit, ACCOUNT_NUMBER_LEN).collect();
            assert!(AccountNumber::new(&raw).is_ok(), "rejected {raw}");
        }
    }
}
