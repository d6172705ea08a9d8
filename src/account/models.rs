//! Account entity
//!
//! Invariants:
//! - balance never goes below zero
//! - holder name is never blank
//!
//! Balance changes only through [`Account::credit`] and [`Account::debit`].

use std::fmt;

use crate::error::LedgerError;

use super::validation::AccountNumber;

/// Opaque account identifier
///
/// Freshly minted ids are ULIDs, but any string received from a caller is
/// accepted as a lookup key (an unknown id is simply `NotFound`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(String);

impl AccountId {
    /// Mint a new unique AccountId
    pub fn generate() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ledger account. Balance is held in the smallest currency unit (cents).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    account_number: AccountNumber,
    balance: i64,
}

impl Account {
    /// Construct a valid account with zero balance
    ///
    /// The account number is already validated by [`AccountNumber::new`].
    pub fn new(
        id: AccountId,
        holder_name: impl Into<String>,
        account_number: AccountNumber,
    ) -> Result<Self, LedgerError> {
        let holder_name = holder_name.into();
        if holder_name.trim().is_empty() {
            return Err(LedgerError::EmptyHolder);
        }

        Ok(Self {
            id,
            holder_name,
            account_number,
            balance: 0,
        })
    }

    /// Increase the balance
    pub fn credit(&mut self, amount: i64) -> Result<(), LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Decrease the balance, never below zero
    pub fn debit(&mut self, amount: i64) -> Result<(), LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account{{id={}, holder={}, number={}, balance={}}}",
            self.id, self.holder_name, self.account_number, self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn test_account() -> Account {
        let number = AccountNumber::new("032180000118359719").unwrap();
        Account::new(AccountId::from("acc-1"), "Alice", number).unwrap()
    }

    #[test]
    fn test_new_account_starts_at_zero() {
        let account = test_account();
        assert_eq!(account.balance(), 0);
        assert_eq!(account.holder_name(), "Alice");
        assert_eq!(account.id().as_str(), "acc-1");
        assert_eq!(account.account_number().as_str(), "032180000118359719");
    }

    #[test]
    fn test_blank_holder_rejected() {
        let number = AccountNumber::new("032180000118359719").unwrap();
        for holder in ["", " ", "\t\n  "] {
            let result = Account::new(AccountId::from("acc-1"), holder, number.clone());
            assert_eq!(result, Err(LedgerError::EmptyHolder));
        }
    }

    #[test]
    fn test_credit_and_debit() {
        let mut account = test_account();

        account.credit(1000).unwrap();
        assert_eq!(account.balance(), 1000);

        account.debit(500).unwrap();
        assert_eq!(account.balance(), 500);

        assert_eq!(account.debit(600), Err(LedgerError::InsufficientFunds));
        assert_eq!(account.balance(), 500);
    }

    #[test]
    fn test_debit_entire_balance() {
        let mut account = test_account();
        account.credit(700).unwrap();
        account.debit(700).unwrap();
        assert_eq!(account.balance(), 0);
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        let mut account = test_account();
        account.credit(100).unwrap();

        for amount in [0, -1, -100, i64::MIN] {
            assert_eq!(account.credit(amount), Err(LedgerError::InvalidAmount));
            assert_eq!(account.debit(amount), Err(LedgerError::InvalidAmount));
            assert_eq!(account.balance(), 100);
        }
    }

    #[test]
    fn test_debit_exceeding_balance() {
        for balance in [0_i64, 1, 999, 10_000] {
            let mut account = test_account();
            if balance > 0 {
                account.credit(balance).unwrap();
            }
            for excess in [1_i64, 2, 1_000_000] {
                assert_eq!(
                    account.debit(balance + excess),
                    Err(LedgerError::InsufficientFunds)
                );
                assert_eq!(account.balance(), balance);
            }
        }
    }

    #[test]
    fn test_credit_overflow_rejected() {
        let mut account = test_account();
        account.credit(i64::MAX).unwrap();
        assert_eq!(account.credit(1), Err(LedgerError::Overflow));
        assert_eq!(account.balance(), i64::MAX);
    }

    #[test]
    fn test_balance_tracks_applied_operations() {
        // Seeded sequence of operations, including invalid amounts
        let mut rng = StdRng::seed_from_u64(0x2545_f491_4f6c_dd1d);
        let mut account = test_account();
        let mut expected: i64 = 0;

        for _ in 0..1_000 {
            let amount: i64 = rng.gen_range(-50..450);
            let is_credit = rng.gen_bool(0.5);

            if is_credit {
                if account.credit(amount).is_ok() {
                    expected += amount;
                }
            } else if account.debit(amount).is_ok() {
                expected -= amount;
            }

            assert_eq!(account.balance(), expected);
            assert!(account.balance() >= 0);
        }
    }
}
