//! Account use cases: open, deposit, lookup

use std::sync::Arc;

use tracing::{debug, info};

use crate::context::RequestContext;
use crate::error::LedgerError;

use super::models::{Account, AccountId};
use super::repository::{AccountReader, AccountWriter};
use super::validation::AccountNumber;

/// Result of opening an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedAccount {
    pub id: AccountId,
    pub holder_name: String,
    pub account_number: String,
    pub balance: i64,
}

impl From<&Account> for OpenedAccount {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().clone(),
            holder_name: account.holder_name().to_string(),
            account_number: account.account_number().to_string(),
            balance: account.balance(),
        }
    }
}

/// Result of a deposit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositReceipt {
    pub id: AccountId,
    pub balance: i64,
}

/// Account service over the store ports
pub struct AccountService {
    reader: Arc<dyn AccountReader>,
    writer: Arc<dyn AccountWriter>,
}

impl AccountService {
    pub fn new(reader: Arc<dyn AccountReader>, writer: Arc<dyn AccountWriter>) -> Self {
        Self { reader, writer }
    }

    /// Validate input, mint an id and create the account with zero balance
    pub async fn open_account(
        &self,
        ctx: &RequestContext,
        holder_name: &str,
        account_number: &str,
    ) -> Result<OpenedAccount, LedgerError> {
        let number = AccountNumber::new(account_number)?;
        let account = Account::new(AccountId::generate(), holder_name, number)?;

        self.writer.create(ctx, &account).await?;
        info!(account_id = %account.id(), "Account opened");

        Ok(OpenedAccount::from(&account))
    }

    /// Credit `amount` to an existing account
    pub async fn deposit(
        &self,
        ctx: &RequestContext,
        id: &AccountId,
        amount: i64,
    ) -> Result<DepositReceipt, LedgerError> {
        let mut account = self.reader.by_id(ctx, id).await?;
        account.credit(amount)?;
        self.writer.save(ctx, &account).await?;

        debug!(account_id = %id, amount, balance = account.balance(), "Deposit applied");
        Ok(DepositReceipt {
            id: account.id().clone(),
            balance: account.balance(),
        })
    }

    /// Snapshot of an account
    pub async fn get_account(
        &self,
        ctx: &RequestContext,
        id: &AccountId,
    ) -> Result<Account, LedgerError> {
        self.reader.by_id(ctx, id).await
    }
}
