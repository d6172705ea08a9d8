//! Account store ports and the in-memory store
//!
//! Reader and writer are split so a use case only depends on what it needs.
//! Both hand out / take copies: the store never shares its `Account` values
//! with callers.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::LedgerError;

use super::models::{Account, AccountId};

/// Read side of the account store
#[async_trait]
pub trait AccountReader: Send + Sync {
    /// Detached snapshot of the account, or `NotFound`
    async fn by_id(&self, ctx: &RequestContext, id: &AccountId) -> Result<Account, LedgerError>;
}

/// Write side of the account store
#[async_trait]
pub trait AccountWriter: Send + Sync {
    /// Insert a new account; `AlreadyExists` if the id is taken
    async fn create(&self, ctx: &RequestContext, account: &Account) -> Result<(), LedgerError>;

    /// Overwrite the stored snapshot (upsert)
    async fn save(&self, ctx: &RequestContext, account: &Account) -> Result<(), LedgerError>;
}

/// Thread-safe in-memory account store
///
/// `RwLock` over a `HashMap`: lookups run concurrently, each write holds the
/// lock for a single map operation.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.accounts.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_snapshot(&self, id: &AccountId) -> Result<Account, LedgerError> {
        // A poisoned lock still holds a consistent map: every write is a
        // single insert that cannot panic halfway.
        let accounts = self.accounts.read().unwrap_or_else(|e| e.into_inner());
        accounts
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl AccountReader for InMemoryAccountStore {
    async fn by_id(&self, _ctx: &RequestContext, id: &AccountId) -> Result<Account, LedgerError> {
        self.read_snapshot(id)
    }
}

#[async_trait]
impl AccountWriter for InMemoryAccountStore {
    async fn create(&self, _ctx: &RequestContext, account: &Account) -> Result<(), LedgerError> {
        let mut accounts = self.accounts.write().unwrap_or_else(|e| e.into_inner());
        if accounts.contains_key(account.id()) {
            return Err(LedgerError::AlreadyExists(account.id().to_string()));
        }
        accounts.insert(account.id().clone(), account.clone());
        Ok(())
    }

    async fn save(&self, _ctx: &RequestContext, account: &Account) -> Result<(), LedgerError> {
        let mut accounts = self.accounts.write().unwrap_or_else(|e| e.into_inner());
        accounts.insert(account.id().clone(), account.clone());
        Ok(())
    }
}
