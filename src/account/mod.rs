//! Account management module
//!
//! - [`models`]: `Account` entity and `AccountId`
//! - [`validation`]: `AccountNumber` value object
//! - [`repository`]: reader/writer ports and the in-memory store
//! - [`service`]: open / deposit / lookup use cases

pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use models::{Account, AccountId};
pub use repository::{AccountReader, AccountWriter, InMemoryAccountStore};
pub use service::{AccountService, DepositReceipt, OpenedAccount};
pub use validation::AccountNumber;
