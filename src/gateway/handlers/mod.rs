//! HTTP handlers

pub mod account;
pub mod health;
pub mod transfer;

pub use account::{deposit, get_account, open_account};
pub use health::{HealthResponse, health_check};
pub use transfer::create_transfer;
