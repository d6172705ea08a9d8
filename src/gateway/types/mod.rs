//! Gateway types module
//!
//! ## Submodules
//! - [`ledger`]: request bodies and response data for the ledger routes
//! - [`response`]: response envelope, `ApiError` and error codes

pub mod ledger;
pub mod response;

// Re-export commonly used types at module root
pub use ledger::{
    AccountData, DepositBody, DepositData, OpenAccountBody, TransferBody, TransferData,
};
pub use response::{ApiError, ApiResponse, ApiResult, accepted, created, error_codes, ok};
