//! API Response types and error codes
//!
//! - `ApiResponse<T>`: Unified response wrapper
//! - `ApiError`: error response carrying its HTTP status
//! - `error_codes`: Standard error code constants

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::error::LedgerError;
use crate::transfer::ApprovalStatus;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or absent (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Handler result: status + envelope, or an [`ApiError`]
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// 200 OK with data
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// 201 Created with data
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

/// 202 Accepted with data
pub fn accepted<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::ACCEPTED, Json(ApiResponse::success(data))))
}

// ============================================================================
// Error Response
// ============================================================================

/// Error response: HTTP status + API error code + message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    /// Convert into an `Err` of any handler result
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        let code = match &err {
            LedgerError::InvalidAmount => error_codes::INVALID_AMOUNT,
            LedgerError::InsufficientFunds => error_codes::INSUFFICIENT_BALANCE,
            LedgerError::InvalidAccountNumber => error_codes::INVALID_ACCOUNT_NUMBER,
            LedgerError::EmptyHolder => error_codes::EMPTY_HOLDER,
            LedgerError::Overflow => error_codes::BALANCE_OVERFLOW,
            LedgerError::SameAccount => error_codes::SAME_ACCOUNT,
            LedgerError::NotFound(_) => error_codes::ACCOUNT_NOT_FOUND,
            LedgerError::AlreadyExists(_) => error_codes::ACCOUNT_EXISTS,
            LedgerError::Transient {
                status: ApprovalStatus::Cancelled,
                ..
            } => error_codes::PAYMENT_CANCELLED,
            LedgerError::Transient { .. } => error_codes::PAYMENT_FAILED,
        };
        let status = StatusCode::from_u16(err.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %err, kind = err.code(), "Request failed");
        }

        Self::new(status, code, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            rejection.status(),
            error_codes::INVALID_PARAMETER,
            rejection.body_text(),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::error(self.code, self.msg))).into_response()
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INSUFFICIENT_BALANCE: i32 = 1002;
    pub const INVALID_AMOUNT: i32 = 1003;
    pub const INVALID_ACCOUNT_NUMBER: i32 = 1004;
    pub const EMPTY_HOLDER: i32 = 1005;
    pub const BALANCE_OVERFLOW: i32 = 1006;
    pub const SAME_ACCOUNT: i32 = 1007;

    // Resource errors (4xxx)
    pub const ACCOUNT_NOT_FOUND: i32 = 4001;
    pub const ACCOUNT_EXISTS: i32 = 4002;

    // Server errors (5xxx)
    pub const PAYMENT_FAILED: i32 = 5002;
    pub const PAYMENT_CANCELLED: i32 = 5003;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["msg"], "ok");
        assert_eq!(json["data"], 42);
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::<()>::error(1001, "bad")).unwrap();
        assert_eq!(json["code"], 1001);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_ledger_error_mapping() {
        let err = ApiError::from(LedgerError::InvalidAmount);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, error_codes::INVALID_AMOUNT);

        let err = ApiError::from(LedgerError::InsufficientFunds);
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code, error_codes::INSUFFICIENT_BALANCE);

        let err = ApiError::from(LedgerError::NotFound("x".into()));
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = ApiError::from(LedgerError::transient(ApprovalStatus::Failed, "outage"));
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.code, error_codes::PAYMENT_FAILED);

        let err = ApiError::from(LedgerError::transient(ApprovalStatus::Cancelled, "deadline"));
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code, error_codes::PAYMENT_CANCELLED);
    }
}
