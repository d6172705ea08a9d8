//! Transfer handler

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, TransferBody, TransferData, accepted};
use crate::transfer::TransferRequest;

/// Transfer between two accounts
///
/// POST /transfers
///
/// Account ids are trimmed before lookup. Balances move only after the
/// payment rail approves.
#[utoipa::path(
    post,
    path = "/transfers",
    request_body = TransferBody,
    responses(
        (status = 202, description = "Transfer committed", body = TransferData, content_type = "application/json"),
        (status = 400, description = "Malformed body, amount <= 0 or same account"),
        (status = 404, description = "Account not found"),
        (status = 422, description = "Insufficient funds"),
        (status = 502, description = "Payment rail failed after retries"),
        (status = 503, description = "Request cancelled while waiting to retry")
    ),
    tag = "Transfer"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TransferBody>, JsonRejection>,
) -> ApiResult<TransferData> {
    let Json(body) = payload?;

    let from_id = body.from_id.trim();
    let to_id = body.to_id.trim();
    if from_id.is_empty() || to_id.is_empty() {
        return ApiError::bad_request("from_id and to_id are required").into_err();
    }

    let ctx = state.request_context();
    let outcome = state
        .transfers
        .execute(&ctx, TransferRequest::new(from_id, to_id, body.amount))
        .await?;
    accepted(outcome.into())
}
