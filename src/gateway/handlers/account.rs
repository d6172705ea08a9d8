//! Account handlers (open, lookup, deposit)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use super::super::state::AppState;
use super::super::types::{
    AccountData, ApiResult, DepositBody, DepositData, OpenAccountBody, created, ok,
};
use crate::account::AccountId;

/// Open a new account
///
/// POST /accounts
#[utoipa::path(
    post,
    path = "/accounts",
    request_body = OpenAccountBody,
    responses(
        (status = 201, description = "Account opened", body = AccountData, content_type = "application/json"),
        (status = 400, description = "Malformed request body"),
        (status = 422, description = "Invalid account number or empty holder name")
    ),
    tag = "Account"
)]
pub async fn open_account(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OpenAccountBody>, JsonRejection>,
) -> ApiResult<AccountData> {
    let Json(body) = payload?;
    let ctx = state.request_context();

    let opened = state
        .accounts
        .open_account(&ctx, &body.holder_name, &body.account_number)
        .await?;
    created(opened.into())
}

/// Get an account snapshot
///
/// GET /accounts/{id}
#[utoipa::path(
    get,
    path = "/accounts/{id}",
    params(
        ("id" = String, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account snapshot", body = AccountData, content_type = "application/json"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<AccountData> {
    let ctx = state.request_context();
    let account = state
        .accounts
        .get_account(&ctx, &AccountId::from(id))
        .await?;
    ok(AccountData::from(&account))
}

/// Deposit into an account
///
/// POST /accounts/{id}/deposit
#[utoipa::path(
    post,
    path = "/accounts/{id}/deposit",
    params(
        ("id" = String, Path, description = "Account ID")
    ),
    request_body = DepositBody,
    responses(
        (status = 200, description = "New balance", body = DepositData, content_type = "application/json"),
        (status = 400, description = "Malformed body or amount <= 0"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<DepositBody>, JsonRejection>,
) -> ApiResult<DepositData> {
    let Json(body) = payload?;
    let ctx = state.request_context();

    let receipt = state
        .accounts
        .deposit(&ctx, &AccountId::from(id), body.amount)
        .await?;
    ok(receipt.into())
}
