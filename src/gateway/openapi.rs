//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    AccountData, DepositBody, DepositData, OpenAccountBody, TransferBody, TransferData,
};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hexledger API",
        version = "1.0.0",
        description = "In-memory ledger: open accounts, deposit, transfer through a simulated payment rail."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::account::open_account,
        crate::gateway::handlers::account::get_account,
        crate::gateway::handlers::account::deposit,
        crate::gateway::handlers::transfer::create_transfer,
    ),
    components(
        schemas(
            HealthResponse,
            OpenAccountBody,
            DepositBody,
            TransferBody,
            AccountData,
            DepositData,
            TransferData,
        )
    ),
    tags(
        (name = "Account", description = "Open accounts, deposits and lookups"),
        (name = "Transfer", description = "Transfers between accounts"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
