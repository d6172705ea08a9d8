use std::sync::Arc;
use std::time::Duration;

use crate::account::AccountService;
use crate::context::RequestContext;
use crate::transfer::TransferWorkflow;

/// Gateway application state (shared)
#[derive(Clone)]
pub struct AppState {
    /// Account open / deposit / lookup
    pub accounts: Arc<AccountService>,
    /// Transfer orchestration
    pub transfers: Arc<TransferWorkflow>,
    /// Per-request deadline (`None` = no deadline)
    pub request_timeout: Option<Duration>,
}

impl AppState {
    pub fn new(
        accounts: Arc<AccountService>,
        transfers: Arc<TransferWorkflow>,
        request_timeout: Option<Duration>,
    ) -> Self {
        Self {
            accounts,
            transfers,
            request_timeout,
        }
    }

    /// Fresh context for one request
    pub fn request_context(&self) -> RequestContext {
        match self.request_timeout {
            Some(timeout) => RequestContext::with_timeout(timeout),
            None => RequestContext::background(),
        }
    }
}
