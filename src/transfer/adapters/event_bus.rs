//! In-process event bus
//!
//! Writes each event to the log as a structured record. There is no broker
//! behind it; publishing only fails if the payload cannot be serialized.

use async_trait::async_trait;
use tracing::info;

use super::EventPublisher;
use crate::context::RequestContext;

/// Event publisher that logs `topic` + JSON payload
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalEventBus;

impl LocalEventBus {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for LocalEventBus {
    async fn publish(
        &self,
        _ctx: &RequestContext,
        topic: &str,
        payload: serde_json::Value,
    ) -> anyhow::Result<()> {
        let body = serde_json::to_string(&payload)?;
        info!(topic, payload = %body, "Event published");
        Ok(())
    }
}
