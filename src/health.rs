use serde_json::Value;

use crate::errors::FetchError;
use crate::transport::Transport;

const PING_PATH: &str = "/api/health/ping";
const CHECK_PATH: &str = "/api/health/check";
const SCHEDULER_STATUS_PATH: &str = "/api/health/scheduler/status";

// Plain pass-throughs: failures propagate, there is no fallback here.
#[derive(Debug, Clone)]
pub struct HealthClient {
    transport: Transport,
}

impl HealthClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn ping(&self) -> Result<Value, FetchError> {
        self.transport.get(PING_PATH, &[]).await
    }

    pub async fn check(&self) -> Result<Value, FetchError> {
        self.transport.get(CHECK_PATH, &[]).await
    }

    pub async fn scheduler_status(&self) -> Result<Value, FetchError> {
        self.transport.get(SCHEDULER_STATUS_PATH, &[]).await
    }
}
