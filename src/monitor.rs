use crate::errors::FetchError;
use crate::models::PerformanceMetrics;
use crate::transport::Transport;

const PERFORMANCE_PATH: &str = "/api/monitor/performance";

#[derive(Debug, Clone)]
pub struct MonitorClient {
    transport: Transport,
}

impl MonitorClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn performance(&self) -> Result<PerformanceMetrics, FetchError> {
        self.transport.get(PERFORMANCE_PATH, &[]).await
    }
}
