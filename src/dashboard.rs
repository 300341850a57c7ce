use tracing::warn;

use crate::errors::FetchError;
use crate::mock::{mock_overview, mock_trend, DEFAULT_TREND_DAYS};
use crate::models::{OverviewResult, TrendResult};
use crate::transport::Transport;

const TREND_PATH: &str = "/api/dashboard/warning-trend";
const OVERVIEW_PATH: &str = "/api/dashboard/overview";

#[derive(Debug, Clone)]
pub struct DashboardClient {
    transport: Transport,
}

impl DashboardClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Never fails: any transport or shape failure is absorbed and a
    /// synthesized series of the requested window is returned instead.
    pub async fn fetch_trend(&self, days: Option<u32>) -> TrendResult {
        let days = days.unwrap_or(DEFAULT_TREND_DAYS).max(1);
        match self.trend_live(days).await {
            Ok(result) => result,
            Err(err) => {
                warn!("warning trend request failed, serving mock data: {err}");
                mock_trend(days)
            }
        }
    }

    pub async fn fetch_overview(&self) -> OverviewResult {
        match self.overview_live().await {
            Ok(result) => result,
            Err(err) => {
                warn!("overview request failed, serving mock overview: {err}");
                mock_overview()
            }
        }
    }

    async fn trend_live(&self, days: u32) -> Result<TrendResult, FetchError> {
        self.transport
            .get(TREND_PATH, &[("days", days.to_string())])
            .await
    }

    async fn overview_live(&self) -> Result<OverviewResult, FetchError> {
        self.transport.get(OVERVIEW_PATH, &[]).await
    }
}
