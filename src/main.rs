use std::env;

use dashboard_client::{ClientConfig, DashboardClient, Transport};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let days = env::args().nth(1).and_then(|value| value.parse::<u32>().ok());

    let config = ClientConfig::from_env();
    info!("fetching dashboard data from {}", config.base_url);

    let transport = Transport::new(&config)?;
    let dashboard = DashboardClient::new(transport);

    let trend = dashboard.fetch_trend(days).await;
    println!("{}", serde_json::to_string_pretty(&trend)?);

    let overview = dashboard.fetch_overview().await;
    println!("{}", serde_json::to_string_pretty(&overview)?);

    Ok(())
}
