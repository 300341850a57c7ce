pub mod config;
pub mod dashboard;
pub mod dates;
pub mod errors;
pub mod health;
pub mod mock;
pub mod models;
pub mod monitor;
pub mod transport;

pub use config::ClientConfig;
pub use dashboard::DashboardClient;
pub use errors::FetchError;
pub use health::HealthClient;
pub use mock::DEFAULT_TREND_DAYS;
pub use monitor::MonitorClient;
pub use transport::Transport;
