use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub message: String,
    pub data: T,
}

pub type TrendResult = Envelope<TrendSeries>;
pub type OverviewResult = Envelope<OverviewSnapshot>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub dates: Vec<String>,
    pub counts: Vec<u32>,
    pub total: u32,
    pub start_date: String,
    pub end_date: String,
    pub query_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSnapshot {
    pub risk_stats: RiskStats,
    pub today_alerts: u32,
    pub type_distribution: Vec<TypeCount>,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskStats {
    pub high_risk: u32,
    pub medium_risk: u32,
    pub low_risk: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub memory: MemoryMetrics,
    pub os: OsMetrics,
    pub threads: ThreadMetrics,
    pub jvm: JvmMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryMetrics {
    pub heap_used: String,
    pub non_heap_used: String,
    pub heap_max: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsMetrics {
    pub available_processors: u32,
    pub name: String,
    pub arch: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadMetrics {
    pub daemon_threads: u32,
    pub total_threads: u32,
    pub peak_threads: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JvmMetrics {
    pub name: String,
    pub vendor: String,
    pub version: String,
}
