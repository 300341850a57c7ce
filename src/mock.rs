use chrono::Utc;
use rand::Rng;

use crate::dates::{month_day_label, ymd_string, DAY_MS};
use crate::models::{
    Envelope, OverviewResult, OverviewSnapshot, RiskStats, TrendResult, TrendSeries, TypeCount,
};

pub const DEFAULT_TREND_DAYS: u32 = 30;

pub fn mock_trend(days: u32) -> TrendResult {
    mock_trend_at(days, Utc::now().timestamp_millis(), &mut rand::thread_rng())
}

pub fn mock_trend_at<R: Rng>(days: u32, now_ms: i64, rng: &mut R) -> TrendResult {
    let mut dates = Vec::with_capacity(days as usize);
    let mut counts = Vec::with_capacity(days as usize);
    let mut total = 0u32;

    for offset in (0..days).rev() {
        let timestamp = now_ms - i64::from(offset) * DAY_MS;
        dates.push(month_day_label(timestamp));

        let count = 50 + rng.gen_range(0..30);
        counts.push(count);
        total += count;
    }

    let start_ms = now_ms - i64::from(days.saturating_sub(1)) * DAY_MS;

    Envelope {
        code: 200,
        message: "success (mock data)".to_string(),
        data: TrendSeries {
            dates,
            counts,
            total,
            start_date: ymd_string(start_ms),
            end_date: ymd_string(now_ms),
            query_days: days,
        },
    }
}

pub fn mock_overview() -> OverviewResult {
    Envelope {
        code: 200,
        message: "success (mock overview)".to_string(),
        data: OverviewSnapshot {
            risk_stats: RiskStats {
                high_risk: 12,
                medium_risk: 45,
                low_risk: 128,
            },
            today_alerts: 23,
            type_distribution: vec![
                type_count("HOMEWORK", 156),
                type_count("VIDEO", 89),
                type_count("EXAM", 67),
                type_count("ATTENDANCE", 42),
                type_count("BEHAVIOR", 35),
            ],
            timestamp: Utc::now().timestamp_millis(),
        },
    }
}

fn type_count(name: &str, value: u32) -> TypeCount {
    TypeCount {
        name: name.to_string(),
        value,
    }
}
