//! Synthetic chart series for the top trends.
//!
//! The backend has no historical time series, so the chart reconstructs a
//! plausible-looking ramp from each trend's current interest: 12 points,
//! 5 minutes apart, rising from 60% to 100% of the current value with a
//! small sine wobble. This is a visualization aid, not measured history.
use chrono::{Duration, NaiveDateTime, Timelike};

use crate::models::DisplayTrend;

/// Points per line.
pub const CHART_POINTS: usize = 12;

/// Minutes between points.
pub const CHART_STEP_MINUTES: i64 = 5;

/// How many trends get a line.
pub const CHART_MAX_LINES: usize = 5;

#[derive(Debug, Clone)]
pub struct ChartLine {
    pub keyword: String,
    pub values: Vec<u64>,
}

/// Column-form series: one label per point, one value vector per trend.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    /// "HH:MM" labels, oldest first, ending at `now` floored to a
    /// 5-minute boundary.
    pub labels: Vec<String>,
    pub lines: Vec<ChartLine>,
}

impl ChartSeries {
    pub fn max_value(&self) -> u64 {
        self.lines
            .iter()
            .flat_map(|line| line.values.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Build the synthetic series for at most the first five trends.
///
/// Pure given `now` (tests pass a fixed timestamp, production passes
/// `Local::now().naive_local()`). Returns `None` for an empty trend list
/// so the caller renders an explicit no-data state instead of an empty
/// chart.
pub fn build_series(trends: &[DisplayTrend], now: NaiveDateTime) -> Option<ChartSeries> {
    if trends.is_empty() {
        return None;
    }

    let base_time = now
        .with_minute(now.minute() - now.minute() % 5)?
        .with_second(0)?
        .with_nanosecond(0)?;

    let labels: Vec<String> = (0..CHART_POINTS)
        .map(|i| {
            let offset = CHART_STEP_MINUTES * (CHART_POINTS - 1 - i) as i64;
            (base_time - Duration::minutes(offset))
                .format("%H:%M")
                .to_string()
        })
        .collect();

    let lines = trends
        .iter()
        .take(CHART_MAX_LINES)
        .map(|trend| ChartLine {
            keyword: trend.keyword.clone(),
            values: (0..CHART_POINTS).map(|idx| point_value(trend.interest_score, idx)).collect(),
        })
        .collect();

    Some(ChartSeries { labels, lines })
}

fn point_value(current_interest: u64, idx: usize) -> u64 {
    let progress = idx as f64 / (CHART_POINTS - 1) as f64;
    // Ramp from 60% to 100% of the current value across the window
    let multiplier = 0.6 + 0.4 * progress;
    let variation = 1.0 + 0.1 * (0.8 * idx as f64).sin();
    (current_interest as f64 * multiplier * variation).floor() as u64
}
