//! Time-of-day bucketing
//!
//! Aggregates the hourly frequency index into the four fixed 6-hour day
//! periods used throughout the dashboard and reports. Period boundaries
//! are fixed, not configurable.

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyIndex;

/// One of the four fixed 6-hour day periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    /// 00:00-06:00
    Night,
    /// 06:00-12:00
    Morning,
    /// 12:00-18:00
    Afternoon,
    /// 18:00-24:00
    Evening,
}

impl DayPeriod {
    /// All periods in canonical day order
    pub fn all() -> &'static [DayPeriod] {
        &[
            DayPeriod::Night,
            DayPeriod::Morning,
            DayPeriod::Afternoon,
            DayPeriod::Evening,
        ]
    }

    /// The period containing an hour of day (0-23)
    pub fn from_hour(hour: u32) -> DayPeriod {
        match hour {
            0..=5 => DayPeriod::Night,
            6..=11 => DayPeriod::Morning,
            12..=17 => DayPeriod::Afternoon,
            _ => DayPeriod::Evening,
        }
    }

    /// Display label, including the hour range
    pub fn label(&self) -> &'static str {
        match self {
            DayPeriod::Night => "Night (00-06)",
            DayPeriod::Morning => "Morning (06-12)",
            DayPeriod::Afternoon => "Afternoon (12-18)",
            DayPeriod::Evening => "Evening (18-24)",
        }
    }
}

impl std::fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Hourly counts plus their day-period aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimePatterns {
    /// (hour, count) sorted by hour ascending, for charting
    pub hourly: Vec<(u32, u64)>,
    /// (period, count) sorted by count descending; canonical day order
    /// breaks ties
    pub periods: Vec<(DayPeriod, u64)>,
}

/// Sum the hourly index into the four day periods.
pub fn bucketize(hourly_index: &FrequencyIndex<u32>) -> TimePatterns {
    let mut hourly: Vec<(u32, u64)> = hourly_index.entries().map(|(h, c)| (*h, c)).collect();
    hourly.sort_by_key(|&(hour, _)| hour);

    let mut periods: Vec<(DayPeriod, u64)> = DayPeriod::all()
        .iter()
        .map(|&period| {
            let count = hourly
                .iter()
                .filter(|&&(hour, _)| DayPeriod::from_hour(hour) == period)
                .map(|&(_, count)| count)
                .sum();
            (period, count)
        })
        .collect();
    // Stable over canonical day order
    periods.sort_by(|a, b| b.1.cmp(&a.1));

    TimePatterns { hourly, periods }
}
