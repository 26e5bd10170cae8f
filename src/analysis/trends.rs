//! Trend analysis
//!
//! Daily, weekday and monthly count series over a record set, a
//! first-versus-last direction estimate, and a naive next-week projection
//! from the tail of the dataset.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::store::CrimeRecord;

/// Direction of the daily series, judged by comparing the last active
/// date's count against the first's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDirection::Increasing => write!(f, "increasing"),
            TrendDirection::Decreasing => write!(f, "decreasing"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

/// How much weight to put on a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Low => write!(f, "Low"),
            Confidence::Medium => write!(f, "Medium"),
        }
    }
}

/// Headline numbers for the daily series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub average_per_day: f64,
    /// Date with the most incidents; earliest wins ties
    pub peak_day: Option<(NaiveDate, u64)>,
    pub direction: TrendDirection,
}

/// Next-week projection from the tail of the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub next_week: u64,
    pub confidence: Confidence,
    pub recommendation: &'static str,
}

/// Incidents per active date, sorted by date ascending. Dates with no
/// incidents are absent, not zero-filled.
pub fn daily_counts(records: &[CrimeRecord]) -> Vec<(NaiveDate, u64)> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.date).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Incidents per weekday, Sunday through Saturday, zero-filled
pub fn weekday_counts(records: &[CrimeRecord]) -> Vec<(&'static str, u64)> {
    const WEEK: [(Weekday, &str); 7] = [
        (Weekday::Sun, "Sunday"),
        (Weekday::Mon, "Monday"),
        (Weekday::Tue, "Tuesday"),
        (Weekday::Wed, "Wednesday"),
        (Weekday::Thu, "Thursday"),
        (Weekday::Fri, "Friday"),
        (Weekday::Sat, "Saturday"),
    ];

    WEEK.iter()
        .map(|&(weekday, name)| {
            let count = records.iter().filter(|r| r.date.weekday() == weekday).count();
            (name, count as u64)
        })
        .collect()
}

/// Incidents per calendar month (`YYYY-MM`), sorted ascending
pub fn monthly_counts(records: &[CrimeRecord]) -> Vec<(String, u64)> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.date.format("%Y-%m").to_string()).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Summarize the daily series: average, peak day, direction.
pub fn summarize(records: &[CrimeRecord]) -> TrendSummary {
    let daily = daily_counts(records);

    let average_per_day = if daily.is_empty() {
        0.0
    } else {
        records.len() as f64 / daily.len() as f64
    };

    // Strict comparison keeps the earliest peak on ties
    let peak_day = daily
        .iter()
        .copied()
        .reduce(|max, current| if current.1 > max.1 { current } else { max });

    let direction = if daily.len() <= 1 {
        TrendDirection::Stable
    } else if daily[daily.len() - 1].1 > daily[0].1 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    };

    TrendSummary {
        average_per_day,
        peak_day,
        direction,
    }
}

/// Project next week's volume from the last up-to-7 records.
///
/// Confidence is Medium once at least 3 records back the projection.
pub fn predict_next_week(records: &[CrimeRecord]) -> Prediction {
    let recent = &records[records.len().saturating_sub(7)..];
    let avg_recent = recent.len() as f64 / 7.0;

    Prediction {
        next_week: (avg_recent * 7.0).round() as u64,
        confidence: if recent.len() >= 3 {
            Confidence::Medium
        } else {
            Confidence::Low
        },
        recommendation: if avg_recent > 2.0 {
            "Increase patrol presence"
        } else {
            "Maintain current security level"
        },
    }
}
