//! Cluster detection
//!
//! Sliding-window scan over per-date counts that flags calendar windows
//! with above-baseline incident density. The window slides over the
//! distinct dates that actually have incidents - gaps of quiet days are
//! skipped over, not zero-filled - and the baseline is total incidents
//! divided by the number of active dates. O(d·w) for d distinct dates and
//! window size w.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::CrimeRecord;

/// Default sliding-window span, in active dates
pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// Categorical activity level derived from the window/baseline ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Risk from the ratio of observed to baseline activity
    pub fn from_ratio(ratio: f64) -> RiskLevel {
        if ratio >= 2.0 {
            RiskLevel::Critical
        } else if ratio >= 1.5 {
            RiskLevel::High
        } else if ratio >= 1.2 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Critical => write!(f, "Critical"),
        }
    }
}

/// A contiguous run of active dates with above-baseline density
///
/// Ephemeral: recomputed on every detection call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_crimes: u64,
    pub avg_daily_crimes: f64,
    pub risk_level: RiskLevel,
}

/// Detect high-activity windows over a record set.
///
/// Windows qualify iff their average strictly exceeds the baseline, so a
/// uniform dataset produces no clusters. Output is sorted by total crimes
/// descending; ties keep window-start order. Returns an empty list when
/// there are fewer distinct dates than `window_size`.
pub fn detect(records: &[CrimeRecord], window_size: usize) -> Vec<Cluster> {
    if window_size == 0 {
        return Vec::new();
    }

    // Per-date counts; BTreeMap keeps the dates sorted ascending
    let mut date_counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        *date_counts.entry(record.date).or_insert(0) += 1;
    }

    if date_counts.is_empty() || date_counts.len() < window_size {
        return Vec::new();
    }

    let total: u64 = date_counts.values().sum();
    let baseline = total as f64 / date_counts.len() as f64;
    if baseline <= 0.0 {
        return Vec::new();
    }

    tracing::debug!(
        window_size,
        active_dates = date_counts.len(),
        baseline,
        "scanning for clusters"
    );

    let dates: Vec<(NaiveDate, u64)> = date_counts.into_iter().collect();
    let mut clusters = Vec::new();

    for window in dates.windows(window_size) {
        let window_total: u64 = window.iter().map(|&(_, count)| count).sum();
        let window_avg = window_total as f64 / window_size as f64;

        // Strictly above baseline; an exactly-average window is not a cluster
        if window_avg > baseline {
            clusters.push(Cluster {
                start_date: window[0].0,
                end_date: window[window_size - 1].0,
                total_crimes: window_total,
                avg_daily_crimes: window_avg,
                risk_level: RiskLevel::from_ratio(window_avg / baseline),
            });
        }
    }

    // Stable: ties keep window-start order
    clusters.sort_by(|a, b| b.total_crimes.cmp(&a.total_crimes));

    tracing::debug!(found = clusters.len(), "cluster scan complete");
    clusters
}
