//! Casefile Report Layer
//!
//! Composes the analysis views into a structured [`Report`] and renders
//! it to the canonical plain-text export format. Reports are derived and
//! ephemeral: built on demand, never stored, and deterministic given a
//! store and a clock.

mod builder;
mod text;

pub use builder::ReportBuilder;
pub use text::{export, export_filename, to_text};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::analysis::trends::{Prediction, TrendSummary};
use crate::analysis::HotspotEntry;
use crate::index::DayPeriod;
use crate::store::CrimeRecord;

/// Which derived analyses populate the report body
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportType {
    Summary,
    Trends,
    Hotspots,
    Detailed,
}

impl ReportType {
    /// Human-readable report title
    pub fn title(&self) -> &'static str {
        match self {
            ReportType::Summary => "Crime Summary Report",
            ReportType::Trends => "Crime Trend Analysis Report",
            ReportType::Hotspots => "Crime Hotspot Analysis Report",
            ReportType::Detailed => "Detailed Crime Log Report",
        }
    }
}

/// Rolling time window ending at the builder's clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Last 7 days
    Week,
    /// Last calendar month
    Month,
    /// Last 3 calendar months
    Quarter,
    /// Last 12 calendar months
    Year,
    /// No time filtering
    All,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
            Period::All => "all",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Headline counts common to every report type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total_crimes: u64,
    pub crime_types: usize,
    pub locations: usize,
    /// `"<start> to <end>"`, or `"No data"` when no records are in scope
    pub date_range: String,
}

/// One name with its count and share of the total, as a percentage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareEntry {
    pub name: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryAnalysis {
    pub crime_types: Vec<ShareEntry>,
    pub locations: Vec<ShareEntry>,
    pub time_patterns: Vec<(DayPeriod, u64)>,
    pub clusters: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendAnalysis {
    pub daily: Vec<(NaiveDate, u64)>,
    pub weekdays: Vec<(&'static str, u64)>,
    pub monthly: Vec<(String, u64)>,
    pub summary: TrendSummary,
    pub prediction: Prediction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotAnalysis {
    pub hotspots: Vec<HotspotEntry>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedAnalysis {
    /// Records in scope, in store order
    pub records: Vec<CrimeRecord>,
    /// Grouped by crime type, groups in first-seen order
    pub by_type: Vec<(String, Vec<CrimeRecord>)>,
    /// Grouped by location, groups in first-seen order
    pub by_location: Vec<(String, Vec<CrimeRecord>)>,
    /// Newest first, by date then time
    pub chronological: Vec<CrimeRecord>,
}

/// Report body, tagged by report type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Analysis {
    Summary(SummaryAnalysis),
    Trends(TrendAnalysis),
    Hotspots(HotspotAnalysis),
    Detailed(DetailedAnalysis),
}

/// A fully built report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: &'static str,
    pub generated_at: DateTime<Utc>,
    pub period: Period,
    pub summary: ReportSummary,
    pub analysis: Analysis,
}
