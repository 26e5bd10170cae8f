//! Casefile Analysis Layer
//!
//! Everything derived from the raw records: frequency rankings, hotspot
//! grading, time-of-day patterns, temporal clusters and trend
//! projections. All results are computed on demand from the store's
//! current contents and never cached across reloads.
//!
//! [`CrimeAnalyzer`] is the facade the CLI and report builder go through;
//! the per-concern functions underneath it are public for callers that
//! need just one view.

mod clusters;
mod hotspots;
pub mod trends;

pub use clusters::{detect, Cluster, RiskLevel, DEFAULT_WINDOW_DAYS};
pub use hotspots::{assess, location_risk, recommendations, HotspotEntry};

use serde::Serialize;

use crate::index::{by_hour, by_location, by_type, bucketize, top_n, FrequencyIndex, RankedEntry, TimePatterns};
use crate::store::RecordStore;

/// Dashboard-level summary of a record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub total_crimes: u64,
    pub distinct_types: usize,
    pub distinct_locations: usize,
    /// `"N/A"` when the store is empty
    pub most_common_type: String,
    /// `"N/A"` when the store is empty
    pub top_hotspot: String,
    /// Clusters graded High or Critical
    pub active_clusters: usize,
}

/// Facade over the analysis layer, holding the per-dimension indexes
/// built once from a store borrow.
///
/// The analyzer borrows the store, so it cannot outlive a reload; build a
/// fresh one after `RecordStore::load`.
pub struct CrimeAnalyzer<'a> {
    store: &'a RecordStore,
    type_index: FrequencyIndex<String>,
    location_index: FrequencyIndex<String>,
    hour_index: FrequencyIndex<u32>,
}

impl<'a> CrimeAnalyzer<'a> {
    /// Build all three indexes in one pass each over the store.
    pub fn new(store: &'a RecordStore) -> Self {
        let records = store.all();
        Self {
            store,
            type_index: by_type(records),
            location_index: by_location(records),
            hour_index: by_hour(records),
        }
    }

    /// Crime types ranked by frequency, top `n`
    pub fn frequent_types(&self, n: usize) -> Vec<RankedEntry<String>> {
        top_n(&self.type_index, n)
    }

    /// All locations graded as hotspots, ranked by count
    pub fn hotspots(&self) -> Vec<HotspotEntry> {
        assess(self.store.all())
    }

    /// Hourly counts and day-period aggregation
    pub fn time_patterns(&self) -> TimePatterns {
        bucketize(&self.hour_index)
    }

    /// High-activity windows of `window_size` active dates
    pub fn detect_clusters(&self, window_size: usize) -> Vec<Cluster> {
        detect(self.store.all(), window_size)
    }

    /// Trend summary over the daily series
    pub fn trend_summary(&self) -> trends::TrendSummary {
        trends::summarize(self.store.all())
    }

    /// Naive next-week projection
    pub fn predict_next_week(&self) -> trends::Prediction {
        trends::predict_next_week(self.store.all())
    }

    /// Dashboard summary. Empty stores produce zero counts and `"N/A"`
    /// placeholders rather than errors.
    pub fn overview(&self) -> Overview {
        let frequent = self.frequent_types(1);
        let hotspots = self.hotspots();
        let clusters = self.detect_clusters(DEFAULT_WINDOW_DAYS);

        Overview {
            total_crimes: self.store.len() as u64,
            distinct_types: self.type_index.len(),
            distinct_locations: self.location_index.len(),
            most_common_type: frequent
                .first()
                .map(|e| e.key.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            top_hotspot: hotspots
                .first()
                .map(|e| e.location.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            active_clusters: clusters
                .iter()
                .filter(|c| matches!(c.risk_level, RiskLevel::High | RiskLevel::Critical))
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CrimeRecord, RecordStore};

    fn sample_store() -> RecordStore {
        let records = vec![
            CrimeRecord::parse(1, "2024-01-01", "02:30", "Theft", "Downtown", "").unwrap(),
            CrimeRecord::parse(2, "2024-01-01", "14:00", "Theft", "Downtown", "").unwrap(),
            CrimeRecord::parse(3, "2024-01-02", "19:45", "Burglary", "Suburbs", "").unwrap(),
            CrimeRecord::parse(4, "2024-01-03", "20:10", "Theft", "Downtown", "").unwrap(),
        ];
        RecordStore::from_records(records).unwrap()
    }

    #[test]
    fn test_overview_populated() {
        let store = sample_store();
        let analyzer = CrimeAnalyzer::new(&store);
        let overview = analyzer.overview();

        assert_eq!(overview.total_crimes, 4);
        assert_eq!(overview.distinct_types, 2);
        assert_eq!(overview.distinct_locations, 2);
        assert_eq!(overview.most_common_type, "Theft");
        assert_eq!(overview.top_hotspot, "Downtown");
    }

    #[test]
    fn test_overview_empty_store_uses_placeholders() {
        let store = RecordStore::new();
        let analyzer = CrimeAnalyzer::new(&store);
        let overview = analyzer.overview();

        assert_eq!(overview.total_crimes, 0);
        assert_eq!(overview.most_common_type, "N/A");
        assert_eq!(overview.top_hotspot, "N/A");
        assert_eq!(overview.active_clusters, 0);
    }

    #[test]
    fn test_facade_views_agree_on_totals() {
        let store = sample_store();
        let analyzer = CrimeAnalyzer::new(&store);

        let ranked_total: u64 = analyzer.frequent_types(10).iter().map(|e| e.count).sum();
        let hotspot_total: u64 = analyzer.hotspots().iter().map(|e| e.count).sum();
        let period_total: u64 = analyzer.time_patterns().periods.iter().map(|&(_, c)| c).sum();

        assert_eq!(ranked_total, 4);
        assert_eq!(hotspot_total, 4);
        assert_eq!(period_total, 4);
    }
}
