//! Report assembly
//!
//! Filters the store to the requested period, runs the analysis layer
//! over the filtered records and packs the results into a [`Report`].
//! All wall-clock reads go through the injected clock, so a fixed clock
//! makes report output fully deterministic.

use chrono::{Duration, Months, NaiveDate};

use super::{
    Analysis, DetailedAnalysis, HotspotAnalysis, Period, Report, ReportSummary, ReportType,
    ShareEntry, SummaryAnalysis, TrendAnalysis,
};
use crate::analysis::{self, trends, DEFAULT_WINDOW_DAYS};
use crate::clock::Clock;
use crate::index::{bucketize, by_hour, by_location, by_type, top_n, FrequencyIndex};
use crate::store::{CrimeRecord, RecordStore};

/// Builds reports from a store borrow and an injected time source
pub struct ReportBuilder<'a> {
    store: &'a RecordStore,
    clock: &'a dyn Clock,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(store: &'a RecordStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Assemble a report over the records falling inside `period`.
    ///
    /// Every analysis in the body, including cluster counts, runs over
    /// the period-filtered records, not the whole store.
    pub fn build(&self, report_type: ReportType, period: Period) -> Report {
        let now = self.clock.now();
        let records = self.filter_by_period(period);

        tracing::info!(
            report = report_type.title(),
            period = period.label(),
            records = records.len(),
            "building report"
        );

        let type_index = by_type(&records);
        let location_index = by_location(&records);

        let summary = ReportSummary {
            total_crimes: records.len() as u64,
            crime_types: type_index.len(),
            locations: location_index.len(),
            date_range: date_range_label(&records),
        };

        let analysis = match report_type {
            ReportType::Summary => Analysis::Summary(SummaryAnalysis {
                crime_types: share_entries(&type_index),
                locations: share_entries(&location_index),
                time_patterns: bucketize(&by_hour(&records)).periods,
                clusters: analysis::detect(&records, DEFAULT_WINDOW_DAYS).len(),
            }),
            ReportType::Trends => Analysis::Trends(TrendAnalysis {
                daily: trends::daily_counts(&records),
                weekdays: trends::weekday_counts(&records),
                monthly: trends::monthly_counts(&records),
                summary: trends::summarize(&records),
                prediction: trends::predict_next_week(&records),
            }),
            ReportType::Hotspots => {
                let hotspots = analysis::assess(&records);
                let recommendations = analysis::recommendations(&hotspots);
                Analysis::Hotspots(HotspotAnalysis {
                    hotspots,
                    recommendations,
                })
            }
            ReportType::Detailed => {
                let mut chronological = records.clone();
                chronological.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time)));
                Analysis::Detailed(DetailedAnalysis {
                    by_type: group_by(&records, |r| r.kind.clone()),
                    by_location: group_by(&records, |r| r.location.clone()),
                    chronological,
                    records,
                })
            }
        };

        Report {
            title: report_type.title(),
            generated_at: now,
            period,
            summary,
            analysis,
        }
    }

    /// Records whose date falls inside the rolling window ending at the
    /// clock's current date. `Period::All` clones the whole store.
    fn filter_by_period(&self, period: Period) -> Vec<CrimeRecord> {
        let now = self.clock.now();
        let cutoff: Option<NaiveDate> = match period {
            Period::Week => Some((now - Duration::days(7)).date_naive()),
            Period::Month => now.checked_sub_months(Months::new(1)).map(|t| t.date_naive()),
            Period::Quarter => now.checked_sub_months(Months::new(3)).map(|t| t.date_naive()),
            Period::Year => now.checked_sub_months(Months::new(12)).map(|t| t.date_naive()),
            Period::All => None,
        };

        match cutoff {
            Some(cutoff) => self
                .store
                .all()
                .iter()
                .filter(|r| r.date >= cutoff)
                .cloned()
                .collect(),
            None => self.store.all().to_vec(),
        }
    }
}

fn date_range_label(records: &[CrimeRecord]) -> String {
    let first = records.iter().map(|r| r.date).min();
    let last = records.iter().map(|r| r.date).max();
    match (first, last) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => "No data".to_string(),
    }
}

/// All index entries ranked by count, with their share of the total
fn share_entries(index: &FrequencyIndex<String>) -> Vec<ShareEntry> {
    let total = index.total();
    top_n(index, index.len())
        .into_iter()
        .map(|entry| ShareEntry {
            percentage: if total == 0 {
                0.0
            } else {
                entry.count as f64 / total as f64 * 100.0
            },
            name: entry.key,
            count: entry.count,
        })
        .collect()
}

/// Group records by a key, groups ordered by first appearance
fn group_by<F>(records: &[CrimeRecord], key_fn: F) -> Vec<(String, Vec<CrimeRecord>)>
where
    F: Fn(&CrimeRecord) -> String,
{
    let mut groups: Vec<(String, Vec<CrimeRecord>)> = Vec::new();
    for record in records {
        let key = key_fn(record);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(record.clone()),
            None => groups.push((key, vec![record.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn record(id: u32, date: &str, time: &str, kind: &str, location: &str) -> CrimeRecord {
        CrimeRecord::parse(id, date, time, kind, location, "").unwrap()
    }

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
    }

    fn sample_store() -> RecordStore {
        RecordStore::from_records(vec![
            record(1, "2024-03-14", "09:00", "Theft", "Downtown"),
            record(2, "2024-03-10", "21:30", "Assault", "Park"),
            record(3, "2024-02-20", "02:15", "Theft", "Downtown"),
            record(4, "2023-06-01", "12:00", "Burglary", "Suburbs"),
        ])
        .unwrap()
    }

    #[test]
    fn test_period_filtering_is_deterministic_with_fixed_clock() {
        let store = sample_store();
        let clock = fixed_clock();
        let builder = ReportBuilder::new(&store, &clock);

        // Week window starts 2024-03-08: records 1 and 2
        let report = builder.build(ReportType::Summary, Period::Week);
        assert_eq!(report.summary.total_crimes, 2);

        // Month window starts 2024-02-15: records 1, 2 and 3
        let report = builder.build(ReportType::Summary, Period::Month);
        assert_eq!(report.summary.total_crimes, 3);

        // All: everything, including the 2023 record
        let report = builder.build(ReportType::Summary, Period::All);
        assert_eq!(report.summary.total_crimes, 4);
        assert_eq!(report.summary.date_range, "2023-06-01 to 2024-03-14");
    }

    #[test]
    fn test_summary_analysis_shares_sum_to_hundred() {
        let store = sample_store();
        let clock = fixed_clock();
        let report = ReportBuilder::new(&store, &clock).build(ReportType::Summary, Period::All);

        let Analysis::Summary(summary) = &report.analysis else {
            panic!("expected summary analysis");
        };

        assert_eq!(summary.crime_types[0].name, "Theft");
        assert_eq!(summary.crime_types[0].count, 2);

        let total_pct: f64 = summary.crime_types.iter().map(|e| e.percentage).sum();
        assert!((total_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_detailed_analysis_orderings() {
        let store = sample_store();
        let clock = fixed_clock();
        let report = ReportBuilder::new(&store, &clock).build(ReportType::Detailed, Period::All);

        let Analysis::Detailed(detailed) = &report.analysis else {
            panic!("expected detailed analysis");
        };

        // Store order preserved in records
        let ids: Vec<u32> = detailed.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);

        // Newest first
        let chrono_ids: Vec<u32> = detailed.chronological.iter().map(|r| r.id).collect();
        assert_eq!(chrono_ids, [1, 2, 3, 4]);

        // Groups in first-seen order
        let type_keys: Vec<&str> = detailed.by_type.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(type_keys, ["Theft", "Assault", "Burglary"]);
        assert_eq!(detailed.by_type[0].1.len(), 2);
    }

    #[test]
    fn test_empty_store_reports_no_data() {
        let store = RecordStore::new();
        let clock = fixed_clock();
        let report = ReportBuilder::new(&store, &clock).build(ReportType::Summary, Period::All);

        assert_eq!(report.summary.total_crimes, 0);
        assert_eq!(report.summary.date_range, "No data");

        let Analysis::Summary(summary) = &report.analysis else {
            panic!("expected summary analysis");
        };
        assert!(summary.crime_types.is_empty());
        assert_eq!(summary.clusters, 0);
    }

    #[test]
    fn test_hotspot_report_carries_recommendations() {
        let store = sample_store();
        let clock = fixed_clock();
        let report = ReportBuilder::new(&store, &clock).build(ReportType::Hotspots, Period::All);

        let Analysis::Hotspots(hotspots) = &report.analysis else {
            panic!("expected hotspot analysis");
        };

        assert_eq!(hotspots.hotspots[0].location, "Downtown");
        assert_eq!(
            hotspots.recommendations[0],
            "Increase security measures in Downtown - 2 incidents reported"
        );
    }
}
