//! Hotspot assessment
//!
//! Ranks locations by incident share and attaches a risk grade based on
//! the location's percentage of all incidents. Unlike cluster risk, which
//! is relative to a temporal baseline, hotspot risk is a share-of-total
//! judgement.

use serde::Serialize;

use super::clusters::RiskLevel;
use crate::index::{by_location, top_n};
use crate::store::CrimeRecord;

/// How many hotspots get a patrol recommendation
const RECOMMENDATION_LIMIT: usize = 3;

/// One location with its count, share of total and risk grade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotEntry {
    pub location: String,
    pub count: u64,
    pub percentage: f64,
    pub risk_level: RiskLevel,
}

/// Risk grade for a location holding `count` of `total` incidents.
///
/// Above 25% of all incidents is High, above 15% Medium, otherwise Low.
/// Hotspots never grade Critical; that level is reserved for clusters.
pub fn location_risk(count: u64, total: u64) -> RiskLevel {
    if total == 0 {
        return RiskLevel::Low;
    }
    let percentage = count as f64 / total as f64 * 100.0;
    if percentage > 25.0 {
        RiskLevel::High
    } else if percentage > 15.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// All locations as hotspot entries, ranked by count descending.
pub fn assess(records: &[CrimeRecord]) -> Vec<HotspotEntry> {
    let index = by_location(records);
    let total = index.total();

    top_n(&index, index.len())
        .into_iter()
        .map(|entry| HotspotEntry {
            percentage: if total == 0 {
                0.0
            } else {
                entry.count as f64 / total as f64 * 100.0
            },
            risk_level: location_risk(entry.count, total),
            location: entry.key,
            count: entry.count,
        })
        .collect()
}

/// Patrol recommendations for the top hotspots.
pub fn recommendations(hotspots: &[HotspotEntry]) -> Vec<String> {
    hotspots
        .iter()
        .take(RECOMMENDATION_LIMIT)
        .map(|entry| {
            format!(
                "Increase security measures in {} - {} incidents reported",
                entry.location, entry.count
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CrimeRecord;

    fn record(id: u32, location: &str) -> CrimeRecord {
        CrimeRecord::parse(id, "2024-01-15", "12:00", "Theft", location, "").unwrap()
    }

    #[test]
    fn test_risk_thresholds() {
        // Exactly 25% is Medium, exactly 15% is Low: both strict
        assert_eq!(location_risk(26, 100), RiskLevel::High);
        assert_eq!(location_risk(25, 100), RiskLevel::Medium);
        assert_eq!(location_risk(16, 100), RiskLevel::Medium);
        assert_eq!(location_risk(15, 100), RiskLevel::Low);
        assert_eq!(location_risk(0, 0), RiskLevel::Low);
    }

    #[test]
    fn test_assess_ranks_and_grades() {
        let mut records = Vec::new();
        let mut id = 0;
        for (location, n) in [("Downtown", 6), ("Park", 3), ("Suburbs", 1)] {
            for _ in 0..n {
                id += 1;
                records.push(record(id, location));
            }
        }

        let hotspots = assess(&records);
        assert_eq!(hotspots.len(), 3);

        assert_eq!(hotspots[0].location, "Downtown");
        assert_eq!(hotspots[0].count, 6);
        assert!((hotspots[0].percentage - 60.0).abs() < 1e-9);
        assert_eq!(hotspots[0].risk_level, RiskLevel::High);

        assert_eq!(hotspots[1].location, "Park");
        assert_eq!(hotspots[1].risk_level, RiskLevel::High); // 30%

        assert_eq!(hotspots[2].location, "Suburbs");
        assert_eq!(hotspots[2].risk_level, RiskLevel::Low); // 10%
    }

    #[test]
    fn test_recommendations_cap_at_three() {
        let records: Vec<CrimeRecord> = ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, loc)| record(i as u32 + 1, loc))
            .collect();

        let recs = recommendations(&assess(&records));
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0], "Increase security measures in A - 1 incidents reported");
    }

    #[test]
    fn test_empty_records() {
        assert!(assess(&[]).is_empty());
        assert!(recommendations(&[]).is_empty());
    }
}
