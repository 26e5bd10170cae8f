//! Plain-text rendering and file export
//!
//! Pure formatting over a built [`Report`]; no analysis happens here.
//! The layout is a compatibility surface: downstream tooling parses the
//! `SUMMARY` block, so the header rules, section order and number
//! formats must not drift.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use super::{Analysis, Report};

/// Render a report to the canonical export text.
pub fn to_text(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", report.title);
    let _ = writeln!(
        out,
        "Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Period: {}", report.period.label());
    let _ = writeln!(out, "{}", "=".repeat(50));
    out.push('\n');

    let _ = writeln!(out, "SUMMARY");
    let _ = writeln!(out, "{}", "=".repeat(20));
    let _ = writeln!(out, "Total Crimes: {}", report.summary.total_crimes);
    let _ = writeln!(out, "Crime Types: {}", report.summary.crime_types);
    let _ = writeln!(out, "Locations: {}", report.summary.locations);
    let _ = writeln!(out, "Date Range: {}", report.summary.date_range);
    out.push('\n');

    // Only summary reports carry the ranked breakdown sections
    if let Analysis::Summary(summary) = &report.analysis {
        let _ = writeln!(out, "CRIME TYPES ANALYSIS");
        let _ = writeln!(out, "{}", "=".repeat(20));
        for (i, entry) in summary.crime_types.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {}: {} incidents ({:.1}%)",
                i + 1,
                entry.name,
                entry.count,
                entry.percentage
            );
        }
        out.push('\n');

        let _ = writeln!(out, "LOCATION ANALYSIS");
        let _ = writeln!(out, "{}", "=".repeat(20));
        for (i, entry) in summary.locations.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {}: {} incidents ({:.1}%)",
                i + 1,
                entry.name,
                entry.count,
                entry.percentage
            );
        }
        out.push('\n');
    }

    out
}

/// File name for an exported report: the title with whitespace collapsed
/// to underscores, plus the generation date.
pub fn export_filename(report: &Report) -> String {
    let slug: Vec<&str> = report.title.split_whitespace().collect();
    format!(
        "{}_{}.txt",
        slug.join("_"),
        report.generated_at.format("%Y-%m-%d")
    )
}

/// Write the rendered report into `dir`, returning the file path.
pub fn export(report: &Report, dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join(export_filename(report));
    fs::write(&path, to_text(report))?;
    tracing::info!(path = %path.display(), "report exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::report::{Period, ReportBuilder, ReportType};
    use crate::store::{CrimeRecord, RecordStore};
    use chrono::{TimeZone, Utc};

    fn sample_report(report_type: ReportType) -> Report {
        let store = RecordStore::from_records(vec![
            CrimeRecord::parse(1, "2024-03-10", "09:00", "Theft", "Downtown", "").unwrap(),
            CrimeRecord::parse(2, "2024-03-11", "21:30", "Theft", "Downtown", "").unwrap(),
            CrimeRecord::parse(3, "2024-03-12", "02:15", "Assault", "Park", "").unwrap(),
        ])
        .unwrap();
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());
        ReportBuilder::new(&store, &clock).build(report_type, Period::All)
    }

    #[test]
    fn test_summary_text_layout() {
        let text = to_text(&sample_report(ReportType::Summary));

        let expected = "\
Crime Summary Report
Generated: 2024-03-15 12:00:00 UTC
Period: all
==================================================

SUMMARY
====================
Total Crimes: 3
Crime Types: 2
Locations: 2
Date Range: 2024-03-10 to 2024-03-12

CRIME TYPES ANALYSIS
====================
1. Theft: 2 incidents (66.7%)
2. Assault: 1 incidents (33.3%)

LOCATION ANALYSIS
====================
1. Downtown: 2 incidents (66.7%)
2. Park: 1 incidents (33.3%)

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_non_summary_reports_omit_breakdown_sections() {
        for report_type in [ReportType::Trends, ReportType::Hotspots, ReportType::Detailed] {
            let text = to_text(&sample_report(report_type));
            assert!(text.contains("SUMMARY\n"));
            assert!(!text.contains("CRIME TYPES ANALYSIS"));
            assert!(!text.contains("LOCATION ANALYSIS"));
        }
    }

    #[test]
    fn test_round_trip_summary_fields() {
        let report = sample_report(ReportType::Summary);
        let text = to_text(&report);

        let total: u64 = text
            .lines()
            .find_map(|l| l.strip_prefix("Total Crimes: "))
            .unwrap()
            .parse()
            .unwrap();
        let date_range = text
            .lines()
            .find_map(|l| l.strip_prefix("Date Range: "))
            .unwrap();

        assert_eq!(total, report.summary.total_crimes);
        assert_eq!(date_range, report.summary.date_range);
    }

    #[test]
    fn test_export_filename_from_title_and_date() {
        let report = sample_report(ReportType::Trends);
        assert_eq!(
            export_filename(&report),
            "Crime_Trend_Analysis_Report_2024-03-15.txt"
        );
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report(ReportType::Summary);

        let path = export(&report, dir.path()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_text(&report));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("Crime_Summary_Report_"));
    }
}
