//! # Casefile
//!
//! Crime Incident Analytics - an in-memory engine for loading incident
//! records and deriving frequency rankings, hotspots, time-of-day
//! patterns, temporal clusters and exportable reports.
//!
//! ## Modules
//!
//! - [`store`]: validated in-memory record collection
//! - [`index`]: frequency indexes, ranking, time bucketing
//! - [`analysis`]: hotspots, clusters, trends and the analyzer facade
//! - [`query`]: linear-scan record search
//! - [`report`]: report assembly and plain-text export
//! - [`ingest`]: CSV/JSON import and the embedded sample dataset
//!
//! ## Quick Start
//!
//! ```rust
//! use casefile::analysis::CrimeAnalyzer;
//! use casefile::ingest::sample_records;
//! use casefile::store::RecordStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = RecordStore::from_records(sample_records())?;
//!     let analyzer = CrimeAnalyzer::new(&store);
//!
//!     let overview = analyzer.overview();
//!     println!(
//!         "{} incidents, most common: {}",
//!         overview.total_crimes, overview.most_common_type
//!     );
//!
//!     for entry in analyzer.frequent_types(5) {
//!         println!("{}: {}", entry.key, entry.count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod clock;
pub mod config;
pub mod index;
pub mod ingest;
pub mod query;
pub mod report;
pub mod store;

// Re-export top-level types for convenience
pub use store::{CrimeRecord, InvalidRecordError, RecordStore};

pub use index::{bucketize, top_n, DayPeriod, FrequencyIndex, RankedEntry, TimePatterns};

pub use analysis::{Cluster, CrimeAnalyzer, HotspotEntry, Overview, RiskLevel};

pub use query::{search, SearchFilters};

pub use report::{Period, Report, ReportBuilder, ReportType};

pub use clock::{Clock, FixedClock, SystemClock};

pub use ingest::{CsvImporter, IngestError};

pub use config::{Config, ConfigError, LoggingConfig};
