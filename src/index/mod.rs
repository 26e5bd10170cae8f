//! Casefile Index Structures
//!
//! Derived frequency views over the record store:
//!
//! - **FrequencyIndex**: one-pass key→count mapping with first-seen order
//! - **ranking**: top-N extraction, stable over first-seen order
//! - **buckets**: hourly counts aggregated into fixed day periods
//!
//! Indexes are rebuilt wholesale whenever the store's content changes;
//! they are never patched incrementally.
//!
//! ```text
//! RecordStore ──▶ FrequencyIndex (type / location / hour)
//!                      │
//!                      ├─▶ ranking::top_n ──▶ ranked entries
//!                      └─▶ buckets::bucketize ──▶ day-period totals
//! ```

mod buckets;
mod frequency;
mod ranking;

pub use buckets::{bucketize, DayPeriod, TimePatterns};
pub use frequency::{by_hour, by_location, by_type, FrequencyIndex};
pub use ranking::{top_n, RankedEntry};
