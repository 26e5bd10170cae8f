//! Casefile Query Layer
//!
//! Linear-scan search over the record store. Filters are conjunctive: a
//! record matches only when every populated filter accepts it. There is
//! no index behind search; at the dataset sizes this tool targets a full
//! scan is faster than maintaining one.

mod filter;

pub use filter::{search, SearchFilters};
