//! Casefile Record Store
//!
//! The ordered, read-mostly collection of incident records that every other
//! module derives from:
//!
//! - **types**: Core data structures (CrimeRecord, InvalidRecordError)
//! - **record_store**: The store itself (atomic load, ordered access)
//!
//! # Example
//!
//! ```rust
//! use casefile::store::{CrimeRecord, RecordStore};
//!
//! let records = vec![
//!     CrimeRecord::parse(1, "2024-01-15", "14:30", "Theft", "Downtown", "Shoplifting")?,
//!     CrimeRecord::parse(2, "2024-01-16", "08:45", "Vandalism", "Park District", "")?,
//! ];
//!
//! let store = RecordStore::from_records(records)?;
//! assert_eq!(store.len(), 2);
//! # Ok::<(), casefile::store::InvalidRecordError>(())
//! ```

mod record_store;
mod types;

pub use record_store::RecordStore;
pub use types::{CrimeRecord, InvalidRecordError};
