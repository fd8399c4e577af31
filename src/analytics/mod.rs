//! Commit aggregation and summary statistics
//!
//! Story 2.3: Builds the sorted [`Commit`](crate::models::Commit)
//! collection from the flat line-record dataset and computes the
//! summary counters shown above the charts.
//!
//! ## Architecture
//!
//! - **Aggregation**: runs once after load; the commit collection is
//!   never mutated afterwards
//! - **Summary**: recomputed on demand from whatever subset the time
//!   horizon currently filters in

mod types;


pub use types::*;

/// Aggregation and summary computation
pub mod aggregator;


pub use aggregator::{aggregate_commits, compute_summary};
