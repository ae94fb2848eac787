//! Core business logic module
//!
//! This module contains the aggregation components:
//! - `aggregator` - Per-record accumulation and the derived averages
//! - `account_book` - Ordered per-account running totals
//! - `statistics_book` - Ordered per-transaction-type totals
//! - `rules` - Suspicious transaction detection rules

pub mod account_book;
pub mod aggregator;
pub mod rules;
pub mod statistics_book;

pub use account_book::AccountBook;
pub use aggregator::{AggregationReport, Aggregator};
pub use rules::DetectionRules;
pub use statistics_book::StatisticsBook;
