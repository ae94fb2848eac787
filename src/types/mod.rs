//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Input records and their well-known fields
//! - `account`: Per-account running totals
//! - `statistic`: Per-transaction-type totals
//! - `transaction`: Transaction classification and identifiers
//! - `error`: Error types for the analyzer

pub mod account;
pub mod error;
pub mod record;
pub mod statistic;
pub mod transaction;

pub use account::{AccountSummary, AccountSummaryRow};
pub use error::AnalyzerError;
pub use record::{fields, Record};
pub use statistic::{TransactionStatistic, TransactionStatisticRow};
pub use transaction::{AccountNumber, TransactionKind};
