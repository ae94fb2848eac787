//! Transaction Analyzer Library
//! # Overview
//!
//! This library aggregates a batch of transaction records, loaded from CSV or
//! JSON, into three reports written as CSV.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Record, AccountSummary, TransactionStatistic, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::aggregator`] - Per-record accumulation and derived averages
//!   - [`core::account_book`] - Per-account balances and totals
//!   - [`core::statistics_book`] - Per-transaction-type totals and counts
//!   - [`core::rules`] - Suspicious transaction detection
//! - [`io`] - Input loading and report writing
//! - [`pipeline`] - Load, aggregate and report for one input file
//!
//! # Transaction Types
//!
//! Only two transaction types move money:
//!
//! - **deposit**: Adds the amount to the balance and to total deposits
//! - **withdrawal**: Subtracts the amount from the balance and adds it to total withdrawals
//!
//! Any other type still creates the account, is checked for suspicion and is
//! counted in the statistics. Type names are matched exactly.
//!
//! # Suspicious Transactions
//!
//! A record is suspicious when its amount is strictly above the threshold
//! (10000 by default) or its currency is one of the uncommon currencies
//! (`XRP` and `LTC` by default).

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{AccountBook, AggregationReport, Aggregator, DetectionRules, StatisticsBook};
pub use io::{
    write_account_summaries_to_csv, write_suspicious_transactions_to_csv,
    write_transaction_statistics_to_csv, InputLoader,
};
pub use pipeline::{PipelineConfig, ReportPipeline, RunSummary};
pub use types::{
    AccountNumber, AccountSummary, AnalyzerError, Record, TransactionKind, TransactionStatistic,
};
