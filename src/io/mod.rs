//! I/O module
//!
//! Handles record input and report output.
//!
//! # Components
//!
//! - `input_loader` - CSV/JSON input, format chosen by file extension
//! - `report_writer` - CSV serialization of the three aggregation reports

pub mod input_loader;
pub mod report_writer;

pub use input_loader::{records_from_json, InputLoader};
pub use report_writer::{
    write_account_summaries, write_account_summaries_to_csv, write_suspicious_transactions,
    write_suspicious_transactions_to_csv, write_transaction_statistics,
    write_transaction_statistics_to_csv,
};
