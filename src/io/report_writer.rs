//! CSV report output
//!
//! Serializes the three aggregation results, each with a fixed header:
//! - account summaries: `Account number,Balance,Total Deposits,Total Withdrawals`
//! - suspicious transactions: the seven record fields, in record field order
//! - transaction statistics: `Transaction type,Total amount,Transaction count`
//!
//! Every report has a writer-generic form for in-memory use and a `_to_csv`
//! form that creates (or truncates) a file. Rows keep accumulator order,
//! which is first-seen order for accounts and types and input order for
//! suspicious transactions.

use crate::core::{AccountBook, StatisticsBook};
use crate::types::{
    fields, AccountSummaryRow, AnalyzerError, Record, TransactionStatisticRow,
};
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub const ACCOUNT_SUMMARY_HEADER: [&str; 4] =
    ["Account number", "Balance", "Total Deposits", "Total Withdrawals"];

pub const SUSPICIOUS_TRANSACTION_HEADER: [&str; 7] = fields::ALL;

pub const TRANSACTION_STATISTICS_HEADER: [&str; 3] =
    ["Transaction type", "Total amount", "Transaction count"];

fn csv_writer<W: Write>(output: W) -> Writer<W> {
    // Headers are written explicitly so empty reports still get one
    WriterBuilder::new().has_headers(false).from_writer(output)
}

/// Write account summaries as CSV
///
/// # Arguments
///
/// * `summaries` - Account summaries in first-seen order
/// * `output` - Writer receiving the CSV text
pub fn write_account_summaries<W: Write>(
    summaries: &AccountBook,
    output: W,
) -> Result<(), AnalyzerError> {
    let mut writer = csv_writer(output);

    writer.write_record(ACCOUNT_SUMMARY_HEADER)?;
    for summary in summaries {
        writer.serialize(AccountSummaryRow::from(summary))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write suspicious transactions as CSV
///
/// Each field is written as its text rendering, so the amount appears
/// exactly as it did in the input.
///
/// # Errors
///
/// Returns `MissingField` if a record lacks any of the seven report fields.
/// Rows before the offending record have already been written.
pub fn write_suspicious_transactions<W: Write>(
    transactions: &[Record],
    output: W,
) -> Result<(), AnalyzerError> {
    let mut writer = csv_writer(output);

    writer.write_record(SUSPICIOUS_TRANSACTION_HEADER)?;
    for transaction in transactions {
        let row = SUSPICIOUS_TRANSACTION_HEADER
            .iter()
            .map(|field| transaction.require_text(field))
            .collect::<Result<Vec<_>, _>>()?;
        writer.write_record(row.iter().map(|value| value.as_bytes()))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write transaction statistics as CSV
pub fn write_transaction_statistics<W: Write>(
    statistics: &StatisticsBook,
    output: W,
) -> Result<(), AnalyzerError> {
    let mut writer = csv_writer(output);

    writer.write_record(TRANSACTION_STATISTICS_HEADER)?;
    for statistic in statistics {
        writer.serialize(TransactionStatisticRow::from(statistic))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write account summaries to a file, replacing any existing content
pub fn write_account_summaries_to_csv(
    summaries: &AccountBook,
    path: &Path,
) -> Result<(), AnalyzerError> {
    write_account_summaries(summaries, File::create(path)?)?;
    info!("Wrote {} account summaries to {}", summaries.len(), path.display());
    Ok(())
}

/// Write suspicious transactions to a file, replacing any existing content
pub fn write_suspicious_transactions_to_csv(
    transactions: &[Record],
    path: &Path,
) -> Result<(), AnalyzerError> {
    write_suspicious_transactions(transactions, File::create(path)?)?;
    info!(
        "Wrote {} suspicious transactions to {}",
        transactions.len(),
        path.display()
    );
    Ok(())
}

/// Write transaction statistics to a file, replacing any existing content
pub fn write_transaction_statistics_to_csv(
    statistics: &StatisticsBook,
    path: &Path,
) -> Result<(), AnalyzerError> {
    write_transaction_statistics(statistics, File::create(path)?)?;
    info!(
        "Wrote {} transaction statistics to {}",
        statistics.len(),
        path.display()
    );
    Ok(())
}
