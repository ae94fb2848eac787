//! Transaction Analyzer CLI
//!
//! Reads transaction records from a CSV or JSON file and writes three CSV
//! reports: account summaries, suspicious transactions and per-type
//! statistics.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv
//! cargo run -- transactions.json --accounts out/accounts.csv --log-level info
//! cargo run -- transactions.csv --threshold 5000 --uncommon-currency DOGE
//! ```
//!
//! Logs go to stderr. A per-type summary is printed to stdout once all
//! reports are written.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unsupported format, malformed record, etc.)

use std::io::{stderr, stdout, BufWriter, Write};
use std::process;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};
use transaction_analyzer::cli;
use transaction_analyzer::pipeline::{ReportPipeline, RunSummary};

fn main() {
    let args = cli::parse_args();
    setup_logging(args.log_level.to_level_filter());

    let pipeline = ReportPipeline::new(args.to_pipeline_config());
    let summary = match pipeline.run() {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_summary_to_stdout(&summary) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(level: LevelFilter) {
    // stdout carries the summary, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}

fn write_summary_to_stdout(summary: &RunSummary) -> std::io::Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(
        output,
        "Processed {} records: {} accounts, {} suspicious transactions",
        summary.records, summary.accounts, summary.suspicious
    )?;
    for average in &summary.averages {
        writeln!(
            output,
            "{}: {} transactions, average amount {}",
            average.transaction_type,
            average.transaction_count,
            average.average.round_dp(2)
        )?;
    }

    output.flush()
}
