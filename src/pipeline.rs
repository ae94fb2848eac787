//! Processing pipeline
//!
//! Runs one batch end to end: the InputLoader reads the records, the
//! Aggregator folds them into the three accumulators, and the report writer
//! serializes each accumulator to its own CSV file.
//!
//! The pipeline is single-threaded and stops at the first error. Reports
//! written before a failing stage are left in place.

use crate::core::{Aggregator, DetectionRules};
use crate::io::{
    write_account_summaries_to_csv, write_suspicious_transactions_to_csv,
    write_transaction_statistics_to_csv, InputLoader,
};
use crate::types::AnalyzerError;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_ACCOUNTS_REPORT: &str = "account_summaries.csv";
pub const DEFAULT_SUSPICIOUS_REPORT: &str = "suspicious_transactions.csv";
pub const DEFAULT_STATISTICS_REPORT: &str = "transaction_statistics.csv";

/// Output locations for the three reports
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPaths {
    pub accounts: PathBuf,
    pub suspicious: PathBuf,
    pub statistics: PathBuf,
}

impl Default for ReportPaths {
    fn default() -> Self {
        ReportPaths {
            accounts: PathBuf::from(DEFAULT_ACCOUNTS_REPORT),
            suspicious: PathBuf::from(DEFAULT_SUSPICIOUS_REPORT),
            statistics: PathBuf::from(DEFAULT_STATISTICS_REPORT),
        }
    }
}

/// Everything one run needs
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub input_file: PathBuf,
    pub reports: ReportPaths,
    pub rules: DetectionRules,
}

impl PipelineConfig {
    /// Config with default report paths and detection rules
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        PipelineConfig {
            input_file: input_file.into(),
            reports: ReportPaths::default(),
            rules: DetectionRules::default(),
        }
    }
}

/// Count and mean amount for one transaction type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAverage {
    pub transaction_type: String,
    pub transaction_count: u64,
    pub average: Decimal,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records: usize,
    pub accounts: usize,
    pub suspicious: usize,
    /// Per-type averages in first-seen order
    pub averages: Vec<TypeAverage>,
}

/// Load → aggregate → report, for a single input file
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    config: PipelineConfig,
}

impl ReportPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        ReportPipeline { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the whole pipeline
    ///
    /// # Returns
    ///
    /// * `Ok(RunSummary)` - All three reports were written
    /// * `Err(AnalyzerError)` - The first failure from any stage
    pub fn run(&self) -> Result<RunSummary, AnalyzerError> {
        let loader = InputLoader::new(&self.config.input_file);
        let records = loader.read_input_data()?;

        let mut aggregator = Aggregator::with_rules(self.config.rules.clone());
        aggregator.process_data(&records)?;
        let report = aggregator.report();

        let reports = &self.config.reports;
        write_account_summaries_to_csv(report.account_summaries, &reports.accounts)?;
        write_suspicious_transactions_to_csv(report.suspicious_transactions, &reports.suspicious)?;
        write_transaction_statistics_to_csv(report.transaction_statistics, &reports.statistics)?;

        let mut averages = Vec::with_capacity(report.transaction_statistics.len());
        for statistic in report.transaction_statistics {
            averages.push(TypeAverage {
                transaction_type: statistic.transaction_type.clone(),
                transaction_count: statistic.transaction_count,
                average: aggregator.get_average_transaction_amount(&statistic.transaction_type)?,
            });
        }

        let summary = RunSummary {
            records: records.len(),
            accounts: report.account_summaries.len(),
            suspicious: report.suspicious_transactions.len(),
            averages,
        };

        info!(
            "Processed {} records from {}: {} accounts, {} suspicious",
            summary.records,
            self.config.input_file.display(),
            summary.accounts,
            summary.suspicious
        );

        Ok(summary)
    }
}
