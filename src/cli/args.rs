use crate::core::DetectionRules;
use crate::pipeline::{
    PipelineConfig, ReportPaths, DEFAULT_ACCOUNTS_REPORT, DEFAULT_STATISTICS_REPORT,
    DEFAULT_SUSPICIOUS_REPORT,
};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Aggregate transaction records into account, risk and statistics reports
#[derive(Parser, Debug)]
#[command(name = "transaction-analyzer")]
#[command(
    about = "Aggregate transaction records into account, risk and statistics reports",
    long_about = None
)]
pub struct CliArgs {
    /// Input file containing transaction records
    #[arg(value_name = "INPUT", help = "Path to the input .csv or .json file")]
    pub input_file: PathBuf,

    /// Account summaries report path
    #[arg(
        long = "accounts",
        value_name = "PATH",
        default_value = DEFAULT_ACCOUNTS_REPORT,
        help = "Where to write the account summaries report"
    )]
    pub accounts_report: PathBuf,

    /// Suspicious transactions report path
    #[arg(
        long = "suspicious",
        value_name = "PATH",
        default_value = DEFAULT_SUSPICIOUS_REPORT,
        help = "Where to write the suspicious transactions report"
    )]
    pub suspicious_report: PathBuf,

    /// Transaction statistics report path
    #[arg(
        long = "statistics",
        value_name = "PATH",
        default_value = DEFAULT_STATISTICS_REPORT,
        help = "Where to write the transaction statistics report"
    )]
    pub statistics_report: PathBuf,

    /// Amount above which a transaction is flagged
    #[arg(
        long = "threshold",
        value_name = "AMOUNT",
        default_value = "10000",
        help = "Flag transactions with an amount strictly above this value"
    )]
    pub threshold: Decimal,

    /// Currencies flagged regardless of amount
    #[arg(
        long = "uncommon-currency",
        value_name = "CODE",
        default_values = ["XRP", "LTC"],
        help = "Currency code to flag (repeatable, case-sensitive; replaces the defaults XRP and LTC)"
    )]
    pub uncommon_currencies: Vec<String>,

    /// Log verbosity on stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level: error, warn, info, debug or trace"
    )]
    pub log_level: LogLevel,
}

/// Available log levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl CliArgs {
    /// Build the run configuration from the parsed arguments
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            input_file: self.input_file.clone(),
            reports: ReportPaths {
                accounts: self.accounts_report.clone(),
                suspicious: self.suspicious_report.clone(),
                statistics: self.statistics_report.clone(),
            },
            rules: DetectionRules::new(self.threshold, self.uncommon_currencies.clone()),
        }
    }
}
