//! Record aggregation
//!
//! This module provides the Aggregator that folds a batch of records into
//! three accumulators:
//! - account summaries (balance, deposit and withdrawal totals per account)
//! - suspicious transactions (records matching the detection rules)
//! - transaction statistics (amount total and count per transaction type)
//!
//! Records are processed in input order with constant work per record. A
//! record's fields are all validated before any accumulator is touched, so a
//! failing record never leaves a half-applied update behind.

use crate::core::account_book::AccountBook;
use crate::core::rules::DetectionRules;
use crate::core::statistics_book::StatisticsBook;
use crate::types::{fields, AnalyzerError, Record, TransactionKind};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Borrowed view of the three accumulators after processing
#[derive(Debug, Clone, Copy)]
pub struct AggregationReport<'a> {
    pub account_summaries: &'a AccountBook,
    pub suspicious_transactions: &'a [Record],
    pub transaction_statistics: &'a StatisticsBook,
}

/// Batch aggregator
///
/// Owns its accumulators for the lifetime of one run. Processing the same
/// records twice counts them twice; nothing is reset between calls.
#[derive(Debug, Default)]
pub struct Aggregator {
    rules: DetectionRules,
    account_summaries: AccountBook,
    suspicious_transactions: Vec<Record>,
    transaction_statistics: StatisticsBook,
}

impl Aggregator {
    /// Create an Aggregator with the default detection rules
    pub fn new() -> Self {
        Self::with_rules(DetectionRules::default())
    }

    /// Create an Aggregator with custom detection rules
    pub fn with_rules(rules: DetectionRules) -> Self {
        Aggregator {
            rules,
            account_summaries: AccountBook::new(),
            suspicious_transactions: Vec::new(),
            transaction_statistics: StatisticsBook::new(),
        }
    }

    /// Process a batch of records
    ///
    /// Applies [`update_account_summary`](Self::update_account_summary),
    /// [`check_suspicious_transactions`](Self::check_suspicious_transactions) and
    /// [`update_transaction_statistics`](Self::update_transaction_statistics)
    /// to each record in order.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to process, in input order
    ///
    /// # Returns
    ///
    /// * `Ok(AggregationReport)` - Views of the three accumulators
    /// * `Err(AnalyzerError)` - The first record error; records before it
    ///   stay applied
    ///
    /// # Errors
    ///
    /// Returns an error if a record:
    /// - Lacks `Account number`, `Transaction type`, `Amount` or `Currency`
    /// - Has an amount that is not a number, or too large for a `Decimal`
    /// - Would overflow a running total
    pub fn process_data(&mut self, records: &[Record]) -> Result<AggregationReport<'_>, AnalyzerError> {
        for record in records {
            validate(record)?;
            self.update_account_summary(record)?;
            self.check_suspicious_transactions(record)?;
            self.update_transaction_statistics(record)?;
        }

        info!(
            "Aggregated {} records into {} accounts, {} transaction types, {} suspicious",
            records.len(),
            self.account_summaries.len(),
            self.transaction_statistics.len(),
            self.suspicious_transactions.len()
        );

        Ok(self.report())
    }

    /// Apply one record to its account summary
    ///
    /// Deposits add to the balance and deposit total; withdrawals subtract
    /// from the balance and add to the withdrawal total. Any other type still
    /// creates the account but leaves its totals unchanged.
    ///
    /// # Errors
    ///
    /// - `MissingField` if `Account number`, `Transaction type` or `Amount` is absent
    /// - `InvalidAmount` if the amount is not numeric
    /// - `AmountOutOfRange` if the amount is too large for a `Decimal`
    /// - `ArithmeticOverflow` if a total would overflow
    pub fn update_account_summary(&mut self, record: &Record) -> Result<(), AnalyzerError> {
        let account_number = record.require_text(fields::ACCOUNT_NUMBER)?;
        let transaction_type = record.require_text(fields::TRANSACTION_TYPE)?;
        let amount = record.amount()?;

        let kind = TransactionKind::classify(&transaction_type);
        if kind == TransactionKind::Other {
            warn!(
                "Transaction type '{}' for account {} does not affect balances",
                transaction_type, account_number
            );
        }

        self.account_summaries.apply(&account_number, kind, amount)
    }

    /// Flag a record if it matches the detection rules
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The record was appended to the suspicious list
    /// * `Ok(false)` - The record is not suspicious
    ///
    /// # Errors
    ///
    /// - `MissingField` if `Amount` or `Currency` is absent
    /// - `InvalidAmount` if the amount is not numeric
    pub fn check_suspicious_transactions(&mut self, record: &Record) -> Result<bool, AnalyzerError> {
        let amount = record.amount()?;
        let currency = record.require_text(fields::CURRENCY)?;

        if !self.rules.is_suspicious(amount, &currency) {
            return Ok(false);
        }

        debug!(
            "Flagged transaction {} ({} {}) as suspicious",
            record.transaction_id().unwrap_or_default(),
            amount,
            currency
        );
        self.suspicious_transactions.push(record.clone());

        Ok(true)
    }

    /// Count one record in its transaction type bucket
    ///
    /// # Errors
    ///
    /// - `MissingField` if `Transaction type` or `Amount` is absent
    /// - `InvalidAmount` if the amount is not numeric
    /// - `ArithmeticOverflow` if the type total would overflow
    pub fn update_transaction_statistics(&mut self, record: &Record) -> Result<(), AnalyzerError> {
        let transaction_type = record.require_text(fields::TRANSACTION_TYPE)?;
        let amount = record.amount()?;

        self.transaction_statistics.record(&transaction_type, amount)
    }

    /// Mean amount for a transaction type
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the type was never recorded.
    pub fn get_average_transaction_amount(&self, transaction_type: &str) -> Result<Decimal, AnalyzerError> {
        self.transaction_statistics.average(transaction_type)
    }

    /// Views of the three accumulators
    pub fn report(&self) -> AggregationReport<'_> {
        AggregationReport {
            account_summaries: &self.account_summaries,
            suspicious_transactions: &self.suspicious_transactions,
            transaction_statistics: &self.transaction_statistics,
        }
    }

    pub fn account_summaries(&self) -> &AccountBook {
        &self.account_summaries
    }

    pub fn suspicious_transactions(&self) -> &[Record] {
        &self.suspicious_transactions
    }

    pub fn transaction_statistics(&self) -> &StatisticsBook {
        &self.transaction_statistics
    }

    pub fn rules(&self) -> &DetectionRules {
        &self.rules
    }
}

/// Check every field the three updates read, in the order they read them
fn validate(record: &Record) -> Result<(), AnalyzerError> {
    record.require_text(fields::ACCOUNT_NUMBER)?;
    record.require_text(fields::TRANSACTION_TYPE)?;
    record.amount()?;
    record.require_text(fields::CURRENCY)?;
    Ok(())
}
