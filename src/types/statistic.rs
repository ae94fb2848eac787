//! Per-transaction-type statistics

use super::error::AnalyzerError;
use rust_decimal::Decimal;
use serde::Serialize;

/// Amount total and count for one transaction type
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionStatistic {
    pub transaction_type: String,
    pub total_amount: Decimal,
    pub transaction_count: u64,
}

impl TransactionStatistic {
    pub fn new(transaction_type: impl Into<String>) -> Self {
        TransactionStatistic {
            transaction_type: transaction_type.into(),
            total_amount: Decimal::ZERO,
            transaction_count: 0,
        }
    }

    /// Add one transaction's amount
    pub fn record(&mut self, amount: Decimal) -> Result<(), AnalyzerError> {
        self.total_amount = self.total_amount.checked_add(amount).ok_or_else(|| {
            AnalyzerError::arithmetic_overflow("statistics", &self.transaction_type)
        })?;
        self.transaction_count += 1;

        Ok(())
    }

    /// Mean amount, or zero when nothing has been counted
    pub fn average(&self) -> Decimal {
        if self.transaction_count == 0 {
            return Decimal::ZERO;
        }

        self.total_amount / Decimal::from(self.transaction_count)
    }
}

/// Output row for the transaction statistics report
#[derive(Debug, Serialize)]
pub struct TransactionStatisticRow<'a> {
    pub transaction_type: &'a str,
    pub total_amount: Decimal,
    pub transaction_count: u64,
}

impl<'a> From<&'a TransactionStatistic> for TransactionStatisticRow<'a> {
    fn from(statistic: &'a TransactionStatistic) -> Self {
        TransactionStatisticRow {
            transaction_type: &statistic.transaction_type,
            total_amount: statistic.total_amount,
            transaction_count: statistic.transaction_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_empty_bucket_is_zero() {
        let statistic = TransactionStatistic::new("deposit");
        assert_eq!(statistic.average(), Decimal::ZERO);
    }

    #[test]
    fn test_average_is_mean_of_recorded_amounts() {
        let mut statistic = TransactionStatistic::new("withdrawal");
        statistic.record(Decimal::new(500, 0)).unwrap();
        statistic.record(Decimal::new(400, 0)).unwrap();

        assert_eq!(statistic.total_amount, Decimal::new(900, 0));
        assert_eq!(statistic.transaction_count, 2);
        assert_eq!(statistic.average(), Decimal::new(450, 0));
    }
}
