//! Transaction statistics storage
//!
//! Keeps one [`TransactionStatistic`] bucket per transaction type, in the
//! order types were first seen. Buckets are never removed during a run.

use crate::types::{AnalyzerError, TransactionStatistic};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Ordered collection of per-type statistics
#[derive(Debug, Default, Clone)]
pub struct StatisticsBook {
    buckets: Vec<TransactionStatistic>,
    index: HashMap<String, usize>,
}

impl StatisticsBook {
    pub fn new() -> Self {
        StatisticsBook {
            buckets: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Get or create the bucket for a transaction type
    pub fn get_or_create(&mut self, transaction_type: &str) -> &mut TransactionStatistic {
        let slot = match self.index.get(transaction_type) {
            Some(&slot) => slot,
            None => {
                let slot = self.buckets.len();
                self.buckets
                    .push(TransactionStatistic::new(transaction_type));
                self.index.insert(transaction_type.to_string(), slot);
                slot
            }
        };

        &mut self.buckets[slot]
    }

    /// Count one transaction of the given type
    pub fn record(&mut self, transaction_type: &str, amount: Decimal) -> Result<(), AnalyzerError> {
        self.get_or_create(transaction_type).record(amount)
    }

    pub fn get(&self, transaction_type: &str) -> Option<&TransactionStatistic> {
        self.index
            .get(transaction_type)
            .map(|&slot| &self.buckets[slot])
    }

    /// Mean amount for a transaction type
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the type was never recorded. A bucket with
    /// a zero count yields zero instead.
    pub fn average(&self, transaction_type: &str) -> Result<Decimal, AnalyzerError> {
        self.get(transaction_type)
            .map(TransactionStatistic::average)
            .ok_or_else(|| AnalyzerError::unknown_type(transaction_type))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionStatistic> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<'a> IntoIterator for &'a StatisticsBook {
    type Item = &'a TransactionStatistic;
    type IntoIter = std::slice::Iter<'a, TransactionStatistic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
