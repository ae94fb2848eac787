//! Account book module
//!
//! This module provides the `AccountBook` struct which keeps one
//! [`AccountSummary`] per account number, in the order accounts were first seen.
//!
//! The AccountBook is responsible for:
//! - Creating summaries lazily on the first record for an account
//! - Applying deposits and withdrawals to the running totals
//! - Listing summaries in first-seen order for report output

use crate::types::{AccountSummary, AnalyzerError, TransactionKind};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Ordered collection of account summaries
///
/// Summaries live in a `Vec` in insertion order; a side index maps account
/// numbers to their slot.
#[derive(Debug, Default, Clone)]
pub struct AccountBook {
    summaries: Vec<AccountSummary>,
    index: HashMap<String, usize>,
}

impl AccountBook {
    /// Create a new AccountBook with no accounts
    pub fn new() -> Self {
        AccountBook {
            summaries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Get or create the summary for an account
    ///
    /// If no summary exists yet, one is appended with all totals at zero.
    ///
    /// # Arguments
    ///
    /// * `account_number` - The account to look up
    ///
    /// # Returns
    ///
    /// A mutable reference to the summary for the account
    pub fn get_or_create(&mut self, account_number: &str) -> &mut AccountSummary {
        let slot = match self.index.get(account_number) {
            Some(&slot) => slot,
            None => {
                let slot = self.summaries.len();
                self.summaries.push(AccountSummary::new(account_number));
                self.index.insert(account_number.to_string(), slot);
                slot
            }
        };

        &mut self.summaries[slot]
    }

    /// Apply one transaction to an account
    ///
    /// The account summary is created even when the transaction kind leaves
    /// the totals untouched.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if a total would overflow; the summary is
    /// left unchanged in that case.
    pub fn apply(
        &mut self,
        account_number: &str,
        kind: TransactionKind,
        amount: Decimal,
    ) -> Result<(), AnalyzerError> {
        let summary = self.get_or_create(account_number);

        match kind {
            TransactionKind::Deposit => summary.deposit(amount),
            TransactionKind::Withdrawal => summary.withdraw(amount),
            TransactionKind::Other => Ok(()),
        }
    }

    /// Look up an account summary
    pub fn get(&self, account_number: &str) -> Option<&AccountSummary> {
        self.index
            .get(account_number)
            .map(|&slot| &self.summaries[slot])
    }

    /// Iterate over summaries in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, AccountSummary> {
        self.summaries.iter()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AccountBook {
    type Item = &'a AccountSummary;
    type IntoIter = std::slice::Iter<'a, AccountSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
