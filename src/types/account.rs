//! Account summary type
//!
//! This module defines the per-account running totals built up while
//! processing a batch of records.

use super::error::AnalyzerError;
use super::transaction::AccountNumber;
use rust_decimal::Decimal;
use serde::Serialize;

/// Running totals for one account
///
/// `balance` always equals `total_deposits - total_withdrawals`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    /// The account number as it appeared in the input
    pub account_number: AccountNumber,

    /// Signed running total
    pub balance: Decimal,

    /// Sum of all deposit amounts
    pub total_deposits: Decimal,

    /// Sum of all withdrawal amounts
    pub total_withdrawals: Decimal,
}

impl AccountSummary {
    /// Create a summary with all totals at zero
    pub fn new(account_number: impl Into<AccountNumber>) -> Self {
        AccountSummary {
            account_number: account_number.into(),
            balance: Decimal::ZERO,
            total_deposits: Decimal::ZERO,
            total_withdrawals: Decimal::ZERO,
        }
    }

    /// Credit a deposit
    ///
    /// Both totals are computed before either is stored, so an overflow
    /// leaves the summary untouched.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AnalyzerError> {
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AnalyzerError::arithmetic_overflow("deposit", &self.account_number))?;

        let new_deposits = self
            .total_deposits
            .checked_add(amount)
            .ok_or_else(|| AnalyzerError::arithmetic_overflow("deposit", &self.account_number))?;

        self.balance = new_balance;
        self.total_deposits = new_deposits;

        Ok(())
    }

    /// Debit a withdrawal
    ///
    /// The balance may go negative; there is no funds check.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AnalyzerError> {
        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AnalyzerError::arithmetic_overflow("withdrawal", &self.account_number))?;

        let new_withdrawals = self
            .total_withdrawals
            .checked_add(amount)
            .ok_or_else(|| AnalyzerError::arithmetic_overflow("withdrawal", &self.account_number))?;

        self.balance = new_balance;
        self.total_withdrawals = new_withdrawals;

        Ok(())
    }
}

/// Output row for the account summaries report
#[derive(Debug, Serialize)]
pub struct AccountSummaryRow<'a> {
    pub account_number: &'a str,
    pub balance: Decimal,
    pub total_deposits: Decimal,
    pub total_withdrawals: Decimal,
}

impl<'a> From<&'a AccountSummary> for AccountSummaryRow<'a> {
    fn from(summary: &'a AccountSummary) -> Self {
        AccountSummaryRow {
            account_number: &summary.account_number,
            balance: summary.balance,
            total_deposits: summary.total_deposits,
            total_withdrawals: summary.total_withdrawals,
        }
    }
}
