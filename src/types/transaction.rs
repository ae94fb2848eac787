//! Transaction-related types
//!
//! Transaction types are free-form text in the input. Only `deposit` and
//! `withdrawal` move account balances; every other value is carried through
//! to the statistics unchanged.

/// Account identifier as written in the input
pub type AccountNumber = String;

/// How a transaction type affects account balances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit funds to an account
    ///
    /// Increases the balance and the deposit total.
    Deposit,

    /// Debit funds from an account
    ///
    /// Decreases the balance and increases the withdrawal total.
    Withdrawal,

    /// Any other transaction type
    ///
    /// Counted in statistics but leaves balances untouched.
    Other,
}

impl TransactionKind {
    /// Classify a raw transaction type
    ///
    /// Matching is exact and case-sensitive: `"Deposit"` is `Other`.
    pub fn classify(transaction_type: &str) -> Self {
        match transaction_type {
            "deposit" => TransactionKind::Deposit,
            "withdrawal" => TransactionKind::Withdrawal,
            _ => TransactionKind::Other,
        }
    }
}
