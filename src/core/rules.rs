//! Suspicious transaction rules
//!
//! A transaction is suspicious when its amount is strictly above the large
//! transaction threshold, or when its currency is on the uncommon list. The
//! two rules are OR-ed; there is no scoring or severity.

use rust_decimal::Decimal;

/// Amount above which a transaction is flagged
pub const LARGE_TRANSACTION_THRESHOLD: i64 = 10_000;

/// Currencies flagged regardless of amount
pub const UNCOMMON_CURRENCIES: [&str; 2] = ["XRP", "LTC"];

/// Configurable suspicion rules
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionRules {
    pub large_transaction_threshold: Decimal,
    pub uncommon_currencies: Vec<String>,
}

impl Default for DetectionRules {
    fn default() -> Self {
        DetectionRules {
            large_transaction_threshold: Decimal::from(LARGE_TRANSACTION_THRESHOLD),
            uncommon_currencies: UNCOMMON_CURRENCIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl DetectionRules {
    pub fn new(large_transaction_threshold: Decimal, uncommon_currencies: Vec<String>) -> Self {
        DetectionRules {
            large_transaction_threshold,
            uncommon_currencies,
        }
    }

    /// Exact, case-sensitive currency match
    pub fn is_uncommon_currency(&self, currency: &str) -> bool {
        self.uncommon_currencies.iter().any(|c| c == currency)
    }

    pub fn is_large_amount(&self, amount: Decimal) -> bool {
        amount > self.large_transaction_threshold
    }

    pub fn is_suspicious(&self, amount: Decimal, currency: &str) -> bool {
        self.is_large_amount(amount) || self.is_uncommon_currency(currency)
    }
}
