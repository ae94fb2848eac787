//! Input record type
//!
//! A [`Record`] is one transaction as it arrived from the input file: an
//! ordered mapping of field names to values. CSV rows only ever hold strings,
//! while JSON input may carry numbers, booleans or nested values. Records are
//! never rewritten after loading; numeric parsing happens on demand.

use crate::types::error::AnalyzerError;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::str::FromStr;

/// Well-known field names of a transaction record
pub mod fields {
    pub const TRANSACTION_ID: &str = "Transaction ID";
    pub const ACCOUNT_NUMBER: &str = "Account number";
    pub const DATE: &str = "Date";
    pub const TRANSACTION_TYPE: &str = "Transaction type";
    pub const AMOUNT: &str = "Amount";
    pub const CURRENCY: &str = "Currency";
    pub const DESCRIPTION: &str = "Description";

    /// All fields in report column order
    pub const ALL: [&str; 7] = [
        TRANSACTION_ID,
        ACCOUNT_NUMBER,
        DATE,
        TRANSACTION_TYPE,
        AMOUNT,
        CURRENCY,
        DESCRIPTION,
    ];
}

/// A single transaction record, fields kept in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Record { fields: Map::new() }
    }

    /// Wrap a JSON object as a record
    pub fn from_json_object(fields: Map<String, Value>) -> Self {
        Record { fields }
    }

    /// Insert or replace a field
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Raw value of a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Text rendering of a field
    ///
    /// Strings are returned verbatim, `null` renders as an empty string and
    /// every other value uses its compact JSON spelling.
    pub fn text(&self, field: &str) -> Option<Cow<'_, str>> {
        self.fields.get(field).map(value_text)
    }

    /// Text rendering of a field that must be present
    ///
    /// # Errors
    ///
    /// Returns `MissingField` naming the field and, when available, the
    /// record's transaction ID.
    pub fn require_text(&self, field: &str) -> Result<Cow<'_, str>, AnalyzerError> {
        self.text(field)
            .ok_or_else(|| AnalyzerError::missing_field(field, self.transaction_id()))
    }

    /// Transaction ID as text, if the record has one
    pub fn transaction_id(&self) -> Option<String> {
        self.text(fields::TRANSACTION_ID).map(Cow::into_owned)
    }

    /// Parse the `Amount` field
    ///
    /// # Errors
    ///
    /// - `MissingField` if the record has no `Amount`
    /// - `InvalidAmount` if the value is not a finite number
    /// - `AmountOutOfRange` if the number is too large for a `Decimal`
    pub fn amount(&self) -> Result<Decimal, AnalyzerError> {
        let raw = self.require_text(fields::AMOUNT)?;

        let parsed = match self.get(fields::AMOUNT) {
            Some(Value::String(_)) | Some(Value::Number(_)) => parse_amount(&raw),
            _ => Err(AmountParseError::NotANumber),
        };

        parsed.map_err(|error| match error {
            AmountParseError::NotANumber => {
                AnalyzerError::invalid_amount(&raw, self.transaction_id())
            }
            AmountParseError::OutOfRange => {
                AnalyzerError::amount_out_of_range(&raw, self.transaction_id())
            }
        })
    }

    /// Iterate over fields in input order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

/// Smallest magnitude a `Decimal` cannot hold (2^96)
const DECIMAL_MAGNITUDE_LIMIT: f64 = 79_228_162_514_264_337_593_543_950_336.0;

/// Smallest non-zero magnitude at the maximum scale of 28
const DECIMAL_MIN_POSITIVE: f64 = 1e-28;

/// Why amount text did not yield a `Decimal`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountParseError {
    /// Not a finite number at all
    NotANumber,
    /// A finite number whose magnitude is at least 2^96
    OutOfRange,
}

/// Parse amount text as a decimal
///
/// Surrounding whitespace is ignored. Plain notation is tried first, then
/// scientific notation (`1.5e4`). Anything else a float parser accepts is
/// rounded into `Decimal` range: magnitudes below `1e-28` become zero and
/// magnitudes of 2^96 or more are `OutOfRange`. `NaN` and infinity
/// spellings are `NotANumber`.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountParseError> {
    let trimmed = raw.trim();
    if let Ok(amount) = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        return Ok(amount);
    }

    let value: f64 = trimmed.parse().map_err(|_| AmountParseError::NotANumber)?;
    if value.is_nan() || is_infinity_spelling(trimmed) {
        return Err(AmountParseError::NotANumber);
    }

    // 1e400 overflows f64 to infinity and lands here too
    if value.abs() >= DECIMAL_MAGNITUDE_LIMIT {
        return Err(AmountParseError::OutOfRange);
    }
    if value.abs() < DECIMAL_MIN_POSITIVE {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_f64(value).ok_or(AmountParseError::OutOfRange)
}

fn is_infinity_spelling(text: &str) -> bool {
    let unsigned = text.trim_start_matches(|c: char| c == '+' || c == '-');
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
