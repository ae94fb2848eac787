//! Error types for the transaction analyzer
//!
//! This module defines every error that can stop a processing run.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, unsupported extension, permission denied
//! - **Parsing Errors**: Malformed CSV or JSON, records that are not objects
//! - **Record Errors**: Non-numeric amounts, missing fields
//! - **Aggregation Errors**: Unknown transaction types, arithmetic overflow
//!
//! None of these are recoverable within a run: the first one aborts processing
//! and is handed back to the caller.

use thiserror::Error;

/// Main error type for the transaction analyzer
///
/// Each variant carries enough context to point the user at the offending
/// file, record or field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzerError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// Input file extension is neither `csv` nor `json`
    #[error("Unsupported file format '{format}': please provide a .csv or .json file")]
    UnsupportedFormat {
        /// The detected extension (may be empty)
        format: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// JSON input could not be parsed
    #[error("JSON parse error: {message}")]
    JsonError {
        /// Description of the parsing error
        message: String,
    },

    /// JSON input parsed, but a record in it is not an object
    #[error("Invalid record{}: {message}", index.map(|i| format!(" at index {}", i)).unwrap_or_default())]
    InvalidRecord {
        /// Position of the record in the top-level array (None for the top-level value itself)
        index: Option<usize>,
        /// What was found instead
        message: String,
    },

    /// Amount field could not be parsed as a number
    #[error("Invalid amount '{amount}'{}", transaction_id.as_ref().map(|t| format!(" for transaction {}", t)).unwrap_or_default())]
    InvalidAmount {
        /// The raw amount text
        amount: String,
        /// Transaction ID (if the record has one)
        transaction_id: Option<String>,
    },

    /// Amount is a number, but its magnitude does not fit a Decimal (at least 2^96)
    #[error("Amount '{amount}'{} is too large to represent", transaction_id.as_ref().map(|t| format!(" in transaction {}", t)).unwrap_or_default())]
    AmountOutOfRange {
        /// The raw amount text
        amount: String,
        /// Transaction ID (if the record has one)
        transaction_id: Option<String>,
    },

    /// A record lacks a field that processing or output requires
    #[error("Missing field '{field}'{}", transaction_id.as_ref().map(|t| format!(" in transaction {}", t)).unwrap_or_default())]
    MissingField {
        /// Name of the absent field
        field: String,
        /// Transaction ID (if the record has one)
        transaction_id: Option<String>,
    },

    /// Statistics were requested for a transaction type that was never recorded
    #[error("Unknown transaction type '{transaction_type}'")]
    UnknownType {
        /// The requested transaction type
        transaction_type: String,
    },

    /// Decimal arithmetic would overflow
    #[error("Arithmetic overflow in {operation} for '{key}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number or transaction type being updated
        key: String,
    },
}

// Conversion from io::Error to AnalyzerError
impl From<std::io::Error> for AnalyzerError {
    fn from(error: std::io::Error) -> Self {
        AnalyzerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to AnalyzerError
impl From<csv::Error> for AnalyzerError {
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_error) = error.kind() {
            return AnalyzerError::IoError {
                message: io_error.to_string(),
            };
        }

        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        AnalyzerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to AnalyzerError
impl From<serde_json::Error> for AnalyzerError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return AnalyzerError::IoError {
                message: error.to_string(),
            };
        }

        AnalyzerError::JsonError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AnalyzerError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        AnalyzerError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an UnsupportedFormat error
    pub fn unsupported_format(format: &str) -> Self {
        AnalyzerError::UnsupportedFormat {
            format: format.to_string(),
        }
    }

    /// Create an InvalidRecord error
    pub fn invalid_record(index: Option<usize>, message: &str) -> Self {
        AnalyzerError::InvalidRecord {
            index,
            message: message.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, transaction_id: Option<String>) -> Self {
        AnalyzerError::InvalidAmount {
            amount: amount.to_string(),
            transaction_id,
        }
    }

    /// Create an AmountOutOfRange error
    pub fn amount_out_of_range(amount: &str, transaction_id: Option<String>) -> Self {
        AnalyzerError::AmountOutOfRange {
            amount: amount.to_string(),
            transaction_id,
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: &str, transaction_id: Option<String>) -> Self {
        AnalyzerError::MissingField {
            field: field.to_string(),
            transaction_id,
        }
    }

    /// Create an UnknownType error
    pub fn unknown_type(transaction_type: &str) -> Self {
        AnalyzerError::UnknownType {
            transaction_type: transaction_type.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, key: &str) -> Self {
        AnalyzerError::ArithmeticOverflow {
            operation: operation.to_string(),
            key: key.to_string(),
        }
    }
}
