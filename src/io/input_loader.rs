//! Input loading
//!
//! Reads a batch of transaction records from a CSV or JSON file. The format
//! is chosen from the file extension alone; the file contents are never
//! sniffed.
//!
//! # Formats
//!
//! - **CSV**: the first row names the fields, every later row becomes one
//!   record. All values stay text; numeric parsing is left to the aggregator.
//! - **JSON**: either an array of objects (one record per element) or a
//!   single object (one record). No schema is enforced at load time.
//!
//! # Error Handling
//!
//! - A missing input file is reported as `FileNotFound`
//! - Any extension other than `csv` or `json` is `UnsupportedFormat`
//! - Malformed content is `ParseError` (CSV) or `JsonError` (JSON)
//!
//! ```no_run
//! use transaction_analyzer::io::InputLoader;
//!
//! let loader = InputLoader::new("transactions.csv");
//! let records = loader.read_input_data().unwrap();
//! println!("Loaded {} records", records.len());
//! ```

use crate::types::{AnalyzerError, Record};
use csv::ReaderBuilder;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loader bound to a single input path
#[derive(Debug, Clone)]
pub struct InputLoader {
    path: PathBuf,
}

impl InputLoader {
    /// Create a loader for the given path
    ///
    /// The file is not opened until one of the `read_*` methods is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InputLoader { path: path.into() }
    }

    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Extension used to pick the input format
    ///
    /// Returns the text after the last `.` in the whole path, or an empty
    /// string if the path contains no `.`. Case is preserved, so `data.CSV`
    /// yields `"CSV"`.
    pub fn get_file_format(&self) -> String {
        self.path
            .to_string_lossy()
            .rsplit_once('.')
            .map(|(_, format)| format.to_string())
            .unwrap_or_default()
    }

    /// Read all records, dispatching on the file format
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The format is neither `csv` nor `json`
    /// - The file does not exist or cannot be read
    /// - The content is malformed, or a JSON record is not an object
    pub fn read_input_data(&self) -> Result<Vec<Record>, AnalyzerError> {
        let format = self.get_file_format();
        debug!("Input {} detected as '{}'", self.path.display(), format);

        let records = match format.as_str() {
            "csv" => self.read_csv_data()?,
            "json" => records_from_json(self.read_json_data()?)?,
            _ => return Err(AnalyzerError::unsupported_format(&format)),
        };

        info!("Loaded {} records from {}", records.len(), self.path.display());

        Ok(records)
    }

    /// Read records from a CSV file
    ///
    /// Field names come from the header row. A row shorter than the header
    /// produces a record without the trailing fields; values are not trimmed.
    pub fn read_csv_data(&self) -> Result<Vec<Record>, AnalyzerError> {
        let file = self.open()?;

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        let mut records = Vec::new();

        for row in reader.records() {
            let row = row?;
            records.push(headers.iter().zip(row.iter()).collect::<Record>());
        }

        Ok(records)
    }

    /// Parse the file as JSON and return the top-level value as-is
    pub fn read_json_data(&self) -> Result<Value, AnalyzerError> {
        let file = self.open()?;
        let value = serde_json::from_reader(BufReader::new(file))?;

        Ok(value)
    }

    fn open(&self) -> Result<File, AnalyzerError> {
        File::open(&self.path).map_err(|error| match error.kind() {
            ErrorKind::NotFound => AnalyzerError::file_not_found(&self.path.to_string_lossy()),
            _ => error.into(),
        })
    }
}

/// Convert parsed JSON into records
///
/// An array yields one record per element and every element must be an
/// object. A lone object yields a single record.
pub fn records_from_json(value: Value) -> Result<Vec<Record>, AnalyzerError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(Record::from_json_object(fields)),
                other => Err(AnalyzerError::invalid_record(
                    Some(index),
                    &format!("expected an object, found {}", json_kind(&other)),
                )),
            })
            .collect(),
        Value::Object(fields) => Ok(vec![Record::from_json_object(fields)]),
        other => Err(AnalyzerError::invalid_record(
            None,
            &format!("expected an array or object, found {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fields;
    use rstest::rstest;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FILE_CONTENTS: &str = "Transaction ID,Account number,Date,Transaction type,Amount,Currency,Description\n\
        1,1001,2023-03-01,deposit,1000,CAD,Salary\n\
        2,1002,2023-03-01,deposit,1500,CAD,Salary\n\
        3,1001,2023-03-02,withdrawal,200,CAD,Groceries";

    /// Helper function to create a temporary file with the given extension
    fn create_temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[rstest]
    #[case::csv("data/input.csv", "csv")]
    #[case::json("input.json", "json")]
    #[case::upper_case("INPUT.CSV", "CSV")]
    #[case::last_dot_wins("archive.2023.json", "json")]
    #[case::no_extension("input", "")]
    #[case::dot_in_directory("./data/input", "/data/input")]
    #[case::trailing_dot("input.", "")]
    fn test_get_file_format(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(InputLoader::new(path).get_file_format(), expected);
    }

    #[test]
    fn test_read_csv_data_preserves_rows_and_order() {
        let file = create_temp_file(".csv", FILE_CONTENTS);

        let records = InputLoader::new(file.path()).read_csv_data().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].text(fields::TRANSACTION_ID).unwrap(), "1");
        assert_eq!(records[1].text(fields::ACCOUNT_NUMBER).unwrap(), "1002");
        assert_eq!(records[2].text(fields::TRANSACTION_TYPE).unwrap(), "withdrawal");
        assert_eq!(records[2].text(fields::DESCRIPTION).unwrap(), "Groceries");
        assert_eq!(records[0].get(fields::AMOUNT), Some(&json!("1000")));
    }

    #[test]
    fn test_read_csv_data_keeps_values_untrimmed() {
        let file = create_temp_file(".csv", "Currency,Description\n XRP ,  spaced \n");

        let records = InputLoader::new(file.path()).read_csv_data().unwrap();

        assert_eq!(records[0].text(fields::CURRENCY).unwrap(), " XRP ");
    }

    #[test]
    fn test_read_csv_data_short_row_lacks_trailing_fields() {
        let file = create_temp_file(".csv", "Transaction ID,Amount,Currency\n1,50\n");

        let records = InputLoader::new(file.path()).read_csv_data().unwrap();

        assert_eq!(records[0].len(), 2);
        assert!(records[0].get(fields::CURRENCY).is_none());
    }

    #[test]
    fn test_read_csv_data_header_only() {
        let file = create_temp_file(".csv", "Transaction ID,Account number\n");

        let records = InputLoader::new(file.path()).read_csv_data().unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_read_csv_data_missing_file() {
        let result = InputLoader::new("nonexistent_input.csv").read_csv_data();

        assert_eq!(
            result.unwrap_err(),
            AnalyzerError::file_not_found("nonexistent_input.csv")
        );
    }

    #[test]
    fn test_read_json_data_returns_top_level_value() {
        let file = create_temp_file(".json", r#"{"Transaction ID": "1", "Amount": 25}"#);

        let value = InputLoader::new(file.path()).read_json_data().unwrap();

        assert_eq!(value, json!({"Transaction ID": "1", "Amount": 25}));
    }

    #[test]
    fn test_read_json_data_missing_file() {
        let result = InputLoader::new("nonexistent_input.json").read_json_data();

        assert!(matches!(result, Err(AnalyzerError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_json_data_malformed() {
        let file = create_temp_file(".json", "[{\"Amount\": 1},");

        let result = InputLoader::new(file.path()).read_json_data();

        assert!(matches!(result, Err(AnalyzerError::JsonError { .. })));
    }

    #[test]
    fn test_read_input_data_dispatches_to_csv() {
        let file = create_temp_file(".csv", FILE_CONTENTS);

        let records = InputLoader::new(file.path()).read_input_data().unwrap();

        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_read_input_data_dispatches_to_json() {
        let file = create_temp_file(
            ".json",
            r#"[
                {"Transaction ID": "1", "Account number": "1001", "Amount": 1000},
                {"Transaction ID": "2", "Account number": "1002", "Amount": "1500"}
            ]"#,
        );

        let records = InputLoader::new(file.path()).read_input_data().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get(fields::AMOUNT), Some(&json!(1000)));
        assert_eq!(records[1].text(fields::ACCOUNT_NUMBER).unwrap(), "1002");
    }

    #[rstest]
    #[case::txt(".txt")]
    #[case::upper_case_csv(".CSV")]
    #[case::no_extension("")]
    fn test_read_input_data_unsupported_format(#[case] suffix: &str) {
        let file = create_temp_file(suffix, FILE_CONTENTS);

        let result = InputLoader::new(file.path()).read_input_data();

        assert!(matches!(
            result,
            Err(AnalyzerError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_read_input_data_unsupported_format_checked_before_existence() {
        let result = InputLoader::new("does_not_exist.txt").read_input_data();

        assert_eq!(result.unwrap_err(), AnalyzerError::unsupported_format("txt"));
    }

    #[test]
    fn test_records_from_single_object() {
        let records = records_from_json(json!({"Transaction ID": "9"})).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].transaction_id().as_deref(), Some("9"));
    }

    #[rstest]
    #[case::scalar_element(json!([{"a": 1}, 5]), Some(1))]
    #[case::nested_array(json!([[1, 2]]), Some(0))]
    #[case::top_level_string(json!("records"), None)]
    #[case::top_level_null(json!(null), None)]
    fn test_records_from_json_rejects_non_objects(
        #[case] value: Value,
        #[case] expected_index: Option<usize>,
    ) {
        let result = records_from_json(value);

        assert!(matches!(
            result,
            Err(AnalyzerError::InvalidRecord { index, .. }) if index == expected_index
        ));
    }
}
