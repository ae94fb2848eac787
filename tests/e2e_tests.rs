//! End-to-end integration tests
//!
//! These tests validate the complete load, aggregate and report pipeline
//! using predefined test fixtures. Each test:
//! 1. Reads input.csv or input.json from a fixture directory
//! 2. Runs the pipeline with reports directed into a temporary directory
//! 3. Compares each report with the fixture's expected_*.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path scenarios in CSV and JSON
//! - Suspicious transaction boundaries
//! - Decimal precision
//! - Empty and single-object inputs
//!
//! Malformed inputs are generated on the fly and must fail the whole run.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process::Command;
    use tempfile::TempDir;
    use transaction_analyzer::pipeline::{PipelineConfig, ReportPaths, ReportPipeline};
    use transaction_analyzer::types::AnalyzerError;

    const REPORTS: [(&str, &str); 3] = [
        ("accounts.csv", "expected_accounts.csv"),
        ("suspicious.csv", "expected_suspicious.csv"),
        ("statistics.csv", "expected_statistics.csv"),
    ];

    fn report_paths(dir: &Path) -> ReportPaths {
        ReportPaths {
            accounts: dir.join(REPORTS[0].0),
            suspicious: dir.join(REPORTS[1].0),
            statistics: dir.join(REPORTS[2].0),
        }
    }

    fn fixture_input(fixture_dir: &Path) -> PathBuf {
        let csv = fixture_dir.join("input.csv");
        if csv.exists() {
            csv
        } else {
            fixture_dir.join("input.json")
        }
    }

    /// Run a fixture and return the output directory holding its reports
    ///
    /// # Panics
    ///
    /// Panics if the fixture input is missing or the pipeline fails.
    fn run_fixture(fixture_name: &str) -> TempDir {
        let fixture_dir = Path::new("tests/fixtures").join(fixture_name);
        let input_path = fixture_input(&fixture_dir);

        assert!(
            input_path.exists(),
            "Input file not found: {}",
            input_path.display()
        );

        let output_dir = TempDir::new().expect("Failed to create temp dir");
        let mut config = PipelineConfig::new(&input_path);
        config.reports = report_paths(output_dir.path());

        ReportPipeline::new(config)
            .run()
            .unwrap_or_else(|e| panic!("Failed to process {}: {}", fixture_name, e));

        output_dir
    }

    /// End-to-end test comparing every report with its expected file
    #[rstest]
    #[case("happy_path")]
    #[case("json_input")]
    #[case("suspicious_rules")]
    #[case("decimal_precision")]
    #[case("empty_input")]
    #[case("json_single_object")]
    fn test_fixtures(#[case] fixture: &str) {
        let output_dir = run_fixture(fixture);
        let fixture_dir = Path::new("tests/fixtures").join(fixture);

        for (actual_name, expected_name) in REPORTS {
            let actual_output = fs::read_to_string(output_dir.path().join(actual_name))
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", actual_name, e));
            let expected_path = fixture_dir.join(expected_name);
            let expected_output = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                panic!("Failed to read expected file {}: {}", expected_path.display(), e)
            });

            assert_eq!(
                actual_output, expected_output,
                "\n\nOutput mismatch for fixture: {} ({})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
                fixture, expected_name, actual_output, expected_output
            );
        }
    }

    #[test]
    fn test_csv_and_json_inputs_produce_identical_reports() {
        let from_csv = run_fixture("happy_path");
        let from_json = run_fixture("json_input");

        for (report, _) in REPORTS {
            assert_eq!(
                fs::read_to_string(from_csv.path().join(report)).unwrap(),
                fs::read_to_string(from_json.path().join(report)).unwrap(),
                "{} differs between CSV and JSON input",
                report
            );
        }
    }

    fn run_generated(file_name: &str, content: &str) -> (TempDir, Result<(), AnalyzerError>) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join(file_name);
        fs::write(&input, content).unwrap();

        let mut config = PipelineConfig::new(&input);
        config.reports = report_paths(dir.path());

        let result = ReportPipeline::new(config).run().map(|_| ());
        (dir, result)
    }

    #[rstest]
    #[case::invalid_amount(
        "input.csv",
        "Transaction ID,Account number,Date,Transaction type,Amount,Currency,Description\n\
         1,1001,2023-03-01,deposit,abc,CAD,Salary\n"
    )]
    #[case::amount_beyond_decimal_range(
        "input.csv",
        "Transaction ID,Account number,Date,Transaction type,Amount,Currency,Description\n\
         1,1001,2023-03-01,deposit,1e400,CAD,Salary\n"
    )]
    #[case::missing_account(
        "input.csv",
        "Transaction ID,Date,Transaction type,Amount,Currency,Description\n\
         1,2023-03-01,deposit,100,CAD,Salary\n"
    )]
    #[case::json_scalar_in_array("input.json", r#"[{"Amount": "1"}, 42]"#)]
    #[case::malformed_json("input.json", r#"[{"Amount": "1""#)]
    #[case::unsupported_format("input.xml", "<transactions/>")]
    fn test_malformed_input_fails_without_reports(#[case] file_name: &str, #[case] content: &str) {
        let (dir, result) = run_generated(file_name, content);

        assert!(result.is_err(), "expected failure for {}", file_name);
        for (report, _) in REPORTS {
            assert!(!dir.path().join(report).exists(), "{} was written", report);
        }
    }

    #[test]
    fn test_missing_amount_error_names_transaction() {
        let (_dir, result) = run_generated(
            "input.json",
            r#"[{"Transaction ID": "T-7", "Account number": "1001", "Transaction type": "deposit"}]"#,
        );

        assert_eq!(
            result,
            Err(AnalyzerError::missing_field("Amount", Some("T-7".to_string())))
        );
    }

    fn analyzer() -> Command {
        Command::new(env!("CARGO_BIN_EXE_transaction-analyzer"))
    }

    #[test]
    fn test_cli_writes_reports_and_prints_summary() {
        let output_dir = TempDir::new().unwrap();
        let paths = report_paths(output_dir.path());

        let output = analyzer()
            .arg("tests/fixtures/happy_path/input.csv")
            .arg("--accounts")
            .arg(&paths.accounts)
            .arg("--suspicious")
            .arg(&paths.suspicious)
            .arg("--statistics")
            .arg(&paths.statistics)
            .output()
            .expect("Failed to run binary");

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Processed 7 records: 3 accounts, 3 suspicious transactions"));
        assert!(stdout.contains("deposit: 4 transactions"));
        assert!(stdout.contains("withdrawal: 3 transactions, average amount 450.25"));

        assert_eq!(
            fs::read_to_string(&paths.statistics).unwrap(),
            fs::read_to_string("tests/fixtures/happy_path/expected_statistics.csv").unwrap()
        );
    }

    #[test]
    fn test_cli_applies_rule_overrides() {
        let output_dir = TempDir::new().unwrap();
        let paths = report_paths(output_dir.path());

        let status = analyzer()
            .arg("tests/fixtures/happy_path/input.csv")
            .args(["--threshold", "2000", "--uncommon-currency", "CAD"])
            .arg("--accounts")
            .arg(&paths.accounts)
            .arg("--suspicious")
            .arg(&paths.suspicious)
            .arg("--statistics")
            .arg(&paths.statistics)
            .status()
            .expect("Failed to run binary");

        assert!(status.success());
        let suspicious = fs::read_to_string(&paths.suspicious).unwrap();
        let ids: Vec<&str> = suspicious
            .lines()
            .skip(1)
            .filter_map(|line| line.split(',').next())
            .collect();
        // XRP and LTC are no longer uncommon and neither of those amounts exceeds 2000
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_cli_reports_error_and_exits_with_failure() {
        let output = analyzer()
            .arg("tests/fixtures/does_not_exist.csv")
            .output()
            .expect("Failed to run binary");

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.starts_with("Error: "), "stderr was: {}", stderr);
    }
}
