//! Integration tests for file-based CSV column transforms.

use std::fs;

use textudf_cli::apply::{DEFAULT_NULL_TOKEN, OutputFormat, apply_values, write_results};
use textudf_cli::csv_column::{CsvOptions, transform_csv_file};
use textudf_transform::Operation;

#[test]
fn transforms_file_with_custom_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("customers.csv");
    let output = dir.path().join("customers_masked.csv");
    fs::write(
        &input,
        "id;phone\n1;555-123-4567\n2;n/a\n3;\n",
    )
    .unwrap();

    let options = CsvOptions::new("phone", Operation::MaskPhone).with_delimiter(b';');
    let summary = transform_csv_file(&input, Some(&output), &options).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "id;phone\n1;******4567\n2;n/a\n3;\n"
    );
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.changed, 1);
    assert_eq!(summary.null_inputs, 1);
}

#[test]
fn validation_column_alongside_source() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("emails.csv");
    let output = dir.path().join("emails_checked.csv");
    fs::write(&input, "email\nuser@example.com\ninvalid-email\n").unwrap();

    let options = CsvOptions::new("email", Operation::ValidateEmail)
        .with_target(Some("email_status".to_string()));
    transform_csv_file(&input, Some(&output), &options).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "email,email_status\nuser@example.com,valid\ninvalid-email,invalid\n"
    );
}

#[test]
fn missing_input_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.csv");

    let options = CsvOptions::new("name", Operation::Clean);
    let error = transform_csv_file(&input, None, &options).unwrap_err();

    assert!(error.to_string().contains("absent.csv"));
}

#[test]
fn apply_values_json_output() {
    let results = apply_values(
        Some(Operation::ExtractNumbers),
        ["Order123Items456", "none", DEFAULT_NULL_TOKEN],
        DEFAULT_NULL_TOKEN,
    );
    let mut buffer = Vec::new();
    write_results(&results, OutputFormat::Json, DEFAULT_NULL_TOKEN, &mut buffer).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"input": "Order123Items456", "output": "123456"},
            {"input": "none", "output": null},
            {"input": null, "output": null},
        ])
    );
}

#[test]
fn apply_values_without_operation_cleans() {
    let results = apply_values(None, ["  grace   HOPPER "], DEFAULT_NULL_TOKEN);
    assert_eq!(results[0].output.as_deref(), Some("Grace Hopper"));
}
