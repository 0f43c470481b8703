use std::fs;

use tempfile::TempDir;
use testdata_core::{
    DatasetError, GeneratorOptions, PREVIEW_LIMIT, generate_dataset, preview_dataset,
};

fn generated(dir: &TempDir, rows: u64) -> GeneratorOptions {
    let options = GeneratorOptions::default()
        .with_rows(rows)
        .with_output(dir.path().join("preview.csv"));
    generate_dataset(&options).expect("generate");
    options
}

#[test]
fn default_limit_stops_at_one_hundred_records() {
    let dir = TempDir::new().expect("tempdir");
    let options = generated(&dir, 10_000);
    let preview = preview_dataset(&options.output, PREVIEW_LIMIT).expect("preview");

    assert_eq!(preview.records.len(), 100);
    assert!(preview.truncated);
    assert_eq!(
        preview.headers.iter().collect::<Vec<_>>(),
        vec!["id", "name", "email", "amount", "status", "date"]
    );
    assert_eq!(preview.value(0, "name"), Some("User_1"));
    assert_eq!(preview.value(99, "id"), Some("100"));
    assert_eq!(preview.value(99, "status"), Some("active"));
    assert_eq!(preview.value(100, "id"), None);
    assert_eq!(preview.value(0, "missing"), None);
}

#[test]
fn small_file_is_not_truncated() {
    let dir = TempDir::new().expect("tempdir");
    let options = generated(&dir, 3);
    let preview = preview_dataset(&options.output, PREVIEW_LIMIT).expect("preview");

    assert_eq!(preview.records.len(), 3);
    assert!(!preview.truncated);
    assert_eq!(preview.value(2, "amount"), Some("103"));
    let size = fs::metadata(&options.output).expect("metadata").len();
    assert_eq!(preview.size_bytes, size);
}

#[test]
fn limit_equal_to_row_count_is_not_truncated() {
    let dir = TempDir::new().expect("tempdir");
    let options = generated(&dir, 5);
    let preview = preview_dataset(&options.output, 5).expect("preview");
    assert_eq!(preview.records.len(), 5);
    assert!(!preview.truncated);
}

#[test]
fn header_only_file_has_no_records() {
    let dir = TempDir::new().expect("tempdir");
    let options = generated(&dir, 0);
    let preview = preview_dataset(&options.output, 10).expect("preview");
    assert!(preview.records.is_empty());
    assert!(!preview.truncated);
    assert_eq!(preview.headers.len(), 6);
}

#[test]
fn blank_lines_are_skipped() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("blank.csv");
    fs::write(&path, "a,b\r\n1,2\r\n\r\n3,4\r\n").expect("write");
    let preview = preview_dataset(&path, 10).expect("preview");
    assert_eq!(preview.records.len(), 2);
    assert_eq!(preview.value(1, "b"), Some("4"));
}

#[test]
fn size_is_reported_in_kilobytes() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("kb.csv");
    fs::write(&path, format!("a\r\n{}\r\n", "x".repeat(2_043))).expect("write");
    let preview = preview_dataset(&path, 1).expect("preview");
    assert_eq!(preview.size_bytes, 2_048);
    assert_eq!(preview.size_kb(), "2.00 KB");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.csv");
    let err = preview_dataset(&path, 10).expect_err("should fail");
    assert!(matches!(err, DatasetError::Read { path: ref p, .. } if *p == path));
}

#[test]
fn ragged_record_is_a_read_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("ragged.csv");
    fs::write(&path, "a,b\r\n1,2\r\n3\r\n").expect("write");
    let err = preview_dataset(&path, 10).expect_err("should fail");
    assert!(matches!(err, DatasetError::Read { .. }));
}
