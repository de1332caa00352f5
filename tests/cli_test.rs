//! Command-line behaviour of the `email_adder` binary.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_batch_failure_reported_once() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("people.csv");
    fs::write(&input, "").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_email_adder"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(["--color", "false", "process"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("is empty").count(), 1, "{stderr}");
    assert!(stderr.contains("Batch failed"), "{stderr}");
    assert!(!temp.path().join("people_processed.csv").exists());
}
