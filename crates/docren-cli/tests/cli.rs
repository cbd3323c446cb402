//! End-to-end tests for the docren binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const RECEIPT: &str = "Acme Corp\nInvoice: A1-998\nDate 04/12/2023\nTotal $1,250.00";

fn receipt_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(RECEIPT.as_bytes()).unwrap();
    file
}

#[test]
fn suggest_composes_receipt_name() {
    let input = receipt_file();

    Command::cargo_bin("docren")
        .unwrap()
        .arg("suggest")
        .arg(input.path())
        .args(["--components", "vendor,date,amount"])
        .args(["--original-name", "scan.PDF"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Acme_Corp_04-12-2023_USD-1250.00.pdf",
        ));
}

#[test]
fn suggest_json_includes_metadata() {
    let input = receipt_file();

    let output = Command::cargo_bin("docren")
        .unwrap()
        .arg("suggest")
        .arg(input.path())
        .args(["--components", "date,vendor"])
        .args(["--original-name", "scan.pdf"])
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["metadata"]["vendor"], "Acme_Corp");
    assert_eq!(response["metadata"]["invoice_number"], "A1-998");
    assert_eq!(response["original_name"], "scan.pdf");
    assert_eq!(
        response["suggested_name"],
        "04-12-2023_Acme_Corp.pdf"
    );
}

#[test]
fn suggest_promotes_search_match() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Vendor Co\nREF 12345-6789 extra\nDate 04/12/2023")
        .unwrap();

    Command::cargo_bin("docren")
        .unwrap()
        .arg("suggest")
        .arg(file.path())
        .args(["--components", "date"])
        .args(["--search", "12345"])
        .args(["--original-name", "scan.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12345-6789_04-12-2023.png"));
}

#[test]
fn suggest_missing_input_fails() {
    Command::cargo_bin("docren")
        .unwrap()
        .arg("suggest")
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn plan_reports_percentages() {
    Command::cargo_bin("docren")
        .unwrap()
        .args(["plan", "--components", "amount"])
        .assert()
        .success()
        .stdout("90\n");

    Command::cargo_bin("docren")
        .unwrap()
        .arg("plan")
        .assert()
        .success()
        .stdout("50\n");
}

#[test]
fn suggest_uses_configured_separator() {
    let input = receipt_file();
    let mut config = tempfile::NamedTempFile::new().unwrap();
    config
        .write_all(br#"{"default_separator": "-"}"#)
        .unwrap();

    // No --separator on the command line: the configured one must apply.
    Command::cargo_bin("docren")
        .unwrap()
        .args(["--config", config.path().to_str().unwrap()])
        .arg("suggest")
        .arg(input.path())
        .args(["--components", "vendor,date"])
        .args(["--original-name", "scan.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme_Corp-04-12-2023.pdf"));

    // An explicit --separator still wins over the configured one.
    Command::cargo_bin("docren")
        .unwrap()
        .args(["--config", config.path().to_str().unwrap()])
        .arg("suggest")
        .arg(input.path())
        .args(["--components", "vendor,date"])
        .args(["--separator", "."])
        .args(["--original-name", "scan.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme_Corp.04-12-2023.pdf"));
}

#[test]
fn config_init_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("docren.json");

    Command::cargo_bin("docren")
        .unwrap()
        .args(["config", "init"])
        .arg(&config_path)
        .assert()
        .success();

    Command::cargo_bin("docren")
        .unwrap()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("placeholder_vendor"))
        .stdout(predicate::str::contains("OCR_Scan"));
}

#[test]
fn plan_full_scan_overrides_heuristic() {
    Command::cargo_bin("docren")
        .unwrap()
        .args(["plan", "--components", "vendor", "--full-scan"])
        .assert()
        .success()
        .stdout("100\n");
}
