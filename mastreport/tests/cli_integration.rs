//! Integration tests for mastreport CLI

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

const SAMPLE_CSV: &str = "Property Name,Property Address,Unit Name,Tenant Name,\
Lease Start Date,Lease End Date,Lease Years,Current Rent\n\
Farmhouse 2,Field X,Unit 2,CellWorks Ltd,29 Apr 2008,28 Apr 2018,10,700,\n\
Farmhouse 1,Field Y,Unit 1,CellWorks Ltd,29 Apr 2002,28 Apr 2020,15,500,\n\
Farmhouse 3,Field Z,Unit 3,CellWorks Ltd,01 Dec 2019,01 Dec 2021,15,999.99,\n";

fn sample_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sample_phone_masts.csv");
    fs::write(&path, contents).expect("Failed to write sample file");
    (dir, path)
}

fn run_mastreport(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_mastreport"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn run_on_sample(args: &[&str]) -> (String, String, bool) {
    let (_dir, path) = sample_file(SAMPLE_CSV);
    let path = path.to_string_lossy().to_string();
    let mut all_args = vec![path.as_str()];
    all_args.extend(args);
    run_mastreport(&all_args)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_mastreport(&["--help"]);

    assert!(success);
    assert!(stdout.contains("mastreport"));
    assert!(stdout.contains("--top-rents"));
    assert!(stdout.contains("--lease-years"));
    assert!(stdout.contains("--tenants"));
    assert!(stdout.contains("--lease-starting-range"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_mastreport(&["--version"]);

    assert!(success);
    assert!(stdout.contains("mastreport"));
}

#[test]
fn test_missing_file_fails() {
    let (stdout, stderr, success) =
        run_mastreport(&["./invalid_non_existent_file_foobar.csv", "--tenants"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("not found"));
}

#[test]
fn test_no_query_warns_and_prints_nothing() {
    let (stdout, stderr, success) = run_on_sample(&[]);

    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("No query options were selected"));
}

#[test]
fn test_top_rents_table() {
    let (stdout, _, success) = run_on_sample(&["--top-rents", "1"]);

    assert!(success);
    assert_eq!(
        stdout,
        "\nProperty Name    Unit Name    Tenant Name      Current Rent\n\
         ---------------  -----------  -------------  --------------\n\
         Farmhouse 1      Unit 1       CellWorks Ltd             500\n\n"
    );
}

#[test]
fn test_top_rents_descending() {
    let (stdout, _, success) = run_on_sample(&["-r", "2", "--descending"]);

    assert!(success);
    let farm3 = stdout.find("Farmhouse 3").expect("highest rent missing");
    let farm2 = stdout.find("Farmhouse 2").expect("second highest missing");
    assert!(farm3 < farm2);
    assert!(!stdout.contains("Farmhouse 1"));
}

#[test]
fn test_lease_years_with_total() {
    let (stdout, _, success) = run_on_sample(&["--lease-years", "15"]);

    assert!(success);
    assert!(stdout.contains("Property Address"));
    assert!(stdout.contains("Farmhouse 1"));
    assert!(stdout.contains("Farmhouse 3"));
    assert!(!stdout.contains("Farmhouse 2"));
    assert!(stdout.contains("Total Rent"));
    assert!(stdout.contains("1499.99"));
}

#[test]
fn test_lease_years_no_match() {
    let (stdout, _, success) = run_on_sample(&["--lease-years", "99"]);

    assert!(success);
    assert!(stdout.contains("Lease Years"));
    assert!(stdout.contains("Total Rent"));
    assert!(!stdout.contains("Farmhouse"));
}

#[test]
fn test_tenants() {
    let (stdout, _, success) = run_on_sample(&["--tenants"]);

    assert!(success);
    assert!(stdout.contains("Number of Masts"));
    assert_eq!(stdout.matches("CellWorks Ltd").count(), 1);
    assert!(stdout.contains("3"));
}

#[test]
fn test_lease_starting_range() {
    let (stdout, _, success) =
        run_on_sample(&["--lease-starting-range", "2000-01-30", "2010-12-31"]);

    assert!(success);
    assert!(stdout.contains("29/04/2008"));
    assert!(stdout.contains("29/04/2002"));
    assert!(stdout.contains("28/04/2020"));
    assert!(!stdout.contains("01/12/2019"));
    assert!(!stdout.contains("29 Apr 2008"));
}

#[test]
fn test_bad_range_fails() {
    let (_, stderr, success) =
        run_on_sample(&["--lease-starting-range", "2000-01-30", "31 Dec 2010"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("31 Dec 2010"));
}

#[test]
fn test_bad_rent_fails() {
    let csv = SAMPLE_CSV.replace("999.99", "lots");
    let (_dir, path) = sample_file(&csv);
    let (_, stderr, success) = run_mastreport(&[path.to_str().unwrap(), "--top-rents", "1"]);

    assert!(!success);
    assert!(stderr.contains("line 4"));
    assert!(stderr.contains("lots"));
}

#[test]
fn test_multiple_queries_in_order() {
    let (stdout, _, success) = run_on_sample(&["--tenants", "--top-rents", "3"]);

    assert!(success);
    let rents = stdout.find("Current Rent").expect("rent table missing");
    let tenants = stdout.find("Number of Masts").expect("tenant table missing");
    assert!(rents < tenants);
}

#[test]
fn test_json_output() {
    let (stdout, _, success) = run_on_sample(&["--lease-years", "10", "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let sections = parsed.as_array().expect("expected an array of sections");
    assert_eq!(sections.len(), 1);
    assert!(sections[0]["title"].as_str().unwrap().contains("10 years"));
    assert_eq!(sections[0]["tables"][0]["rows"][0][0], "Farmhouse 2");
    assert_eq!(sections[0]["tables"][1]["headers"][0], "Total Rent");
    assert_eq!(sections[0]["tables"][1]["rows"][0][0], "700");
}

#[test]
fn test_logs_go_to_stderr() {
    let (stdout, stderr, success) = run_on_sample(&["--tenants"]);

    assert!(success);
    assert!(stderr.contains("Tenants and the number of masts"));
    assert!(!stdout.contains("INFO"));
}
