//! Integration tests for the pour CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a pour command with a clean environment
fn pour() -> Command {
    let mut cmd = Command::cargo_bin("pour").unwrap();
    cmd.env_remove("POUR_FORMAT")
        .env_remove("POUR_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to get the default parameter record from `pour template`
fn template_json(project_type: &str) -> String {
    let output = pour()
        .args(["template", "--project-type", project_type])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

/// Helper to write a parameter file into a temp directory
fn write_params(tmp: &TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

/// Driveway template with one field replaced
fn driveway_with(pointer: &str, value: serde_json::Value) -> String {
    let mut params: serde_json::Value = serde_json::from_str(&template_json("driveway")).unwrap();
    *params.pointer_mut(pointer).unwrap() = value;
    params.to_string()
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    pour()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("estimate"))
        .stdout(predicate::str::contains("interactive"))
        .stdout(predicate::str::contains("template"));
}

#[test]
fn test_version_displays() {
    pour()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pour"));
}

#[test]
fn test_unknown_subcommand_fails() {
    pour().arg("pave").assert().failure();
}

// ============================================================================
// Template Tests
// ============================================================================

#[test]
fn test_template_prints_form_defaults() {
    pour()
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"project_type\": \"driveway\""))
        .stdout(predicate::str::contains("\"square_footage\": 400.0"))
        .stdout(predicate::str::contains("\"thickness\": 4"))
        .stdout(predicate::str::contains("\"urgency_level\": 5"));
}

#[test]
fn test_template_accepts_labels() {
    pour()
        .args(["template", "-t", "pool deck"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"poolDeck\""));
}

#[test]
fn test_template_rejects_unknown_type() {
    pour()
        .args(["template", "-t", "barn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project_type"));
}

// ============================================================================
// Estimate Tests
// ============================================================================

#[test]
fn test_estimate_text_report() {
    let tmp = TempDir::new().unwrap();
    let path = write_params(&tmp, "driveway.json", &template_json("driveway"));

    pour()
        .arg("estimate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost Breakdown"))
        .stdout(predicate::str::contains("Markup (30%)"))
        .stdout(predicate::str::contains("$4,160.00"))
        .stdout(predicate::str::contains("5.5 cubic yards"))
        .stdout(predicate::str::contains("- Concrete Tools"))
        .stdout(predicate::str::contains("Recommended concrete strength: 3000 PSI for driveway"));
}

#[test]
fn test_estimate_json_output() {
    let tmp = TempDir::new().unwrap();
    let path = write_params(&tmp, "rush.json", &driveway_with("/urgency_level", 10.into()));

    let output = pour()
        .args(["--format", "json", "estimate"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["costs"]["total"], 6240.0);
    assert_eq!(result["labor_hours"], 4);
    assert_eq!(result["estimated_duration_days"], 1);
    assert_eq!(result["equipment_needed"][0], "Concrete Tools");
    assert_eq!(result["parameters"]["urgency_level"], 10);
}

#[test]
fn test_estimate_from_stdin() {
    pour()
        .args(["estimate", "-"])
        .write_stdin(template_json("patio"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Total"));
}

#[test]
fn test_format_from_environment() {
    pour()
        .env("POUR_FORMAT", "json")
        .args(["estimate", "-"])
        .write_stdin(template_json("driveway"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"material_quantities\""));
}

#[test]
fn test_invalid_input_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_params(&tmp, "bad.json", &driveway_with("/urgency_level", 11.into()));

    pour()
        .arg("estimate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("urgency_level"));
}

#[test]
fn test_invalid_input_json_error() {
    let json = driveway_with("/dimensions/length_ft", (-5.0).into());

    pour()
        .args(["--format", "json", "estimate", "-"])
        .write_stdin(json)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"InvalidInput\""))
        .stdout(predicate::str::contains("dimensions.length_ft"));
}

#[test]
fn test_malformed_json_is_rejected() {
    pour()
        .args(["--format", "json", "estimate", "-"])
        .write_stdin("{ \"project_type\": ")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"Serialization\""));
}

#[test]
fn test_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    pour()
        .arg("estimate")
        .arg(tmp.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// ============================================================================
// Config and Logging Tests
// ============================================================================

#[test]
fn test_config_file_sets_currency_and_format() {
    let tmp = TempDir::new().unwrap();
    let config = write_params(&tmp, "pour.json", r#"{ "currency_symbol": "USD " }"#);

    pour()
        .args(["estimate", "-", "--config"])
        .arg(&config)
        .write_stdin(template_json("driveway"))
        .assert()
        .success()
        .stdout(predicate::str::contains("USD 4,160.00"));

    let config = write_params(&tmp, "json.json", r#"{ "format": "json" }"#);
    pour()
        .env("POUR_CONFIG", &config)
        .args(["estimate", "-"])
        .write_stdin(template_json("driveway"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"recommendations\""));
}

#[test]
fn test_verbose_logs_to_stderr() {
    pour()
        .args(["-v", "estimate", "-"])
        .write_stdin(template_json("driveway"))
        .assert()
        .success()
        .stdout(predicate::str::contains("estimate computed").not())
        .stderr(predicate::str::contains("estimate computed"));
}

// ============================================================================
// Interactive and Completions Tests
// ============================================================================

#[test]
fn test_interactive_requires_terminal() {
    pour()
        .args(["--format", "json", "interactive"])
        .write_stdin("patio\n30\n20\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("needs a terminal"));
}

#[test]
fn test_completions_bash() {
    pour()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pour"));
}
