//! Integration tests for CLI commands.

use std::process::Command;
use tempfile::TempDir;

const CATALOG: &str = r#"
Vehicle:
  type: branch
  description: High-level vehicle data.
  children:
    Speed:
      type: signal
      datatype: float
      unit: km/h
      min: 0
      max: 300
      description: Vehicle speed.
    Gear:
      type: signal
      datatype: string
      allowed: ["P", "R", "N", "D"]
      description: Current gear.
"#;

fn write_catalog(dir: &TempDir, name: &str, text: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path.to_string_lossy().to_string()
}

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new("cargo")
        .args(["run", "--bin", "sigcat", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

#[test]
fn test_export_writes_mapping() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "catalog.yaml", CATALOG);
    let out = temp_dir.path().join("uids.yaml");
    let out_str = out.to_string_lossy().to_string();

    let (success, stdout, _) = run_cli(&["export", &catalog, "--output", &out_str]);
    assert!(success);
    assert!(stdout.contains("Exported 3 identifiers"));

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("Vehicle.Speed:"));
    assert!(text.contains("staticUID: '0x") || text.contains("staticUID: 0x"));
}

#[test]
fn test_export_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "catalog.yaml", CATALOG);
    let first = temp_dir.path().join("first.yaml");
    let second = temp_dir.path().join("second.yaml");

    let (success, _, _) =
        run_cli(&["export", &catalog, "--output", &first.to_string_lossy()]);
    assert!(success);
    let (success, _, _) =
        run_cli(&["export", &catalog, "--output", &second.to_string_lossy()]);
    assert!(success);

    assert_eq!(
        std::fs::read_to_string(first).unwrap(),
        std::fs::read_to_string(second).unwrap()
    );
}

#[test]
fn test_export_validates_against_reference() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "catalog.yaml", CATALOG);
    let reference = temp_dir.path().join("reference.yaml");
    let reference_str = reference.to_string_lossy().to_string();

    let (success, _, _) = run_cli(&["export", &catalog, "--output", &reference_str]);
    assert!(success);

    let (success, stdout, _) = run_cli(&[
        "export",
        &catalog,
        "--validate-with",
        &reference_str,
        "--validate-only",
        "--strict",
    ]);
    assert!(success, "unmodified catalog must validate cleanly");
    assert!(stdout.contains("3 stable"));
    assert!(stdout.contains("0 drifted"));
}

#[test]
fn test_structural_changes_are_reported() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "catalog.yaml", CATALOG);
    let reference = temp_dir.path().join("reference.yaml");
    let reference_str = reference.to_string_lossy().to_string();
    let (success, _, _) = run_cli(&["export", &catalog, "--output", &reference_str]);
    assert!(success);

    let edited = CATALOG.replace("Gear:", "Mode:");
    let edited_catalog = write_catalog(&temp_dir, "edited.yaml", &edited);

    let (success, stdout, _) = run_cli(&[
        "export",
        &edited_catalog,
        "--validate-with",
        &reference_str,
        "--validate-only",
    ]);
    assert!(success, "structural findings are not fatal by default");
    assert!(stdout.contains("removed: Vehicle.Gear"));
    assert!(stdout.contains("added:   Vehicle.Mode"));
}

#[test]
fn test_strict_fails_on_drift() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "catalog.yaml", CATALOG);
    let reference = temp_dir.path().join("reference.yaml");
    let reference_str = reference.to_string_lossy().to_string();
    let (success, _, _) = run_cli(&["export", &catalog, "--output", &reference_str]);
    assert!(success);

    // Turning on the layer byte moves every identifier without touching
    // any descriptor: pure drift.
    let (success, stdout, _) = run_cli(&[
        "export",
        &catalog,
        "--layer-offset",
        "200",
        "--validate-with",
        &reference_str,
        "--validate-only",
        "--strict",
    ]);
    assert!(!success, "--strict must fail on drift findings");
    assert!(stdout.contains("DRIFT"));
}

#[test]
fn test_validate_only_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "catalog.yaml", CATALOG);
    let reference = temp_dir.path().join("reference.yaml");
    let reference_str = reference.to_string_lossy().to_string();
    let (success, _, _) = run_cli(&["export", &catalog, "--output", &reference_str]);
    assert!(success);

    let out = temp_dir.path().join("unwanted.yaml");
    let (success, _, _) = run_cli(&[
        "export",
        &catalog,
        "--output",
        &out.to_string_lossy(),
        "--validate-with",
        &reference_str,
        "--validate-only",
    ]);
    assert!(success);
    assert!(!out.exists(), "--validate-only must not write the export");
}

#[test]
fn test_validate_subcommand_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "catalog.yaml", CATALOG);
    let reference = temp_dir.path().join("reference.yaml");
    let reference_str = reference.to_string_lossy().to_string();
    let (success, _, _) = run_cli(&["export", &catalog, "--output", &reference_str]);
    assert!(success);

    let (success, stdout, _) =
        run_cli(&["validate", &reference_str, &reference_str, "--json"]);
    assert!(success);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["stable"], 3);
    assert_eq!(report["drifted"].as_array().unwrap().len(), 0);
}

#[test]
fn test_counter_scheme_decimal_output() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "catalog.yaml", CATALOG);
    let out = temp_dir.path().join("counters.yaml");

    let (success, _, _) = run_cli(&[
        "export",
        &catalog,
        "--output",
        &out.to_string_lossy(),
        "--counter",
        "--decimal",
    ]);
    assert!(success);
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("'000001'") || text.contains("\"000001\""));
    assert!(!text.contains("0x"));
}

#[test]
fn test_export_failure_leaves_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "broken.yaml", "Vehicle: [not, a, node]\n");
    let out = temp_dir.path().join("uids.yaml");

    let (success, _, stderr) =
        run_cli(&["export", &catalog, "--output", &out.to_string_lossy()]);
    assert!(!success);
    assert!(stderr.contains("Error"));
    assert!(!out.exists());
}

#[test]
fn test_missing_reference_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(&temp_dir, "catalog.yaml", CATALOG);

    let (success, _, stderr) = run_cli(&[
        "export",
        &catalog,
        "--validate-with",
        "does-not-exist.yaml",
        "--validate-only",
    ]);
    assert!(!success);
    assert!(stderr.contains("failed to load reference"));
}
