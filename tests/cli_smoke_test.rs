//! End-to-end smoke tests for the circmap binary

use assert_cmd::Command;
use std::fs;

const BOM: &str = "id,name,material,process,mass_kg,fr,efp,ecp,cfp,ccp,ems,erfp\n\
                   c1,Casing,steel,stamping,2.5,0.3,0.95,0.9,0.5,0.5,0.8,0.85\n\
                   c2,Board,fr4,smt,0.4,0.1,0.9,0.85,0,0,0.5,0.6\n";

const PARAMS: &str = "[product]\nname = \"demo\"\ncr = 0.5\nlifetime = 2.0\n";

fn circmap() -> Command {
    Command::cargo_bin("circmap").unwrap()
}

#[test]
fn compute_writes_json_results() {
    let dir = tempfile::tempdir().unwrap();
    let bom = dir.path().join("bom.csv");
    let params = dir.path().join("circmap.toml");
    fs::write(&bom, BOM).unwrap();
    fs::write(&params, PARAMS).unwrap();

    let output = circmap()
        .current_dir(dir.path())
        .args(["compute", "bom.csv", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"pci\""));
    assert!(stdout.contains("\"use_factor\""));
    assert!(stdout.contains("\"c1\""));
}

#[test]
fn compute_writes_csv_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bom.csv"), BOM).unwrap();
    fs::write(dir.path().join("circmap.toml"), PARAMS).unwrap();

    circmap()
        .current_dir(dir.path())
        .args(["compute", "bom.csv", "--format", "csv", "--output", "results.csv"])
        .assert()
        .success();

    let exported = fs::read_to_string(dir.path().join("results.csv")).unwrap();
    assert!(exported.starts_with("id,name,mass_kg,cci,cii,lfi"));
    assert_eq!(exported.lines().count(), 3);
}

#[test]
fn compute_fails_on_invalid_use_factor() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bom.csv"), BOM).unwrap();
    fs::write(
        dir.path().join("circmap.toml"),
        "[product]\ndesign_lifetime = 0.0\n",
    )
    .unwrap();

    let output = circmap()
        .current_dir(dir.path())
        .args(["compute", "bom.csv"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn validate_reports_clamp_notes_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let bom = "id,name,material,process,mass_kg,fr,efp,ecp,cfp,ccp,ems,erfp\n\
               c1,Casing,steel,stamping,2.5,1.4,0.95,0.9,0.5,0.5,0.8,0.85\n";
    fs::write(dir.path().join("bom.csv"), bom).unwrap();
    fs::write(dir.path().join("circmap.toml"), PARAMS).unwrap();

    let output = circmap()
        .current_dir(dir.path())
        .args(["validate", "bom.csv"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("clamped"));
    assert!(stdout.contains("OK"));
}

#[test]
fn validate_fails_on_zero_efficiency() {
    let dir = tempfile::tempdir().unwrap();
    let bom = "id,name,material,process,mass_kg,fr,efp,ecp,cfp,ccp,ems,erfp\n\
               c1,Casing,steel,stamping,2.5,0.3,0,0.9,0.5,0.5,0.8,0.85\n";
    fs::write(dir.path().join("bom.csv"), bom).unwrap();

    circmap()
        .current_dir(dir.path())
        .args(["validate", "bom.csv"])
        .assert()
        .failure();
}

#[test]
fn init_creates_and_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();

    circmap()
        .current_dir(dir.path())
        .args(["init"])
        .assert()
        .success();
    assert!(dir.path().join("circmap.toml").exists());

    circmap()
        .current_dir(dir.path())
        .args(["init"])
        .assert()
        .failure();

    circmap()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
