use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_worldpop")
}

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("worldpop-cli-{name}-{stamp}.csv"))
}

#[test]
fn missing_command_returns_usage() {
    let output = Command::new(bin()).output().expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: worldpop"));
}

#[test]
fn unknown_command_returns_usage() {
    let output = Command::new(bin())
        .arg("frobnicate")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn convert_command_emits_document_json() {
    let path = unique_temp_path("convert");
    fs::write(&path, "Country,Code,1990,2000\nAfghanistan,AFG,10694.0,20779\n")
        .expect("fixture should be written");

    let output = Command::new(bin())
        .args(["convert", path.to_string_lossy().as_ref()])
        .output()
        .expect("convert should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("convert should emit json");
    assert_eq!(payload["columnNames"]["k3"], "2000");
    assert_eq!(payload["dataRows"][0]["k0"], "Afghanistan");

    let _ = fs::remove_file(path);
}

#[test]
fn convert_command_fails_for_missing_file() {
    let path = unique_temp_path("convert-missing");

    let output = Command::new(bin())
        .args(["convert", path.to_string_lossy().as_ref()])
        .output()
        .expect("convert should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no data available"));
}

#[test]
fn convert_command_fails_for_short_row() {
    let path = unique_temp_path("convert-short");
    fs::write(&path, "Country,Code,1990,2000\nAfghanistan,AFG\n")
        .expect("fixture should be written");

    let output = Command::new(bin())
        .args(["convert", path.to_string_lossy().as_ref()])
        .output()
        .expect("convert should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("convert failed"));

    let _ = fs::remove_file(path);
}
