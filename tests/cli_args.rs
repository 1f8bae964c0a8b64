//! Tests for CLI argument parsing against the built binary.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn shopcart_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shopcart"))
}

#[test]
fn test_help_lists_options() {
    let output = shopcart_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--storage"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--reset"));
}

#[test]
fn test_version_flag() {
    let output = shopcart_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = shopcart_cmd()
        .arg("--no-such-flag")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--no-such-flag"));
}

#[test]
fn test_corrupt_storage_suggests_reset() {
    let temp_dir = TempDir::new().unwrap();
    let storage = temp_dir.path().join("storage.json");
    fs::write(&storage, r#"{"cart":"{broken"}"#).unwrap();

    let output = shopcart_cmd()
        .arg("--storage")
        .arg(&storage)
        .arg("--log-file")
        .arg(temp_dir.path().join("shopcart.log"))
        .arg("--config")
        .arg(temp_dir.path().join("config.toml"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--reset"), "stderr: {stderr}");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[ui]\ntick_rate_ms = 0\n").unwrap();

    let output = shopcart_cmd()
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_rate_ms"), "stderr: {stderr}");
}
