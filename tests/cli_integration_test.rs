//! End-to-end tests running the built binary.

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::config_dir_with;

fn run(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_joularjx-config"))
        .arg("--config-dir")
        .arg(config_dir)
        .args(args)
        .env_remove("JOULARJX_CONFIG_DIR")
        .env_remove("JOULARJX_LOG_FORMAT")
        .env_remove("JOULARJX_LOG_LOG_DIR")
        .env_remove("JOULARJX_LOG_ENABLE_CONSOLE")
        .env_remove("JOULARJX_LOG_ROTATION")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run joularjx-config")
}

#[test]
fn test_missing_config_file_exits_with_status_1() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["show"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Configuration file not found"),
        "stderr: {stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_config_file_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["--json", "check"]);

    assert_eq!(output.status.code(), Some(1));
    let error: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["exit_code"], 1);
}

#[test]
fn test_empty_config_shows_defaults() {
    let dir = config_dir_with("");
    let output = run(dir.path(), &["--json", "show"]);

    assert!(output.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let properties = &shown["properties"];
    assert_eq!(properties["filter_method_names"], serde_json::json!([]));
    assert!(properties["power_monitor_path"].is_null());
    assert_eq!(properties["save_runtime_data"], false);
    assert_eq!(properties["overwrite_runtime_data"], false);
    assert_eq!(properties["logger_level"], "INFO");
}

#[test]
fn test_check_reports_key_count() {
    let dir = config_dir_with("logger-level=OFF\nsave-runtime-data=true\n");
    let output = run(dir.path(), &["check"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration OK"), "stdout: {stdout}");
    assert!(stdout.contains("(2 keys)"), "stdout: {stdout}");
}
