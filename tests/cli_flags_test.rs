use std::process::Command;

#[test]
fn test_version_flag() {
    let binary_path = env!("CARGO_BIN_EXE_horizon-stream");

    let output = Command::new(binary_path)
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "Version flag should exit with code 0"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = stdout.trim().strip_prefix("horizon-stream ").unwrap_or("");
    assert_eq!(
        version,
        env!("CARGO_PKG_VERSION"),
        "Binary version should match CARGO_PKG_VERSION"
    );
}

#[test]
fn test_help_lists_resources() {
    let output = Command::new(env!("CARGO_BIN_EXE_horizon-stream"))
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: horizon-stream"));
    assert!(stdout.contains("payments"));
}

#[test]
fn test_bad_arguments_exit_with_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_horizon-stream"))
        .arg("trades")
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown resource 'trades'"));
    assert!(stderr.contains("Usage:"));
    assert!(output.stdout.is_empty());
}
