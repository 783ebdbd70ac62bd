// tests/integration_test.rs
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const QUIET_CONFIG: &str = "[behavior]\nclear_screen = false\nshow_banner = false\n";

fn project_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("android/app")).unwrap();
    fs::copy(
        "tests/fixtures/build.gradle",
        dir.path().join("android/app/build.gradle"),
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("ios/Example.xcodeproj")).unwrap();
    fs::copy(
        "tests/fixtures/project.pbxproj",
        dir.path().join("ios/Example.xcodeproj/project.pbxproj"),
    )
    .unwrap();
    fs::write(dir.path().join("quiet.toml"), QUIET_CONFIG).unwrap();
    dir
}

fn run(root: &Path, args: &[&str], stdin: &str) -> Output {
    let config = root.join("quiet.toml");
    let mut child = Command::new(env!("CARGO_BIN_EXE_bump-version"))
        .arg("--root")
        .arg(root)
        .arg("--config")
        .arg(&config)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_bump-version"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("bump-version"));
    assert!(stdout.contains("android"));
    assert!(stdout.contains("ios"));
}

#[test]
fn test_version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_bump-version"))
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_android_interactive_bump() {
    let root = project_root();
    let output = run(root.path(), &["android"], "1.0.1\n13\n");

    assert!(output.status.success());
    let content = fs::read_to_string(root.path().join("android/app/build.gradle")).unwrap();
    assert!(content.contains("versionCode 13"));
    assert!(content.contains(r#"versionName "1.0.1""#));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Android version updated successfully!"));
}

#[test]
fn test_ios_interactive_bump() {
    let root = project_root();
    let output = run(root.path(), &["ios", "Example"], "2.1.0\n6\n");

    assert!(output.status.success());
    let content =
        fs::read_to_string(root.path().join("ios/Example.xcodeproj/project.pbxproj")).unwrap();
    assert_eq!(content.matches("CURRENT_PROJECT_VERSION = 6;").count(), 2);
    assert_eq!(content.matches("MARKETING_VERSION = 2.1.0;").count(), 2);
}

#[test]
fn test_invalid_input_exits_without_writing() {
    let root = project_root();
    let before = fs::read(root.path().join("android/app/build.gradle")).unwrap();

    let output = run(root.path(), &["android"], "1.2\n13\n");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("x.y.z"));
    assert_eq!(
        fs::read(root.path().join("android/app/build.gradle")).unwrap(),
        before
    );
}

#[test]
fn test_status_commands_do_not_prompt() {
    let root = project_root();

    let output = run(root.path(), &["android-version"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Current Android version:"));
    assert!(stdout.contains("1.0.0"));
    assert!(!stdout.contains("Enter the new"));

    let output = run(root.path(), &["ios", "Example", "--status"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Current iOS app version:"));
    assert!(stdout.contains("2.0.0"));
}

#[test]
fn test_missing_project_fails() {
    let root = project_root();
    let output = run(root.path(), &["ios-version", "Missing"], "");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERROR:"));
    assert!(stderr.contains("Missing.xcodeproj"));
}
