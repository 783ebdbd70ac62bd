// tests/android_test.rs
use std::fs;
use std::path::PathBuf;

use bump_version::platform::{AndroidBuildGradle, AndroidVersionRecord, VersionFile, VersionUpdate};
use tempfile::TempDir;

fn fixture_copy(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("build.gradle");
    fs::copy("tests/fixtures/build.gradle", &path).expect("Failed to copy fixture");
    path
}

#[test]
fn test_read_fixture() {
    let dir = TempDir::new().unwrap();
    let gradle = AndroidBuildGradle::new(fixture_copy(&dir)).unwrap();

    let record = gradle.read_record().expect("Should read build.gradle");
    assert_eq!(
        record,
        AndroidVersionRecord {
            build_version: Some("12".to_string()),
            marketing_version: Some("1.0.0".to_string()),
        }
    );
}

#[test]
fn test_bump_scenario() {
    let dir = TempDir::new().unwrap();
    let gradle = AndroidBuildGradle::new(fixture_copy(&dir)).unwrap();

    let report = gradle
        .write_update(&VersionUpdate::new("1.0.1", "13"))
        .expect("Should write build.gradle");
    assert_eq!(report.replacements("versionCode"), 1);
    assert_eq!(report.replacements("versionName"), 1);

    let content = fs::read_to_string(gradle.path()).unwrap();
    assert!(content.contains("versionCode 13"));
    assert!(content.contains(r#"versionName "1.0.1""#));
    assert!(!content.contains("versionCode 12"));

    let record = gradle.read_record().unwrap();
    assert_eq!(record.build_version.as_deref(), Some("13"));
    assert_eq!(record.marketing_version.as_deref(), Some("1.0.1"));
}

#[test]
fn test_write_then_read_returns_written_values() {
    let dir = TempDir::new().unwrap();
    let gradle = AndroidBuildGradle::new(fixture_copy(&dir)).unwrap();

    for (marketing, build) in [("0.0.1", "1"), ("10.4.22", "10422"), ("3.0.0", "0")] {
        gradle
            .write_update(&VersionUpdate::new(marketing, build))
            .unwrap();
        let record = gradle.read_record().unwrap();
        assert_eq!(record.marketing_version.as_deref(), Some(marketing));
        assert_eq!(record.build_version.as_deref(), Some(build));
    }
}

#[test]
fn test_identical_writes_are_idempotent() {
    let dir = TempDir::new().unwrap();
    let gradle = AndroidBuildGradle::new(fixture_copy(&dir)).unwrap();
    let update = VersionUpdate::new("1.2.3", "45");

    gradle.write_update(&update).unwrap();
    let first = fs::read(gradle.path()).unwrap();
    gradle.write_update(&update).unwrap();
    let second = fs::read(gradle.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_every_occurrence_is_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("build.gradle");
    fs::write(
        &path,
        "defaultConfig {\n    versionCode 1\n    versionName \"1.0.0\"\n}\nflavor {\n    versionCode\t2\n    versionName   \"1.0.0-beta\"\n}\n",
    )
    .unwrap();
    let gradle = AndroidBuildGradle::new(&path).unwrap();

    let report = gradle
        .write_update(&VersionUpdate::new("2.0.0", "7"))
        .unwrap();
    assert_eq!(report.replacements("versionCode"), 2);
    assert_eq!(report.replacements("versionName"), 2);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.matches("versionCode 7").count(), 2);
    assert_eq!(content.matches(r#"versionName "2.0.0""#).count(), 2);
}

#[test]
fn test_missing_field_is_left_alone_and_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("build.gradle");
    let original = "defaultConfig {\n    versionCode 4\n    versionName project.ext.name\n}\n";
    fs::write(&path, original).unwrap();
    let gradle = AndroidBuildGradle::new(&path).unwrap();

    let before = gradle.read_record().unwrap();
    assert_eq!(before.marketing_version, None);
    assert_eq!(before.build_version.as_deref(), Some("4"));

    let report = gradle
        .write_update(&VersionUpdate::new("1.0.0", "5"))
        .unwrap();
    assert_eq!(report.missed_fields(), vec!["versionName"]);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("versionName project.ext.name"));
    assert!(content.contains("versionCode 5"));
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let gradle = AndroidBuildGradle::new(dir.path().join("android/app/build.gradle")).unwrap();

    let err = gradle.read_record().unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().contains("build.gradle"));

    assert!(gradle
        .write_update(&VersionUpdate::new("1.0.0", "1"))
        .is_err());
    assert!(!gradle.path().exists());
}
