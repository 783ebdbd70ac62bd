use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::engine::{FieldSpec, PatchEngine, PatchReport};
use crate::error::Result;
use crate::platform::{StatusLabels, VersionFile, VersionRecord, VersionUpdate};

pub const VERSION_CODE: &str = "versionCode";
pub const VERSION_NAME: &str = "versionName";

/// Fields read from `android/app/build.gradle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AndroidVersionRecord {
    /// `versionCode`
    pub build_version: Option<String>,
    /// `versionName`
    pub marketing_version: Option<String>,
}

impl VersionRecord for AndroidVersionRecord {
    fn build_version(&self) -> Option<&str> {
        self.build_version.as_deref()
    }

    fn marketing_version(&self) -> Option<&str> {
        self.marketing_version.as_deref()
    }
}

/// The Android Gradle build script.
#[derive(Debug, Clone)]
pub struct AndroidBuildGradle {
    engine: PatchEngine,
}

impl AndroidBuildGradle {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let fields = vec![
            FieldSpec::new(
                VERSION_CODE,
                r"versionCode\s+([0-9]+)",
                r"versionCode\s+[0-9]+",
                "versionCode {value}",
            )?,
            FieldSpec::new(
                VERSION_NAME,
                r#"versionName\s+"([^"]+)""#,
                r#"versionName\s+"[^"]+""#,
                r#"versionName "{value}""#,
            )?,
        ];

        Ok(AndroidBuildGradle {
            engine: PatchEngine::new(path, fields),
        })
    }
}

impl VersionFile for AndroidBuildGradle {
    type Record = AndroidVersionRecord;

    fn path(&self) -> &Path {
        self.engine.path()
    }

    fn labels(&self) -> StatusLabels {
        StatusLabels {
            current_header: "Current Android version:",
            updated_header: "Android version updated successfully!",
            marketing: "Version Name (Marketing Version):",
            build: "Version Code (Build):",
        }
    }

    fn read_record(&self) -> Result<AndroidVersionRecord> {
        let values = self.engine.read()?;
        Ok(AndroidVersionRecord {
            build_version: values.get(VERSION_CODE).map(str::to_string),
            marketing_version: values.get(VERSION_NAME).map(str::to_string),
        })
    }

    fn write_update(&self, update: &VersionUpdate) -> Result<PatchReport> {
        self.engine.write(&[
            (VERSION_CODE, update.build_version.as_str()),
            (VERSION_NAME, update.marketing_version.as_str()),
        ])
    }

    fn inspect(&self) -> Result<Vec<BoundaryWarning>> {
        self.engine.inspect()
    }
}
