use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::engine::{FieldSpec, PatchEngine, PatchReport};
use crate::error::Result;
use crate::platform::{StatusLabels, VersionFile, VersionRecord, VersionUpdate};

pub const CURRENT_PROJECT_VERSION: &str = "CURRENT_PROJECT_VERSION";
pub const MARKETING_VERSION: &str = "MARKETING_VERSION";

const MARKETING_READ: &str = r"MARKETING_VERSION = (\S+);";
const MARKETING_READ_STRICT: &str = r"MARKETING_VERSION = ([0-9]+\.[0-9]+\.[0-9]+);";
// Narrower than MARKETING_READ: a value that is not x.y.z is reported on
// read but left alone on write. Known defect, kept for compatibility;
// `strict_marketing_read` aligns the read side with it.
const MARKETING_WRITE: &str = r"MARKETING_VERSION = ([0-9]+\.[0-9]+\.[0-9]+);";

/// Fields read from `ios/<project>.xcodeproj/project.pbxproj`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IosVersionRecord {
    /// `CURRENT_PROJECT_VERSION`
    pub current_project_version: Option<String>,
    /// `MARKETING_VERSION`
    pub marketing_version: Option<String>,
}

impl VersionRecord for IosVersionRecord {
    fn build_version(&self) -> Option<&str> {
        self.current_project_version.as_deref()
    }

    fn marketing_version(&self) -> Option<&str> {
        self.marketing_version.as_deref()
    }
}

/// An Xcode project file.
#[derive(Debug, Clone)]
pub struct IosProject {
    engine: PatchEngine,
}

impl IosProject {
    /// Project file with the lenient marketing read pattern.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_strict_read(path, false)
    }

    /// Project file; `strict_marketing_read` only reports x.y.z marketing versions.
    pub fn with_strict_read(path: impl Into<PathBuf>, strict_marketing_read: bool) -> Result<Self> {
        let marketing_read = if strict_marketing_read {
            MARKETING_READ_STRICT
        } else {
            MARKETING_READ
        };

        let fields = vec![
            FieldSpec::new(
                CURRENT_PROJECT_VERSION,
                r"CURRENT_PROJECT_VERSION = (\S+)",
                r"CURRENT_PROJECT_VERSION = (\S+)",
                "CURRENT_PROJECT_VERSION = {value}",
            )?
            .with_terminator(";"),
            FieldSpec::new(
                MARKETING_VERSION,
                marketing_read,
                MARKETING_WRITE,
                "MARKETING_VERSION = {value};",
            )?,
        ];

        Ok(IosProject {
            engine: PatchEngine::new(path, fields),
        })
    }
}

impl VersionFile for IosProject {
    type Record = IosVersionRecord;

    fn path(&self) -> &Path {
        self.engine.path()
    }

    fn labels(&self) -> StatusLabels {
        StatusLabels {
            current_header: "Current iOS app version:",
            updated_header: "iOS app version updated successfully!",
            marketing: "Marketing Version (MARKETING_VERSION):",
            build: "Current Project Version (Build):",
        }
    }

    fn read_record(&self) -> Result<IosVersionRecord> {
        let values = self.engine.read()?;
        Ok(IosVersionRecord {
            current_project_version: values.get(CURRENT_PROJECT_VERSION).map(str::to_string),
            marketing_version: values.get(MARKETING_VERSION).map(str::to_string),
        })
    }

    fn write_update(&self, update: &VersionUpdate) -> Result<PatchReport> {
        self.engine.write(&[
            (CURRENT_PROJECT_VERSION, update.build_version.as_str()),
            (MARKETING_VERSION, update.marketing_version.as_str()),
        ])
    }

    fn inspect(&self) -> Result<Vec<BoundaryWarning>> {
        self.engine.inspect()
    }
}
