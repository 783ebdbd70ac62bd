//! Platform build files
//!
//! Each platform is the generic [`PatchEngine`](crate::engine::PatchEngine)
//! specialised by a path and a pattern table. The workflow only depends on
//! the [`VersionFile`] trait.

pub mod android;
pub mod ios;

pub use android::{AndroidBuildGradle, AndroidVersionRecord};
pub use ios::{IosProject, IosVersionRecord};

use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::engine::PatchReport;
use crate::error::Result;

/// Read-only view over the two version fields of a platform record.
pub trait VersionRecord {
    /// Build version (`versionCode` / `CURRENT_PROJECT_VERSION`)
    fn build_version(&self) -> Option<&str>;

    /// Marketing version (`versionName` / `MARKETING_VERSION`)
    fn marketing_version(&self) -> Option<&str>;
}

/// The validated values a write applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionUpdate {
    pub marketing_version: String,
    pub build_version: String,
}

impl VersionUpdate {
    pub fn new(marketing_version: impl Into<String>, build_version: impl Into<String>) -> Self {
        VersionUpdate {
            marketing_version: marketing_version.into(),
            build_version: build_version.into(),
        }
    }
}

/// Labels used when rendering a platform's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLabels {
    pub current_header: &'static str,
    pub updated_header: &'static str,
    pub marketing: &'static str,
    pub build: &'static str,
}

/// A build file holding a marketing version and a build version.
pub trait VersionFile {
    type Record: VersionRecord + Clone + std::fmt::Debug;

    /// Location of the file on disk
    fn path(&self) -> &Path;

    /// Labels for the status display
    fn labels(&self) -> StatusLabels;

    /// Read both fields. Fails only when the file cannot be read.
    fn read_record(&self) -> Result<Self::Record>;

    /// Replace both fields and overwrite the file.
    fn write_update(&self, update: &VersionUpdate) -> Result<PatchReport>;

    /// Fields a write would not fully update, as warnings.
    fn inspect(&self) -> Result<Vec<BoundaryWarning>>;
}
