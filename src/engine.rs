//! Keyed-field text patching.
//!
//! A [`PatchEngine`] knows one file and a table of [`FieldSpec`]s. Each field
//! has a read pattern (first capture group is the value), a write pattern
//! (every match is replaced) and a replacement template where `{value}` is
//! substituted. The file is never parsed beyond these patterns.

use std::fs;
use std::path::{Path, PathBuf};

use regex::{Captures, Regex};
use tracing::debug;

use crate::boundary::BoundaryWarning;
use crate::error::{BumpVersionError, Result};

/// Placeholder substituted by the new value in a [`FieldSpec`] template.
pub const VALUE_PLACEHOLDER: &str = "{value}";

/// Extraction and substitution rules for one named field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    read: Regex,
    write: Regex,
    template: String,
    terminator: Option<String>,
}

impl FieldSpec {
    /// Compile a field description.
    ///
    /// # Arguments
    /// * `name` - Field key as it appears in the file (e.g. "versionCode")
    /// * `read` - Pattern whose first capture group is the current value
    /// * `write` - Pattern whose every match is replaced on write
    /// * `template` - Replacement text containing `{value}`
    pub fn new(
        name: impl Into<String>,
        read: &str,
        write: &str,
        template: impl Into<String>,
    ) -> Result<Self> {
        Ok(FieldSpec {
            name: name.into(),
            read: Regex::new(read)?,
            write: Regex::new(write)?,
            template: template.into(),
            terminator: None,
        })
    }

    /// Treat `terminator` as statement syntax rather than part of the value.
    ///
    /// A captured value ending in it is reported without it, and a replaced
    /// match that ended in it keeps it.
    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = Some(terminator.into());
        self
    }

    fn strip_terminator<'a>(&self, captured: &'a str) -> &'a str {
        match &self.terminator {
            Some(t) => captured.strip_suffix(t.as_str()).unwrap_or(captured),
            None => captured,
        }
    }

    /// First captured value in `content`, if the read pattern matches.
    pub fn extract(&self, content: &str) -> Option<String> {
        let captured = self.read.captures(content)?.get(1)?.as_str();
        let value = self.strip_terminator(captured);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Replace every write-pattern match, returning the new text and match count.
    pub fn substitute(&self, content: &str, value: &str) -> (String, usize) {
        let replacement = self.template.replace(VALUE_PLACEHOLDER, value);
        let mut count = 0;

        let patched = self.write.replace_all(content, |caps: &Captures| {
            count += 1;
            let mut text = replacement.clone();
            if let Some(t) = &self.terminator {
                if caps[0].ends_with(t.as_str()) && !text.ends_with(t.as_str()) {
                    text.push_str(t);
                }
            }
            text
        });

        (patched.into_owned(), count)
    }

    /// Values the read pattern finds at places the write pattern does not match.
    ///
    /// Every occurrence is checked on its own, so a file where one build
    /// configuration holds `1.0` and another `1.0.0` reports `1.0`.
    pub fn unwritable_values(&self, content: &str) -> Vec<String> {
        self.read
            .captures_iter(content)
            .filter(|caps| !self.write.is_match(&caps[0]))
            .filter_map(|caps| caps.get(1))
            .map(|m| self.strip_terminator(m.as_str()).to_string())
            .collect()
    }
}

/// Values extracted from a file, in field-table order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldValues {
    entries: Vec<(String, Option<String>)>,
}

impl FieldValues {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(field, _)| field == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Names of fields whose read pattern found nothing
    pub fn missing(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| field.as_str())
            .collect()
    }
}

/// How many replacements one field received during a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPatch {
    pub field: String,
    pub replacements: usize,
    /// Occurrences the read pattern saw but the write pattern left as they were
    pub skipped: usize,
}

/// Outcome of a write. A field with zero replacements was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatchReport {
    pub fields: Vec<FieldPatch>,
}

impl PatchReport {
    pub fn replacements(&self, field: &str) -> usize {
        self.fields
            .iter()
            .find(|p| p.field == field)
            .map(|p| p.replacements)
            .unwrap_or(0)
    }

    /// Fields the write did not update
    pub fn missed_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|p| p.replacements == 0)
            .map(|p| p.field.as_str())
            .collect()
    }

    /// Fields that were updated in some places and left unchanged in others
    pub fn partial_fields(&self) -> Vec<&FieldPatch> {
        self.fields
            .iter()
            .filter(|p| p.replacements > 0 && p.skipped > 0)
            .collect()
    }

    /// True when every field was replaced and no occurrence was skipped
    pub fn all_applied(&self) -> bool {
        self.fields
            .iter()
            .all(|p| p.replacements > 0 && p.skipped == 0)
    }
}

/// Reads and patches a set of fields in one text file.
#[derive(Debug, Clone)]
pub struct PatchEngine {
    path: PathBuf,
    fields: Vec<FieldSpec>,
}

impl PatchEngine {
    pub fn new(path: impl Into<PathBuf>, fields: Vec<FieldSpec>) -> Self {
        PatchEngine {
            path: path.into(),
            fields,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extract every field from `content`. Each field is independent.
    pub fn extract(&self, content: &str) -> FieldValues {
        FieldValues {
            entries: self
                .fields
                .iter()
                .map(|spec| (spec.name.clone(), spec.extract(content)))
                .collect(),
        }
    }

    /// Substitute the given `(field, value)` pairs into `content`.
    ///
    /// Fields not named in `values` are skipped and absent from the report.
    /// Values are inserted literally; `$` has no special meaning.
    pub fn patch(&self, content: &str, values: &[(&str, &str)]) -> (String, PatchReport) {
        let mut patched = content.to_string();
        let mut report = PatchReport::default();

        for spec in &self.fields {
            let Some((_, value)) = values.iter().find(|(field, _)| *field == spec.name) else {
                continue;
            };
            let skipped = spec.unwritable_values(&patched).len();
            let (next, replacements) = spec.substitute(&patched, value);
            patched = next;
            report.fields.push(FieldPatch {
                field: spec.name.clone(),
                replacements,
                skipped,
            });
        }

        (patched, report)
    }

    /// Fields a write would not fully update: absent ones, and values the
    /// write patterns cannot replace (each distinct value once).
    pub fn warnings(&self, content: &str) -> Vec<BoundaryWarning> {
        let path = self.path.display().to_string();
        let mut warnings: Vec<BoundaryWarning> = self
            .extract(content)
            .missing()
            .into_iter()
            .map(|field| BoundaryWarning::FieldMissing {
                field: field.to_string(),
                path: path.clone(),
            })
            .collect();

        for spec in &self.fields {
            for value in spec.unwritable_values(content) {
                let warning = BoundaryWarning::FieldNotWritable {
                    field: spec.name.clone(),
                    value,
                };
                if !warnings.contains(&warning) {
                    warnings.push(warning);
                }
            }
        }

        warnings
    }

    fn load(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| BumpVersionError::io(&self.path, e))
    }

    /// Read the file and extract every field.
    pub fn read(&self) -> Result<FieldValues> {
        let content = self.load()?;
        let values = self.extract(&content);
        debug!(path = %self.path.display(), ?values, "extracted fields");
        Ok(values)
    }

    /// Read the file, apply `values`, and overwrite it with the result.
    ///
    /// The overwrite is a plain full rewrite of the file.
    pub fn write(&self, values: &[(&str, &str)]) -> Result<PatchReport> {
        let content = self.load()?;
        let (patched, report) = self.patch(&content, values);
        fs::write(&self.path, patched).map_err(|e| BumpVersionError::io(&self.path, e))?;
        debug!(path = %self.path.display(), ?report, "patched file");
        Ok(report)
    }

    /// Read the file and collect the warnings of [`PatchEngine::warnings`].
    pub fn inspect(&self) -> Result<Vec<BoundaryWarning>> {
        let content = self.load()?;
        Ok(self.warnings(&content))
    }
}
