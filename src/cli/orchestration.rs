//! Main workflow orchestration logic
//!
//! Read, prompt, validate, write, re-read, report. Kept apart from clap so the
//! workflow can be driven programmatically with any [`VersionFile`] and any
//! prompt input.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::boundary::BoundaryWarning;
use crate::engine::PatchReport;
use crate::platform::{VersionFile, VersionRecord, VersionUpdate};
use crate::ui::formatter::{self, Theme};
use crate::ui::{display_boundary_warning, Prompter};
use crate::validation::{validate_build_version, validate_marketing_version, ValidationError};
use crate::version::{suggest_next_build, suggest_next_marketing};

/// Presentation switches for a workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOptions {
    /// Clear the terminal before the first status display
    pub clear_screen: bool,

    /// Print the tool banner before the first status display
    pub show_banner: bool,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        WorkflowOptions {
            clear_screen: true,
            show_banner: true,
        }
    }
}

/// Which prompt an abort happened at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    Marketing,
    Build,
}

/// Result of an interactive bump
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome<R> {
    /// The file was written and read back
    Updated {
        before: R,
        after: R,
        report: PatchReport,
    },
    /// Input was rejected; the file was not touched
    Aborted {
        field: PromptField,
        reason: ValidationError,
    },
}

impl<R> WorkflowOutcome<R> {
    pub fn is_updated(&self) -> bool {
        matches!(self, WorkflowOutcome::Updated { .. })
    }
}

fn show_intro<V: VersionFile, I: BufRead, O: Write>(
    file: &V,
    record: &V::Record,
    prompter: &mut Prompter<I, O>,
    theme: &Theme,
    options: &WorkflowOptions,
) -> Result<()> {
    if options.clear_screen {
        // Not fatal when stdout is not a terminal
        if let Err(e) = console::Term::stdout().clear_screen() {
            debug!(error = %e, "could not clear screen");
        }
    }
    if options.show_banner {
        prompter.say(&formatter::render_banner(theme))?;
    }

    prompter.say("")?;
    prompter.say(&formatter::render_status(record, &file.labels(), false, theme))?;
    prompter.say("")?;

    for warning in file.inspect()? {
        display_boundary_warning(&warning);
    }

    Ok(())
}

/// Prints the current values of a build file.
///
/// # Returns
/// * `Ok(record)` - The values that were displayed
/// * `Err` - If the file cannot be read
pub fn run_status_workflow<V: VersionFile, I: BufRead, O: Write>(
    file: &V,
    prompter: &mut Prompter<I, O>,
    theme: &Theme,
    options: &WorkflowOptions,
) -> Result<V::Record> {
    let record = file.read_record().with_context(|| {
        format!(
            "could not read {}; make sure you are in the project root",
            file.path().display()
        )
    })?;
    show_intro(file, &record, prompter, theme, options)?;
    Ok(record)
}

/// Interactive bump of a build file.
///
/// Orchestrates the whole process:
/// 1. Read the current values (a read failure ends the run)
/// 2. Show them
/// 3. Prompt for the marketing version, then the build version
/// 4. Write both and report fields that were missed or only partly replaced
/// 5. Read back and show the updated values
///
/// Empty or malformed input returns [`WorkflowOutcome::Aborted`] before
/// anything is written.
pub fn run_bump_workflow<V: VersionFile, I: BufRead, O: Write>(
    file: &V,
    prompter: &mut Prompter<I, O>,
    theme: &Theme,
    options: &WorkflowOptions,
) -> Result<WorkflowOutcome<V::Record>> {
    let before = run_status_workflow(file, prompter, theme, options)?;
    let labels = file.labels();

    let current_marketing = before.marketing_version();
    let question = formatter::render_question(
        &format!("Enter the new {}", labels.marketing.trim_end_matches(':')),
        current_marketing,
        current_marketing.and_then(suggest_next_marketing).as_deref(),
        theme,
    );
    let answer = prompter.ask(&question)?.unwrap_or_default();
    let marketing_version = match validate_marketing_version(&answer) {
        Ok(value) => value,
        Err(reason) => {
            return Ok(WorkflowOutcome::Aborted {
                field: PromptField::Marketing,
                reason,
            })
        }
    };

    let current_build = before.build_version();
    let question = formatter::render_question(
        &format!("Enter the new {}", labels.build.trim_end_matches(':')),
        current_build,
        current_build.and_then(suggest_next_build).as_deref(),
        theme,
    );
    let answer = prompter.ask(&question)?.unwrap_or_default();
    let build_version = match validate_build_version(&answer) {
        Ok(value) => value,
        Err(reason) => {
            return Ok(WorkflowOutcome::Aborted {
                field: PromptField::Build,
                reason,
            })
        }
    };

    let update = VersionUpdate::new(marketing_version, build_version);
    let report = file
        .write_update(&update)
        .with_context(|| format!("could not update {}", file.path().display()))?;
    info!(path = %file.path().display(), ?update, "wrote version update");

    let path = file.path().display().to_string();
    for field in report.missed_fields() {
        display_boundary_warning(&BoundaryWarning::FieldNotUpdated {
            field: field.to_string(),
            path: path.clone(),
        });
    }
    for patch in report.partial_fields() {
        display_boundary_warning(&BoundaryWarning::FieldPartlyUpdated {
            field: patch.field.clone(),
            path: path.clone(),
            skipped: patch.skipped,
        });
    }

    let after = file
        .read_record()
        .with_context(|| format!("could not read back {}", file.path().display()))?;
    prompter.say("")?;
    // The success header only when nothing was left behind
    prompter.say(&formatter::render_status(
        &after,
        &labels,
        report.all_applied(),
        theme,
    ))?;
    prompter.say("")?;

    Ok(WorkflowOutcome::Updated {
        before,
        after,
        report,
    })
}
