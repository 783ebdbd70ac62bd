//! Command workflows shared by the binary and tests

pub mod orchestration;

pub use orchestration::{
    run_bump_workflow, run_status_workflow, PromptField, WorkflowOptions, WorkflowOutcome,
};
