//! Display formatting for plans, steps and engine results.
//!
//! Domain enums implement [`std::fmt::Display`] directly (see [`models`]);
//! whole-plan renderings are newtype wrappers so the same plan can be shown
//! in different ways:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  ExecutionPlan  │    │  PlanSummary    │    │  bordered text  │
//! │  (+ analysis)   │───▶│  PlanMarkdown   │───▶│  Markdown       │
//! │                 │    │                 │    │  (terminal/file)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Both renderings are pure functions of the plan: timestamps are shown in
//! UTC and nothing outside the plan is consulted.
//!
//! ## Module Organization
//!
//! - [`summary`]: Fixed-width plain-text summary ([`PlanSummary`])
//! - [`markdown`]: Markdown report ([`PlanMarkdown`], [`StepMarkdown`]);
//!   also backs `Display for ExecutionPlan`
//! - [`analysis`]: The analysis section on its own ([`AnalysisMarkdown`])
//! - [`status`]: Confirmation messages ([`OperationStatus`])
//! - [`datetime`]: Timestamp formatting ([`UtcDateTime`])
//! - [`models`]: Display implementations for enums and reports

use crate::models::{ExecutionPlan, PlanStep, StepId};

pub mod analysis;
pub mod datetime;
pub mod markdown;
pub mod models;
pub mod status;
pub mod summary;

pub use analysis::AnalysisMarkdown;
pub use datetime::UtcDateTime;
pub use markdown::{PlanMarkdown, StepMarkdown};
pub use status::OperationStatus;
pub use summary::PlanSummary;

impl ExecutionPlan {
    /// Render the fixed-width plain-text summary.
    pub fn to_summary(&self) -> String {
        PlanSummary(self).to_string()
    }

    /// Render the Markdown report.
    pub fn to_markdown(&self) -> String {
        PlanMarkdown(self).to_string()
    }
}

/// Titles of a step's dependencies; dangling ids are shown as such.
pub(crate) fn dependency_titles(plan: &ExecutionPlan, step: &PlanStep) -> Vec<String> {
    step.dependencies
        .iter()
        .map(|id| match plan.step_title(id) {
            Some(title) => title.to_string(),
            None => format!("{id} (missing)"),
        })
        .collect()
}

/// Titles of the given steps, falling back to the raw id.
pub(crate) fn step_titles(plan: &ExecutionPlan, ids: &[StepId]) -> Vec<String> {
    ids.iter()
        .map(|id| plan.step_title(id).unwrap_or(id.as_str()).to_string())
        .collect()
}
