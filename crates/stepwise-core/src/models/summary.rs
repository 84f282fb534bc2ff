//! Execution progress summary for a plan.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ExecutionPlan, PlanPhase, StepStatus};

/// Step counts per status for a plan, used in progress displays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanProgress {
    pub title: String,
    pub phase: PlanPhase,
    pub total_steps: usize,
    pub pending_steps: usize,
    pub in_progress_steps: usize,
    pub completed_steps: usize,
    pub skipped_steps: usize,
    pub failed_steps: usize,
}

impl PlanProgress {
    /// Share of steps that are completed or skipped, in percent.
    ///
    /// An empty plan reports 0%.
    pub fn percent_complete(&self) -> f64 {
        if self.total_steps == 0 {
            return 0.0;
        }
        let done = self.completed_steps + self.skipped_steps;
        done as f64 * 100.0 / self.total_steps as f64
    }

    /// Every step reached completed or skipped.
    pub fn is_finished(&self) -> bool {
        self.total_steps > 0 && self.completed_steps + self.skipped_steps == self.total_steps
    }
}

impl From<&ExecutionPlan> for PlanProgress {
    fn from(plan: &ExecutionPlan) -> Self {
        let count = |status: StepStatus| {
            plan.steps
                .iter()
                .filter(|step| step.status == status)
                .count()
        };

        Self {
            title: plan.title.clone(),
            phase: plan.phase,
            total_steps: plan.steps.len(),
            pending_steps: count(StepStatus::Pending),
            in_progress_steps: count(StepStatus::InProgress),
            completed_steps: count(StepStatus::Completed),
            skipped_steps: count(StepStatus::Skipped),
            failed_steps: count(StepStatus::Failed),
        }
    }
}
