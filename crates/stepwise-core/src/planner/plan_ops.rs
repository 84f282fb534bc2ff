//! Plan-level operations for the Planner.

use jiff::Timestamp;
use log::{debug, info};

use super::Planner;
use crate::{
    error::Result,
    models::{ExecutionPlan, PlanPhase, PlanProgress},
    params::CreatePlan,
};

impl Planner {
    /// Create a new empty plan and make it the current plan.
    ///
    /// Any previously current plan is replaced. The new plan starts in the
    /// analysis phase with no steps and an empty analysis.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the title is blank.
    pub fn create_plan(&mut self, params: &CreatePlan) -> Result<&ExecutionPlan> {
        params.validate()?;

        let mut plan = ExecutionPlan::new(&params.title, &params.goal, &params.description);
        plan.metadata.author = self.author.clone();
        plan.metadata.tags = self.default_tags.clone();

        if let Some(previous) = &self.plan {
            debug!("Replacing current plan {}", previous.id);
        }
        info!("Created plan {} '{}'", plan.id, plan.title);

        Ok(self.plan.insert(plan))
    }

    /// Move the current plan to `target` if the transition table allows it.
    ///
    /// Returns `Ok(false)` and leaves the plan untouched for an illegal edge.
    /// Entering `approval` stamps `approved_at`; entering `completed` stamps
    /// `completed_at`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` when there is no current plan.
    pub fn transition_phase(&mut self, target: PlanPhase) -> Result<bool> {
        let plan = self.require_plan_mut()?;
        let from = plan.phase;
        if !from.can_transition_to(target) {
            debug!("Rejected phase transition {from:?} -> {target:?}");
            return Ok(false);
        }

        let now = Timestamp::now();
        plan.phase = target;
        plan.updated_at = now;
        match target {
            PlanPhase::Approval => plan.approved_at = Some(now),
            PlanPhase::Completed => plan.completed_at = Some(now),
            _ => {}
        }

        info!("Plan {} moved from {from:?} to {target:?}", plan.id);
        Ok(true)
    }

    /// Per-status step counts of the current plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` when there is no current plan.
    pub fn progress(&self) -> Result<PlanProgress> {
        Ok(PlanProgress::from(self.require_plan()?))
    }

    /// Serialize the current plan as a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` when there is no current plan, or
    /// `PlannerError::Serialization` if encoding fails.
    pub fn export_json(&self) -> Result<String> {
        let plan = self.require_plan()?;
        Ok(serde_json::to_string_pretty(plan)?)
    }

    /// Replace the current plan with one parsed from a JSON document.
    ///
    /// No merge happens: whatever plan was current is discarded. The analysis
    /// is recomputed from the loaded steps.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Serialization` for malformed JSON or missing
    /// required fields; the current plan is left unchanged in that case.
    pub fn import_json(&mut self, json: &str) -> Result<&ExecutionPlan> {
        let plan: ExecutionPlan = serde_json::from_str(json)?;
        Ok(self.adopt_plan(plan))
    }

    /// Make `plan` the current plan, refreshing its analysis.
    pub fn adopt_plan(&mut self, mut plan: ExecutionPlan) -> &ExecutionPlan {
        plan.refresh_analysis();
        info!(
            "Loaded plan {} '{}' with {} steps",
            plan.id,
            plan.title,
            plan.steps.len()
        );
        self.plan.insert(plan)
    }
}
