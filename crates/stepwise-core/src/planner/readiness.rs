//! Execution readiness queries.
//!
//! A step is ready when it is pending and every one of its dependencies
//! resolves to a completed step. A dangling dependency therefore keeps a step
//! blocked, as does a skipped or failed dependency.

use super::Planner;
use crate::{
    error::Result,
    models::{ExecutionPlan, PlanStep, StepId, StepStatus},
};

impl ExecutionPlan {
    /// Whether `step` may start now.
    pub fn is_ready(&self, step: &PlanStep) -> bool {
        step.status == StepStatus::Pending
            && step.dependencies.iter().all(|dependency| {
                self.step(dependency)
                    .is_some_and(|dep| dep.status == StepStatus::Completed)
            })
    }

    /// First ready step in stored order.
    pub fn next_step(&self) -> Option<&PlanStep> {
        self.steps.iter().find(|step| self.is_ready(step))
    }

    /// Every ready step, in stored order.
    ///
    /// These can be dispatched at the same time: none of them depends on
    /// another, since each one's dependencies are already completed.
    pub fn parallel_steps(&self) -> Vec<&PlanStep> {
        self.steps.iter().filter(|step| self.is_ready(step)).collect()
    }
}

impl Planner {
    /// First ready step of the current plan, if any.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` when there is no current plan.
    pub fn next_step(&self) -> Result<Option<&PlanStep>> {
        Ok(self.require_plan()?.next_step())
    }

    /// All ready steps of the current plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` when there is no current plan.
    pub fn parallel_steps(&self) -> Result<Vec<&PlanStep>> {
        Ok(self.require_plan()?.parallel_steps())
    }

    /// Look up a step of the current plan by id.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` when there is no current plan.
    pub fn step(&self, id: &StepId) -> Result<Option<&PlanStep>> {
        Ok(self.require_plan()?.step(id))
    }
}
