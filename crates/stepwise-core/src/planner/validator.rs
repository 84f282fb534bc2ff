//! Plan validator.

use log::warn;

use super::Planner;
use crate::{
    error::Result,
    graph::DependencyGraph,
    models::{ExecutionPlan, RiskLevel, ValidationIssue, ValidationReport},
    policy,
};

impl ExecutionPlan {
    /// Check the plan for structural defects.
    ///
    /// Runs, in order: cycle detection (one issue per step on a cycle),
    /// missing-dependency detection (one issue per dangling reference), the
    /// empty-plan check, and the high-risk-without-rollback check. The same
    /// plan always yields the same report.
    pub fn validate(&self) -> ValidationReport {
        let graph = DependencyGraph::new(&self.steps);
        let mut issues = Vec::new();

        for step in graph.cycle_members() {
            issues.push(ValidationIssue::Cycle {
                step_id: step.id.clone(),
                title: step.title.clone(),
            });
        }

        for missing in graph.missing_dependencies() {
            issues.push(ValidationIssue::MissingDependency {
                step_id: missing.step_id.clone(),
                title: missing.step_title.clone(),
                dependency: missing.dependency.clone(),
            });
        }

        if self.steps.is_empty() {
            issues.push(ValidationIssue::EmptyPlan);
        }

        let has_high_risk = self.steps.iter().any(|step| step.risk == RiskLevel::High);
        if has_high_risk && policy::rollback_points(&self.steps, &graph).is_empty() {
            issues.push(ValidationIssue::HighRiskWithoutRollback);
        }

        ValidationReport { issues }
    }
}

impl Planner {
    /// Validate the current plan. Advisory only: nothing is blocked.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` when there is no current plan.
    pub fn validate(&self) -> Result<ValidationReport> {
        let plan = self.require_plan()?;
        let report = plan.validate();
        if !report.is_valid() {
            warn!(
                "Plan {} failed validation with {} issue(s)",
                plan.id,
                report.issues.len()
            );
        }
        Ok(report)
    }
}
