//! Derived analysis and validation results.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{RiskLevel, StepId};

/// Graph-derived properties of a plan's step collection.
///
/// Never edited by hand: the engine rebuilds it wholesale after every
/// structural mutation, so it always describes the current steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanAnalysis {
    pub total_steps: usize,

    /// Distinct affected-file count across all steps
    pub total_files: usize,

    /// Sum of step complexities
    pub estimated_complexity: u32,

    /// Highest risk level of any step
    pub risk_assessment: RiskLevel,

    /// Longest dependency chain, first step first
    pub critical_path: Vec<StepId>,

    /// Steps sharing a dependency depth, only groups of two or more
    pub parallelizable_groups: Vec<Vec<StepId>>,

    /// Steps nothing depends on whose risk is not high
    pub rollback_points: Vec<StepId>,
}

/// A single structural defect found by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// The step takes part in a dependency cycle
    Cycle { step_id: StepId, title: String },
    /// The step depends on an id that does not exist in the plan
    MissingDependency {
        step_id: StepId,
        title: String,
        dependency: StepId,
    },
    /// The plan has no steps at all
    EmptyPlan,
    /// High-risk work is planned but there is nowhere safe to roll back to
    HighRiskWithoutRollback,
}

/// Outcome of validating a plan. Advisory only; nothing is blocked by it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Human readable message for each issue, in detection order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}
