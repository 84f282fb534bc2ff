//! Step model definition and related functionality.

use std::collections::BTreeSet;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Priority, RiskLevel, StepAction, StepId, StepStatus};
use crate::error::{PlannerError, Result};

/// Estimated effort of a step on a 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(try_from = "u8", into = "u8")]
pub struct Complexity(u8);

impl Complexity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate and wrap a raw complexity rating.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when `value` is outside `1..=5`.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PlannerError::invalid_input("estimatedComplexity").with_reason(format!(
                "must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Complexity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Complexity {
    type Error = PlannerError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Complexity> for u8 {
    fn from(value: Complexity) -> Self {
        value.0
    }
}

/// Represents an individual step within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanStep {
    /// Engine-assigned unique identifier
    pub id: StepId,

    /// Brief title/summary of the step
    pub title: String,

    /// Detailed description of the work
    #[serde(default)]
    pub description: String,

    pub priority: Priority,

    pub risk: RiskLevel,

    pub estimated_complexity: Complexity,

    /// Ids of steps that must complete before this one may start
    #[serde(default)]
    pub dependencies: Vec<StepId>,

    /// Paths this step is expected to touch
    #[serde(default)]
    pub affected_files: BTreeSet<String>,

    /// Ordered operations the step performs
    #[serde(default)]
    pub actions: Vec<StepAction>,

    /// Current status of the step
    pub status: StepStatus,

    /// Free-text note recorded with the latest status change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PlanStep {
    /// Whether this step lists `id` among its dependencies.
    pub fn depends_on(&self, id: &StepId) -> bool {
        self.dependencies.contains(id)
    }
}

/// Collapse duplicate dependency ids, keeping the first occurrence.
pub(crate) fn dedup_dependencies(dependencies: Vec<StepId>) -> Vec<StepId> {
    let mut seen = BTreeSet::new();
    dependencies
        .into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
