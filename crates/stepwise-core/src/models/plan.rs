//! Plan model definition and related functionality.

use std::collections::BTreeMap;

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{PlanAnalysis, PlanId, PlanPhase, PlanStep, StepId};
use crate::policy;

/// Descriptive data attached to a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanMetadata {
    /// Incremented on every structural change to the step collection
    pub version: u32,

    /// Who (or what) authored the plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-form context bag supplied by the host
    #[serde(default)]
    pub context: BTreeMap<String, serde_json::Value>,
}

impl Default for PlanMetadata {
    fn default() -> Self {
        Self {
            version: 1,
            author: None,
            tags: Vec::new(),
            context: BTreeMap::new(),
        }
    }
}

/// Represents a complete execution plan with its steps and derived analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlan {
    /// Unique identifier for the plan
    pub id: PlanId,

    /// Title of the plan
    pub title: String,

    /// Detailed multi-line description of the plan
    #[serde(default)]
    pub description: String,

    /// The outcome the plan is meant to achieve
    pub goal: String,

    /// Current lifecycle phase
    pub phase: PlanPhase,

    /// Steps in display order
    #[serde(default)]
    pub steps: Vec<PlanStep>,

    #[serde(default)]
    pub metadata: PlanMetadata,

    /// Derived from `steps`; recomputed after every structural change
    #[serde(default)]
    pub analysis: PlanAnalysis,

    /// Timestamp when the plan was created (UTC)
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub updated_at: Timestamp,

    /// Set when the plan enters the approval phase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub approved_at: Option<Timestamp>,

    /// Set when the plan enters the completed phase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub completed_at: Option<Timestamp>,
}

impl ExecutionPlan {
    /// Create an empty plan in the analysis phase.
    pub fn new(
        title: impl Into<String>,
        goal: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: PlanId::generate(),
            title: title.into(),
            description: description.into(),
            goal: goal.into(),
            phase: PlanPhase::Analysis,
            steps: Vec::new(),
            metadata: PlanMetadata::default(),
            analysis: PlanAnalysis::default(),
            created_at: now,
            updated_at: now,
            approved_at: None,
            completed_at: None,
        }
    }

    /// Look up a step by id.
    pub fn step(&self, id: &StepId) -> Option<&PlanStep> {
        self.steps.iter().find(|step| &step.id == id)
    }

    pub(crate) fn step_mut(&mut self, id: &StepId) -> Option<&mut PlanStep> {
        self.steps.iter_mut().find(|step| &step.id == id)
    }

    /// Steps that list `id` among their dependencies.
    pub fn dependents_of<'a>(&'a self, id: &'a StepId) -> impl Iterator<Item = &'a PlanStep> + 'a {
        self.steps.iter().filter(move |step| step.depends_on(id))
    }

    /// Title of the step with `id`, if it exists.
    pub fn step_title(&self, id: &StepId) -> Option<&str> {
        self.step(id).map(|step| step.title.as_str())
    }

    /// Recompute the analysis from scratch and record a structural change.
    pub(crate) fn reanalyze(&mut self) {
        self.refresh_analysis();
        self.metadata.version = self.metadata.version.saturating_add(1);
        self.touch();
    }

    /// Recompute the analysis only; used when adopting a plan from outside.
    pub(crate) fn refresh_analysis(&mut self) {
        self.analysis = policy::analyze(&self.steps);
    }

    /// Bump `updated_at` without touching the analysis.
    pub(crate) fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
