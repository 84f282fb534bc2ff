//! Parameter structures for engine operations.
//!
//! These are the records callers hand to the [`Planner`](crate::Planner):
//! plain data without CLI-framework derives, so any front end (the `sw`
//! binary, a language-model adapter reading JSON drafts, a test) can build
//! them. Interface layers wrap or convert into these types.
//!
//! A [`StepDraft`] deliberately has no `id` or `status` field: the engine
//! assigns both when the draft is added to a plan.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{Complexity, Priority, RiskLevel, StepAction, StepId},
};

/// Parameters for creating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePlan {
    /// Title of the plan (required)
    pub title: String,
    /// The outcome the plan should achieve
    #[serde(default)]
    pub goal: String,
    /// Optional longer description
    #[serde(default)]
    pub description: String,
}

impl CreatePlan {
    pub fn new(title: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            goal: goal.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require_title(&self.title)
    }
}

/// A proposed step, before the engine assigns it an id and status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct StepDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub risk: RiskLevel,
    #[serde(default)]
    pub estimated_complexity: Complexity,
    /// Ids of existing (or not yet added) steps this one waits for
    #[serde(default)]
    pub dependencies: Vec<StepId>,
    #[serde(default)]
    pub affected_files: Vec<String>,
    #[serde(default)]
    pub actions: Vec<StepAction>,
}

impl StepDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_risk(mut self, risk: RiskLevel) -> Self {
        self.risk = risk;
        self
    }

    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.estimated_complexity = complexity;
        self
    }

    pub fn depends_on(mut self, id: &StepId) -> Self {
        self.dependencies.push(id.clone());
        self
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.affected_files.extend(files.into_iter().map(Into::into));
        self
    }

    pub fn with_action(mut self, action: StepAction) -> Self {
        self.actions.push(action);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require_title(&self.title)
    }
}

/// Partial update of an existing step's descriptive fields.
///
/// `None` leaves the field untouched. Status is not editable here; it only
/// changes through [`Planner::update_step_status`](crate::Planner::update_step_status).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct StepUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub risk: Option<RiskLevel>,
    pub estimated_complexity: Option<Complexity>,
    pub dependencies: Option<Vec<StepId>>,
    pub affected_files: Option<Vec<String>>,
    pub actions: Option<Vec<StepAction>>,
}

impl StepUpdate {
    /// Whether the update would change anything at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.risk.is_none()
            && self.estimated_complexity.is_none()
            && self.dependencies.is_none()
            && self.affected_files.is_none()
            && self.actions.is_none()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match &self.title {
            Some(title) => require_title(title),
            None => Ok(()),
        }
    }
}

fn require_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        Err(PlannerError::invalid_input("title").with_reason("Title cannot be empty"))
    } else {
        Ok(())
    }
}
