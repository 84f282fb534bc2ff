//! Builder for creating and configuring Planner instances.

use super::Planner;
use crate::models::ExecutionPlan;

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    author: Option<String>,
    default_tags: Vec<String>,
    plan: Option<ExecutionPlan>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Author recorded in the metadata of every plan this planner creates.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Tags stamped onto every plan this planner creates.
    pub fn with_default_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Start with an existing plan as the current plan.
    ///
    /// Typically a plan loaded from disk. `None` leaves the planner empty.
    pub fn with_plan(mut self, plan: Option<ExecutionPlan>) -> Self {
        self.plan = plan;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// A seeded plan gets its analysis recomputed so that the planner never
    /// starts out holding stale derived data.
    pub fn build(self) -> Planner {
        let plan = self.plan.map(|mut plan| {
            plan.refresh_analysis();
            plan
        });

        Planner {
            plan,
            author: self.author,
            default_tags: self.default_tags,
        }
    }
}
