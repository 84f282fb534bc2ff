//! The plan engine: one instance, one current plan.
//!
//! [`Planner`] owns at most one [`ExecutionPlan`]. Callers that need several
//! plans at once hold several planners; nothing here is global. All
//! operations are synchronous and complete before returning. The engine is
//! not internally synchronized, so hosts sharing one planner across threads
//! must serialize access themselves (for example with a `Mutex<Planner>`).
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Plan lifecycle: create, phase transitions, import/export
//! - [`step_ops`]: Step mutations: add, update, remove, reorder, status
//! - [`readiness`]: Which steps can run now
//! - [`validator`]: Structural checks reported as an issue list
//!
//! ## Error conventions
//!
//! - No current plan: `Err(PlannerError::NoActivePlan)`
//! - Unknown step id or illegal phase edge: `Ok(false)`
//! - Cycles, dangling dependencies and similar defects: reported by
//!   [`Planner::validate`], never raised
//!
//! # Usage Examples
//!
//! ```rust
//! use stepwise_core::{
//!     params::{CreatePlan, StepDraft},
//!     models::StepStatus,
//!     PlannerBuilder,
//! };
//!
//! # fn example() -> stepwise_core::Result<()> {
//! let mut planner = PlannerBuilder::new().with_author("docs").build();
//! planner.create_plan(&CreatePlan::new("Refactor auth", "Isolate sessions"))?;
//!
//! let s1 = planner.add_step(StepDraft::new("Extract session store"))?;
//! let s2 = planner.add_step(StepDraft::new("Migrate callers").depends_on(&s1.id))?;
//!
//! assert_eq!(planner.next_step()?.map(|s| s.id.clone()), Some(s1.id.clone()));
//! planner.update_step_status(&s1.id, StepStatus::Completed, None)?;
//! assert_eq!(planner.next_step()?.map(|s| s.id.clone()), Some(s2.id.clone()));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::{
    error::{PlannerError, Result},
    models::ExecutionPlan,
};

pub mod builder;
pub mod plan_ops;
pub mod readiness;
pub mod step_ops;
pub mod validator;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Engine instance holding the current plan.
#[derive(Debug, Default)]
pub struct Planner {
    pub(crate) plan: Option<ExecutionPlan>,
    pub(crate) author: Option<String>,
    pub(crate) default_tags: Vec<String>,
}

impl Planner {
    /// The current plan, if one has been created or imported.
    pub fn current_plan(&self) -> Option<&ExecutionPlan> {
        self.plan.as_ref()
    }

    /// The current plan, or `PlannerError::NoActivePlan`.
    pub fn require_plan(&self) -> Result<&ExecutionPlan> {
        self.plan.as_ref().ok_or(PlannerError::NoActivePlan)
    }

    pub(crate) fn require_plan_mut(&mut self) -> Result<&mut ExecutionPlan> {
        self.plan.as_mut().ok_or(PlannerError::NoActivePlan)
    }

    /// Drop the current plan and hand it back to the caller.
    pub fn clear_plan(&mut self) -> Option<ExecutionPlan> {
        self.plan.take()
    }
}
