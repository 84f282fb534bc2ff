//! Data models for execution plans and their steps.
//!
//! This module contains the core domain models of the plan engine. Display
//! implementations for these models live in [`crate::display`] to keep data
//! structures separate from presentation logic.
//!
//! The JSON form of [`ExecutionPlan`] is the engine's import/export document:
//! field names are camelCase, enum values are lower/snake case and every
//! timestamp is an ISO-8601 string.
//!
//! # Examples
//!
//! ```rust
//! use stepwise_core::models::{ExecutionPlan, PlanPhase};
//!
//! let plan = ExecutionPlan::new("Refactor auth", "Split session handling", "");
//! assert_eq!(plan.phase, PlanPhase::Analysis);
//! assert!(plan.steps.is_empty());
//! assert_eq!(plan.analysis.total_steps, 0);
//! ```

pub mod action;
pub mod analysis;
pub mod ids;
pub mod phase;
pub mod plan;
pub mod status;
pub mod step;
pub mod summary;


pub use action::{ActionType, StepAction};
pub use analysis::{PlanAnalysis, ValidationIssue, ValidationReport};
pub use ids::{PlanId, StepId};
pub use phase::PlanPhase;
pub use plan::{ExecutionPlan, PlanMetadata};
pub use status::{Priority, RiskLevel, StepStatus};
pub use step::{Complexity, PlanStep};
pub use summary::PlanProgress;
