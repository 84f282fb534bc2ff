//! Core library for the Stepwise execution plan engine.
//!
//! The engine turns a goal into a dependency-ordered set of steps, walks the
//! plan through its lifecycle (analysis → strategy → presentation →
//! approval → execution → completed/cancelled) and derives the graph
//! properties needed to reason about order and risk before anything runs:
//! cycles, the critical path, parallelizable groups and rollback points.
//!
//! It never executes a step. Running the work, asking a human for approval
//! and deciding where plans live on disk are the host's business; the engine
//! models, validates and orders.
//!
//! # Layout
//!
//! - [`graph`]: Dependency graph primitives (cycles, critical path, depths)
//! - [`policy`]: Risk aggregation, rollback points, full analysis
//! - [`models`]: Plan, step, analysis and enum types (the JSON document)
//! - [`planner`]: The [`Planner`] engine and its builder
//! - [`params`]: Input records for engine operations
//! - [`display`]: Plain-text summary and Markdown renderings
//! - [`store`]: Optional JSON file persistence for hosts
//!
//! # Quick Start
//!
//! ```rust
//! use stepwise_core::{
//!     models::{PlanPhase, RiskLevel},
//!     params::{CreatePlan, StepDraft},
//!     PlannerBuilder,
//! };
//!
//! # fn example() -> stepwise_core::Result<()> {
//! let mut planner = PlannerBuilder::new().build();
//! planner.create_plan(&CreatePlan::new("Refactor auth", "Isolate session handling"))?;
//!
//! let extract = planner.add_step(StepDraft::new("Extract session store"))?;
//! planner.add_step(
//!     StepDraft::new("Switch login flow")
//!         .with_risk(RiskLevel::Medium)
//!         .depends_on(&extract.id),
//! )?;
//!
//! let plan = planner.require_plan()?;
//! assert_eq!(plan.analysis.critical_path.len(), 2);
//! assert!(planner.validate()?.is_valid());
//!
//! assert!(planner.transition_phase(PlanPhase::Strategy)?);
//! assert!(!planner.transition_phase(PlanPhase::Execution)?);
//! println!("{}", planner.require_plan()?.to_summary());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod graph;
pub mod models;
pub mod params;
pub mod planner;
pub mod policy;
pub mod store;

// Re-export commonly used types
pub use display::{AnalysisMarkdown, OperationStatus, PlanMarkdown, PlanSummary, StepMarkdown};
pub use error::{PlannerError, Result};
pub use models::{
    ExecutionPlan, PlanAnalysis, PlanPhase, PlanStep, Priority, RiskLevel, StepId, StepStatus,
    ValidationReport,
};
pub use params::{CreatePlan, StepDraft, StepUpdate};
pub use planner::{Planner, PlannerBuilder};
pub use store::PlanStore;
