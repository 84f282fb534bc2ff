//! Command-line argument definitions using clap
//!
//! Core parameter types in `stepwise_core::params` carry no clap derives, so
//! every command here has its own argument struct and an explicit conversion
//! into the core type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Enum-valued flags (priority, risk, status, phase) get their own
//! [`ValueEnum`] mirrors for the same reason.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use stepwise_core::{
    models::{Complexity, PlanPhase, Priority, RiskLevel, StepAction, StepId, StepStatus},
    params::{CreatePlan, StepDraft, StepUpdate},
    PlannerError,
};

/// Create a new plan, replacing the current one
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Title of the plan
    pub title: String,
    /// The outcome the plan is meant to achieve
    #[arg(short, long, help = "The outcome the plan is meant to achieve")]
    pub goal: String,
    #[arg(short, long, help = "Optional description providing more context")]
    pub description: Option<String>,
    #[arg(long, help = "Author recorded in the plan metadata")]
    pub author: Option<String>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Tags recorded in the plan metadata as comma-separated list"
    )]
    pub tags: Vec<String>,
}

impl From<&CreatePlanArgs> for CreatePlan {
    fn from(val: &CreatePlanArgs) -> Self {
        let params = CreatePlan::new(&val.title, &val.goal);
        match &val.description {
            Some(description) => params.with_description(description),
            None => params,
        }
    }
}

/// Move the plan to another lifecycle phase
#[derive(Args)]
pub struct PhaseArgs {
    #[arg(help = "Target phase")]
    pub phase: PhaseArg,
}

/// Validate the plan structure
#[derive(Args)]
pub struct ValidateArgs {
    /// Exit with an error status when issues are found
    #[arg(long)]
    pub strict: bool,
}

/// Export the plan as a JSON document
#[derive(Args)]
pub struct ExportArgs {
    #[arg(short, long, help = "Write to this file instead of stdout")]
    pub output: Option<PathBuf>,
}

/// Import a plan from a JSON document, replacing the current one
#[derive(Args)]
pub struct ImportArgs {
    #[arg(help = "Path of the JSON plan document")]
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan, replacing the current one
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Show the full plan report
    #[command(alias = "s")]
    Show,
    /// Show the fixed-width plain-text summary
    Summary,
    /// Show the derived analysis
    #[command(alias = "a")]
    Analyze,
    /// Validate the plan structure
    #[command(alias = "v")]
    Validate(ValidateArgs),
    /// Move the plan to another lifecycle phase
    #[command(alias = "p")]
    Phase(PhaseArgs),
    /// Show per-status step counts
    Progress,
    /// Export the plan as a JSON document
    #[command(alias = "e")]
    Export(ExportArgs),
    /// Import a plan from a JSON document, replacing the current one
    #[command(alias = "i")]
    Import(ImportArgs),
    /// Print the JSON schema of the plan document
    Schema,
    /// Discard the current plan
    Clear,
}

/// Add a new step to the current plan
#[derive(Args)]
pub struct AddStepArgs {
    /// Title of the step
    pub title: String,
    #[arg(
        short,
        long,
        help = "Optional detailed description of what needs to be done"
    )]
    pub description: Option<String>,
    #[arg(short, long, value_enum, default_value_t = PriorityArg::Medium)]
    pub priority: PriorityArg,
    #[arg(short, long, value_enum, default_value_t = RiskArg::None)]
    pub risk: RiskArg,
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=5),
        help = "Estimated complexity from 1 to 5"
    )]
    pub complexity: u8,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Ids of steps this one depends on as comma-separated list"
    )]
    pub depends_on: Vec<String>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Affected files as comma-separated list"
    )]
    pub files: Vec<String>,
    #[arg(
        short,
        long = "action",
        help = "Concrete action as type:target[:description]; repeatable"
    )]
    pub actions: Vec<StepAction>,
}

impl TryFrom<AddStepArgs> for StepDraft {
    type Error = PlannerError;

    fn try_from(val: AddStepArgs) -> Result<Self, Self::Error> {
        let mut draft = StepDraft::new(val.title)
            .with_priority(val.priority.into())
            .with_risk(val.risk.into())
            .with_complexity(Complexity::new(val.complexity)?)
            .with_files(val.files);
        if let Some(description) = val.description {
            draft = draft.with_description(description);
        }
        for dependency in val.depends_on {
            draft = draft.depends_on(&StepId::from(dependency));
        }
        for action in val.actions {
            draft = draft.with_action(action);
        }
        Ok(draft)
    }
}

/// Add several steps from a JSON array of step drafts
#[derive(Args)]
pub struct AddBatchArgs {
    #[arg(help = "Path of a JSON file holding an array of step drafts")]
    pub file: PathBuf,
}

/// Edit descriptive fields of an existing step
#[derive(Args)]
pub struct UpdateStepArgs {
    #[arg(help = "Id of the step to update")]
    pub id: String,
    #[arg(short, long, help = "Updated title for the step")]
    pub title: Option<String>,
    #[arg(short, long, help = "Updated description")]
    pub description: Option<String>,
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    #[arg(short, long, value_enum)]
    pub risk: Option<RiskArg>,
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=5),
        help = "Updated complexity from 1 to 5"
    )]
    pub complexity: Option<u8>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Replacement dependency ids as comma-separated list"
    )]
    pub depends_on: Option<Vec<String>>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Replacement affected files as comma-separated list"
    )]
    pub files: Option<Vec<String>>,
    #[arg(
        short,
        long = "action",
        help = "Replacement actions as type:target[:description]; repeatable"
    )]
    pub actions: Option<Vec<StepAction>>,
}

impl TryFrom<UpdateStepArgs> for StepUpdate {
    type Error = PlannerError;

    fn try_from(val: UpdateStepArgs) -> Result<Self, Self::Error> {
        Ok(StepUpdate {
            title: val.title,
            description: val.description,
            priority: val.priority.map(Into::into),
            risk: val.risk.map(Into::into),
            estimated_complexity: val.complexity.map(Complexity::new).transpose()?,
            dependencies: val
                .depends_on
                .map(|ids| ids.into_iter().map(StepId::from).collect()),
            affected_files: val.files,
            actions: val.actions,
        })
    }
}

/// Identify a single step
#[derive(Args)]
pub struct StepIdArgs {
    #[arg(help = "Id of the step")]
    pub id: String,
}

/// Move steps to the front of the plan in the given order
#[derive(Args)]
pub struct ReorderStepsArgs {
    #[arg(required = true, help = "Step ids in their new leading order")]
    pub ids: Vec<String>,
}

/// Record a status change for a step
#[derive(Args)]
pub struct StepStatusArgs {
    #[arg(help = "Id of the step")]
    pub id: String,
    #[arg(value_enum, help = "New status for the step")]
    pub status: StepStatusArg,
    #[arg(short, long, help = "Note describing the outcome")]
    pub note: Option<String>,
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Add a new step to the current plan
    #[command(alias = "a")]
    Add(AddStepArgs),
    /// Add several steps from a JSON file
    AddBatch(AddBatchArgs),
    /// Edit descriptive fields of an existing step
    #[command(alias = "u")]
    Update(UpdateStepArgs),
    /// Remove a step and strip it from other steps' dependencies
    #[command(aliases = ["rm", "r"])]
    Remove(StepIdArgs),
    /// Move steps to the front of the plan in the given order
    Reorder(ReorderStepsArgs),
    /// Record a status change for a step
    #[command(alias = "st")]
    Status(StepStatusArgs),
    /// Show details of a specific step
    #[command(alias = "s")]
    Show(StepIdArgs),
    /// Show the next step ready to run
    #[command(alias = "n")]
    Next,
    /// List every step ready to run now
    Ready,
}

/// Command-line representation of step priorities
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Critical,
    High,
    Medium,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Critical => Priority::Critical,
            PriorityArg::High => Priority::High,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Low => Priority::Low,
        }
    }
}

/// Command-line representation of risk levels
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RiskArg {
    None,
    Low,
    Medium,
    High,
}

impl From<RiskArg> for RiskLevel {
    fn from(val: RiskArg) -> Self {
        match val {
            RiskArg::None => RiskLevel::None,
            RiskArg::Low => RiskLevel::Low,
            RiskArg::Medium => RiskLevel::Medium,
            RiskArg::High => RiskLevel::High,
        }
    }
}

/// Command-line representation of step status values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StepStatusArg {
    Pending,
    InProgress,
    Completed,
    Skipped,
    Failed,
}

impl From<StepStatusArg> for StepStatus {
    fn from(val: StepStatusArg) -> Self {
        match val {
            StepStatusArg::Pending => StepStatus::Pending,
            StepStatusArg::InProgress => StepStatus::InProgress,
            StepStatusArg::Completed => StepStatus::Completed,
            StepStatusArg::Skipped => StepStatus::Skipped,
            StepStatusArg::Failed => StepStatus::Failed,
        }
    }
}

/// Command-line representation of plan phases
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PhaseArg {
    Analysis,
    Strategy,
    Presentation,
    Approval,
    Execution,
    Completed,
    Cancelled,
}

impl From<PhaseArg> for PlanPhase {
    fn from(val: PhaseArg) -> Self {
        match val {
            PhaseArg::Analysis => PlanPhase::Analysis,
            PhaseArg::Strategy => PlanPhase::Strategy,
            PhaseArg::Presentation => PlanPhase::Presentation,
            PhaseArg::Approval => PlanPhase::Approval,
            PhaseArg::Execution => PlanPhase::Execution,
            PhaseArg::Completed => PlanPhase::Completed,
            PhaseArg::Cancelled => PlanPhase::Cancelled,
        }
    }
}
