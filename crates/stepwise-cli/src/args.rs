use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, StepCommands};

/// Main command-line interface for the Stepwise execution plan engine
///
/// Stepwise breaks a goal into dependency-ordered steps, walks the plan
/// through its approval lifecycle and tells you which steps can run next.
/// The current plan is kept in a JSON document between invocations.
#[derive(Parser)]
#[command(version, about, name = "sw")]
pub struct Args {
    /// Path to the plan document. Defaults to
    /// $XDG_DATA_HOME/stepwise/plan.json
    #[arg(long, global = true)]
    pub plan_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Stepwise CLI
///
/// - `plan`: Operations on the current plan (create, phase, validate, etc.)
/// - `step`: Operations on the steps of the current plan
///
/// Without a command the summary of the current plan is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the current plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage steps within the current plan
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
}
