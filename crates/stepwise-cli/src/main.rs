//! Stepwise CLI Application
//!
//! Command-line interface for the Stepwise execution plan engine. Each
//! invocation loads the current plan from the plan document, runs one
//! command and writes the plan back when the command changed it.

mod args;
mod cli;
mod handler;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handler::Cli;
use log::info;
use renderer::TerminalRenderer;
use stepwise_core::{PlanStore, PlannerBuilder};
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        plan_file,
        no_color,
        command,
    } = Args::parse();

    let store = PlanStore::open(plan_file).context("Failed to open plan store")?;
    let plan = store
        .load()
        .with_context(|| format!("Failed to load plan from {}", store.path().display()))?;
    let planner = PlannerBuilder::new().with_plan(plan).build();

    let renderer = TerminalRenderer::new(!no_color);

    info!("Stepwise started with plan file {}", store.path().display());

    let cli = Cli::new(planner, store, renderer);
    match command {
        Some(Plan { command }) => cli.handle_plan_command(command),
        Some(Step { command }) => cli.handle_step_command(command),
        None => cli.show_overview(),
    }
}
