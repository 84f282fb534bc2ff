//! Command handlers: run a parsed command against the planner, persist the
//! result and render feedback.

use std::fs;

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use stepwise_core::{
    models::{ExecutionPlan, PlanPhase, StepId, StepStatus},
    params::{CreatePlan, StepDraft, StepUpdate},
    AnalysisMarkdown, OperationStatus, Planner, PlannerBuilder, PlanStore, StepMarkdown,
};

use crate::{
    cli::{PlanCommands, StepCommands},
    renderer::TerminalRenderer,
};

/// Runs one command per process against the persisted current plan
pub struct Cli {
    planner: Planner,
    store: PlanStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, store: PlanStore, renderer: TerminalRenderer) -> Self {
        Self {
            planner,
            store,
            renderer,
        }
    }

    /// Show the summary of the current plan, or a hint when there is none
    pub fn show_overview(&self) -> Result<()> {
        match self.planner.current_plan() {
            Some(plan) => self.renderer.render_plain(&plan.to_summary()),
            None => self
                .renderer
                .render("No active plan. Create one with `sw plan create`."),
        }
    }

    pub fn handle_plan_command(mut self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let params = CreatePlan::from(&args);
                let mut builder = PlannerBuilder::new().with_default_tags(args.tags);
                if let Some(author) = args.author {
                    builder = builder.with_author(author);
                }
                self.planner = builder.build();

                let plan = self.planner.create_plan(&params)?;
                let message = format!("Created plan {}: {}", plan.id, plan.title);
                self.finish(OperationStatus::success(message))
            }
            PlanCommands::Show => self.renderer.render(&self.plan()?.to_markdown()),
            PlanCommands::Summary => self.renderer.render_plain(&self.plan()?.to_summary()),
            PlanCommands::Analyze => self
                .renderer
                .render(&AnalysisMarkdown(self.plan()?).to_string()),
            PlanCommands::Validate(args) => {
                let report = self.planner.validate()?;
                self.renderer.render(&report.to_string())?;
                if args.strict && !report.is_valid() {
                    bail!("Plan failed validation with {} issue(s)", report.issues.len());
                }
                Ok(())
            }
            PlanCommands::Phase(args) => {
                let target = PlanPhase::from(args.phase);
                let from = self.plan()?.phase;
                let moved = self.planner.transition_phase(target)?;
                let status = OperationStatus::from_outcome(
                    moved,
                    format!("Plan moved from {from} to {target}"),
                    format!(
                        "Cannot move plan from {from} to {target}. Allowed: {}",
                        allowed_phases(from)
                    ),
                );
                self.finish(status)
            }
            PlanCommands::Progress => self.renderer.render(&self.planner.progress()?.to_string()),
            PlanCommands::Export(args) => {
                let json = self.planner.export_json()?;
                match args.output {
                    Some(path) => {
                        fs::write(&path, json)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        self.renderer.render(
                            &OperationStatus::success(format!(
                                "Exported plan to {}",
                                path.display()
                            ))
                            .to_string(),
                        )
                    }
                    None => self.renderer.render_plain(&json),
                }
            }
            PlanCommands::Import(args) => {
                let json = fs::read_to_string(&args.file)
                    .with_context(|| format!("Failed to read {}", args.file.display()))?;
                let plan = self
                    .planner
                    .import_json(&json)
                    .context("Failed to import plan")?;
                let message = format!(
                    "Imported plan {}: {} ({} steps)",
                    plan.id,
                    plan.title,
                    plan.steps.len()
                );
                self.finish(OperationStatus::success(message))
            }
            PlanCommands::Schema => {
                let schema = schemars::schema_for!(ExecutionPlan);
                self.renderer
                    .render_plain(&serde_json::to_string_pretty(&schema)?)
            }
            PlanCommands::Clear => {
                let status = match self.planner.clear_plan() {
                    Some(plan) => OperationStatus::success(format!("Cleared plan {}", plan.id)),
                    None => OperationStatus::success("No plan to clear"),
                };
                self.finish(status)
            }
        }
    }

    pub fn handle_step_command(mut self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Add(args) => {
                let draft = StepDraft::try_from(args)?;
                let step = self.planner.add_step(draft)?;
                self.finish(OperationStatus::success(format!(
                    "Added step {}: {}",
                    step.id, step.title
                )))
            }
            StepCommands::AddBatch(args) => {
                let json = fs::read_to_string(&args.file)
                    .with_context(|| format!("Failed to read {}", args.file.display()))?;
                let drafts: Vec<StepDraft> = serde_json::from_str(&json)
                    .with_context(|| format!("Invalid step drafts in {}", args.file.display()))?;
                let steps = self.planner.add_steps(drafts)?;
                let lines: Vec<String> = steps
                    .iter()
                    .map(|step| format!("Added step {}: {}", step.id, step.title))
                    .collect();
                self.finish(OperationStatus::success(lines.join("\n")))
            }
            StepCommands::Update(args) => {
                let id = StepId::from(args.id.as_str());
                let update = StepUpdate::try_from(args)?;
                if update.is_empty() {
                    bail!("Nothing to update for step {id}");
                }
                let updated = self.planner.update_step(&id, update)?;
                self.finish(OperationStatus::from_outcome(
                    updated,
                    format!("Updated step {id}"),
                    format!("Step {id} not found"),
                ))
            }
            StepCommands::Remove(args) => {
                let id = StepId::from(args.id);
                let removed = self.planner.remove_step(&id)?;
                self.finish(OperationStatus::from_outcome(
                    removed,
                    format!("Removed step {id}"),
                    format!("Step {id} not found"),
                ))
            }
            StepCommands::Reorder(args) => {
                let ids: Vec<StepId> = args.ids.into_iter().map(StepId::from).collect();
                self.planner.reorder_steps(&ids)?;
                self.finish(OperationStatus::success("Reordered steps"))
            }
            StepCommands::Status(args) => {
                let id = StepId::from(args.id);
                let status: StepStatus = args.status.into();
                let changed = self.planner.update_step_status(&id, status, args.note)?;
                self.finish(OperationStatus::from_outcome(
                    changed,
                    format!("Step {id} is now {status}"),
                    format!("Step {id} not found"),
                ))
            }
            StepCommands::Show(args) => {
                let id = StepId::from(args.id);
                let plan = self.plan()?;
                let step = plan.step(&id).ok_or_else(|| anyhow!("Step {id} not found"))?;
                self.renderer
                    .render(&StepMarkdown { plan, step }.to_string())
            }
            StepCommands::Next => {
                let plan = self.plan()?;
                match plan.next_step() {
                    Some(step) => self.renderer.render(&StepMarkdown { plan, step }.to_string()),
                    None => self.renderer.render("No step is ready to run."),
                }
            }
            StepCommands::Ready => {
                let ready = self.planner.parallel_steps()?;
                if ready.is_empty() {
                    return self.renderer.render("No steps are ready to run.");
                }
                let lines: Vec<String> = ready
                    .iter()
                    .map(|step| format!("- `{}` {}", step.id, step.title))
                    .collect();
                self.renderer
                    .render(&format!("## Ready steps\n\n{}", lines.join("\n")))
            }
        }
    }

    fn plan(&self) -> Result<&ExecutionPlan> {
        Ok(self.planner.require_plan()?)
    }

    /// Persist after a successful mutation and report; failures become errors
    fn finish(&self, status: OperationStatus) -> Result<()> {
        if !status.success {
            bail!(status.message);
        }

        let persisted = match self.planner.current_plan() {
            Some(plan) => self.store.save(plan),
            None => self.store.clear(),
        };
        persisted.with_context(|| {
            format!("Failed to persist plan at {}", self.store.path().display())
        })?;
        debug!("Persisted plan state to {}", self.store.path().display());

        self.renderer.render(&status.to_string())
    }
}

fn allowed_phases(from: PlanPhase) -> String {
    let allowed: Vec<&str> = from
        .allowed_transitions()
        .iter()
        .map(|phase| phase.as_str())
        .collect();
    if allowed.is_empty() {
        "none, the plan is finished".to_string()
    } else {
        allowed.join(", ")
    }
}
