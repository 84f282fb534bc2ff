//! Step operations for the Planner.
//!
//! Every structural mutation ends by rebuilding the plan's analysis, so the
//! analysis a caller observes always matches the steps.

use log::{debug, warn};

use super::Planner;
use crate::{
    error::Result,
    models::{step::dedup_dependencies, PlanStep, StepId, StepStatus},
    params::{StepDraft, StepUpdate},
};

impl Planner {
    /// Append a step built from `draft` to the current plan.
    ///
    /// The engine assigns the id and sets the status to pending. Dependencies
    /// are not checked here; an id that does not exist yet is allowed and
    /// shows up in validation until the referenced step is added.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` when there is no current plan, or
    /// `PlannerError::InvalidInput` if the title is blank.
    pub fn add_step(&mut self, draft: StepDraft) -> Result<PlanStep> {
        draft.validate()?;
        let plan = self.require_plan_mut()?;

        let step = PlanStep {
            id: StepId::generate(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            risk: draft.risk,
            estimated_complexity: draft.estimated_complexity,
            dependencies: dedup_dependencies(draft.dependencies),
            affected_files: draft.affected_files.into_iter().collect(),
            actions: draft.actions,
            status: StepStatus::Pending,
            notes: None,
        };

        debug!("Adding step {} '{}' to plan {}", step.id, step.title, plan.id);
        plan.steps.push(step.clone());
        plan.reanalyze();
        Ok(step)
    }

    /// Add several drafts, in order. Equivalent to calling
    /// [`add_step`](Self::add_step) once per draft.
    ///
    /// # Errors
    ///
    /// Stops at the first failing draft; drafts before it remain added.
    pub fn add_steps<I>(&mut self, drafts: I) -> Result<Vec<PlanStep>>
    where
        I: IntoIterator<Item = StepDraft>,
    {
        drafts.into_iter().map(|draft| self.add_step(draft)).collect()
    }

    /// Edit descriptive fields of an existing step.
    ///
    /// Returns `Ok(false)` if no step has that id.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` when there is no current plan, or
    /// `PlannerError::InvalidInput` if the new title is blank.
    pub fn update_step(&mut self, id: &StepId, update: StepUpdate) -> Result<bool> {
        update.validate()?;
        let plan = self.require_plan_mut()?;
        let Some(step) = plan.step_mut(id) else {
            warn!("Cannot update unknown step {id}");
            return Ok(false);
        };

        if let Some(title) = update.title {
            step.title = title;
        }
        if let Some(description) = update.description {
            step.description = description;
        }
        if let Some(priority) = update.priority {
            step.priority = priority;
        }
        if let Some(risk) = update.risk {
            step.risk = risk;
        }
        if let Some(complexity) = update.estimated_complexity {
            step.estimated_complexity = complexity;
        }
        if let Some(dependencies) = update.dependencies {
            step.dependencies = dedup_dependencies(dependencies);
        }
        if let Some(files) = update.affected_files {
            step.affected_files = files.into_iter().collect();
        }
        if let Some(actions) = update.actions {
            step.actions = actions;
        }

        debug!("Updated step {id}");
        plan.reanalyze();
        Ok(true)
    }

    /// Delete a step and strip its id from every other step's dependencies.
    ///
    /// Dependents are kept, never deleted in cascade. Returns `Ok(false)` if
    /// no step has that id.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` when there is no current plan.
    pub fn remove_step(&mut self, id: &StepId) -> Result<bool> {
        let plan = self.require_plan_mut()?;
        let Some(position) = plan.steps.iter().position(|step| &step.id == id) else {
            warn!("Cannot remove unknown step {id}");
            return Ok(false);
        };

        let removed = plan.steps.remove(position);
        for step in &mut plan.steps {
            step.dependencies.retain(|dependency| dependency != id);
        }

        debug!("Removed step {} '{}'", removed.id, removed.title);
        plan.reanalyze();
        Ok(true)
    }

    /// Move the named steps to the front in the given order.
    ///
    /// Steps not named keep their relative order after them. Unknown and
    /// repeated ids are ignored. Only display order changes; dependency
    /// semantics are unaffected.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` when there is no current plan.
    pub fn reorder_steps(&mut self, ids: &[StepId]) -> Result<()> {
        let plan = self.require_plan_mut()?;

        let mut remaining = std::mem::take(&mut plan.steps);
        let mut ordered = Vec::with_capacity(remaining.len());
        for id in ids {
            if let Some(position) = remaining.iter().position(|step| &step.id == id) {
                ordered.push(remaining.remove(position));
            }
        }
        ordered.append(&mut remaining);
        plan.steps = ordered;

        debug!("Reordered steps of plan {}", plan.id);
        plan.reanalyze();
        Ok(())
    }

    /// Record a status change for a step, optionally with a note.
    ///
    /// This is the only path through which a step's status changes. A `None`
    /// note keeps any previously recorded note. Returns `Ok(false)` if no
    /// step has that id.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` when there is no current plan.
    pub fn update_step_status(
        &mut self,
        id: &StepId,
        status: StepStatus,
        note: Option<String>,
    ) -> Result<bool> {
        let plan = self.require_plan_mut()?;
        let Some(step) = plan.step_mut(id) else {
            warn!("Cannot update status of unknown step {id}");
            return Ok(false);
        };

        debug!("Step {id}: {:?} -> {status:?}", step.status);
        step.status = status;
        if note.is_some() {
            step.notes = note;
        }
        plan.touch();
        Ok(true)
    }
}
