//! Markdown rendering of a plan.

use std::fmt;

use super::{analysis::AnalysisMarkdown, datetime::UtcDateTime, dependency_titles};
use crate::models::{ExecutionPlan, PlanStep, StepStatus};

/// Markdown document describing a plan: metadata, the analysis section and
/// one section per step.
pub struct PlanMarkdown<'a>(pub &'a ExecutionPlan);

impl fmt::Display for PlanMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        writeln!(f, "# {}", plan.title)?;
        writeln!(f)?;

        if !plan.description.is_empty() {
            writeln!(f, "{}", plan.description)?;
            writeln!(f)?;
        }

        writeln!(f, "- **ID**: {}", plan.id)?;
        writeln!(f, "- **Goal**: {}", plan.goal)?;
        writeln!(f, "- **Phase**: {}", plan.phase)?;
        writeln!(f, "- **Version**: {}", plan.metadata.version)?;
        if let Some(author) = &plan.metadata.author {
            writeln!(f, "- **Author**: {author}")?;
        }
        if !plan.metadata.tags.is_empty() {
            writeln!(f, "- **Tags**: {}", plan.metadata.tags.join(", "))?;
        }
        writeln!(f, "- **Created**: {}", UtcDateTime(&plan.created_at))?;
        writeln!(f, "- **Updated**: {}", UtcDateTime(&plan.updated_at))?;
        if let Some(approved) = &plan.approved_at {
            writeln!(f, "- **Approved**: {}", UtcDateTime(approved))?;
        }
        if let Some(completed) = &plan.completed_at {
            writeln!(f, "- **Completed**: {}", UtcDateTime(completed))?;
        }

        writeln!(f)?;
        write!(f, "{}", AnalysisMarkdown(plan))?;

        if plan.steps.is_empty() {
            writeln!(f, "\nNo steps in this plan.")?;
            return Ok(());
        }

        writeln!(f, "\n## Steps")?;
        for (position, step) in plan.steps.iter().enumerate() {
            writeln!(f)?;
            fmt_step(f, plan, position + 1, step)?;
        }

        Ok(())
    }
}

fn fmt_step(
    f: &mut fmt::Formatter<'_>,
    plan: &ExecutionPlan,
    number: usize,
    step: &PlanStep,
) -> fmt::Result {
    let checkbox = if step.status == StepStatus::Completed {
        "[x]"
    } else {
        "[ ]"
    };
    writeln!(f, "### {checkbox} {number}. {}", step.title)?;
    writeln!(f)?;

    if !step.description.is_empty() {
        writeln!(f, "{}", step.description)?;
        writeln!(f)?;
    }

    writeln!(f, "- **ID**: {}", step.id)?;
    writeln!(f, "- **Status**: {}", step.status.with_icon())?;
    writeln!(f, "- **Priority**: {}", step.priority)?;
    writeln!(f, "- **Risk**: {}", step.risk)?;
    writeln!(
        f,
        "- **Complexity**: {}/5",
        step.estimated_complexity.get()
    )?;
    if !step.affected_files.is_empty() {
        let files: Vec<String> = step
            .affected_files
            .iter()
            .map(|file| format!("`{file}`"))
            .collect();
        writeln!(f, "- **Files**: {}", files.join(", "))?;
    }
    if !step.dependencies.is_empty() {
        writeln!(
            f,
            "- **Depends on**: {}",
            dependency_titles(plan, step).join(", ")
        )?;
    }
    let dependents: Vec<&str> = plan
        .dependents_of(&step.id)
        .map(|dependent| dependent.title.as_str())
        .collect();
    if !dependents.is_empty() {
        writeln!(f, "- **Depended on by**: {}", dependents.join(", "))?;
    }
    if let Some(notes) = &step.notes {
        writeln!(f, "- **Notes**: {notes}")?;
    }

    if !step.actions.is_empty() {
        writeln!(f)?;
        writeln!(f, "#### Actions")?;
        writeln!(f)?;
        for (index, action) in step.actions.iter().enumerate() {
            writeln!(f, "{}. {action}", index + 1)?;
        }
    }

    Ok(())
}

/// Markdown section for a single step, numbered by its position in the plan.
pub struct StepMarkdown<'a> {
    pub plan: &'a ExecutionPlan,
    pub step: &'a PlanStep,
}

impl fmt::Display for StepMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = self
            .plan
            .steps
            .iter()
            .position(|step| step.id == self.step.id)
            .map_or(0, |position| position + 1);
        fmt_step(f, self.plan, number, self.step)
    }
}

impl fmt::Display for ExecutionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&PlanMarkdown(self), f)
    }
}
