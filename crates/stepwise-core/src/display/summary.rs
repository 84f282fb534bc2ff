//! Fixed-width plain-text summary of a plan.

use std::fmt;

use super::{datetime::UtcDateTime, dependency_titles, step_titles};
use crate::models::ExecutionPlan;

/// Width of the text between the left and right border.
const INNER_WIDTH: usize = 68;

/// Bordered plain-text summary of a plan, suited to logs and terminals
/// without Markdown rendering.
///
/// # Examples
///
/// ```rust
/// use stepwise_core::{display::PlanSummary, models::ExecutionPlan};
///
/// let plan = ExecutionPlan::new("Refactor auth", "Isolate sessions", "");
/// let text = PlanSummary(&plan).to_string();
/// assert!(text.contains("EXECUTION PLAN: Refactor auth"));
/// assert!(text.contains("No steps yet."));
/// ```
pub struct PlanSummary<'a>(pub &'a ExecutionPlan);

impl fmt::Display for PlanSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let analysis = &plan.analysis;
        let rule = "═".repeat(INNER_WIDTH + 2);
        let divider = "─".repeat(INNER_WIDTH);

        writeln!(f, "╔{rule}╗")?;
        row(f, &format!("EXECUTION PLAN: {}", plan.title))?;
        writeln!(f, "╠{rule}╣")?;
        row(f, &format!("Goal:    {}", plan.goal))?;
        row(f, &format!("Phase:   {}", plan.phase))?;
        row(f, &format!("Created: {}", UtcDateTime(&plan.created_at)))?;
        row(f, "")?;

        row(f, "ANALYSIS")?;
        row(f, &divider)?;
        row(f, &format!("Total steps:           {}", analysis.total_steps))?;
        row(f, &format!("Affected files:        {}", analysis.total_files))?;
        row(
            f,
            &format!("Estimated complexity:  {}", analysis.estimated_complexity),
        )?;
        row(
            f,
            &format!("Risk:                  {}", analysis.risk_assessment.badge()),
        )?;
        row(
            f,
            &format!(
                "Parallel groups:       {}",
                analysis.parallelizable_groups.len()
            ),
        )?;
        row(
            f,
            &format!("Rollback points:       {}", analysis.rollback_points.len()),
        )?;
        row(f, "")?;

        row(f, "STEPS")?;
        row(f, &divider)?;
        if plan.steps.is_empty() {
            row(f, "No steps yet.")?;
        }
        for (position, step) in plan.steps.iter().enumerate() {
            row(
                f,
                &format!(
                    "{}. {} {} {}",
                    position + 1,
                    step.status.glyph(),
                    step.risk.badge(),
                    step.title
                ),
            )?;
            row(
                f,
                &format!(
                    "   priority: {} | complexity: {}/5",
                    step.priority,
                    step.estimated_complexity.get()
                ),
            )?;
            if !step.affected_files.is_empty() {
                let files: Vec<&str> = step.affected_files.iter().map(String::as_str).collect();
                row(f, &format!("   files: {}", files.join(", ")))?;
            }
            if !step.dependencies.is_empty() {
                row(
                    f,
                    &format!("   depends on: {}", dependency_titles(plan, step).join(", ")),
                )?;
            }
        }

        if !analysis.critical_path.is_empty() {
            row(f, "")?;
            row(f, "CRITICAL PATH")?;
            row(f, &divider)?;
            row(f, &step_titles(plan, &analysis.critical_path).join(" → "))?;
        }

        writeln!(f, "╚{rule}╝")
    }
}

/// Write one bordered row, padding or truncating `content` to the inner width.
/// Line breaks and other control characters are flattened to spaces.
fn row(f: &mut fmt::Formatter<'_>, content: &str) -> fmt::Result {
    let content: String = content
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let length = content.chars().count();
    if length > INNER_WIDTH {
        let clipped: String = content.chars().take(INNER_WIDTH - 1).collect();
        writeln!(f, "║ {clipped}… ║")
    } else {
        writeln!(f, "║ {content}{} ║", " ".repeat(INNER_WIDTH - length))
    }
}
