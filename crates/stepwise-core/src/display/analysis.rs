//! Markdown rendering of a plan's derived analysis.

use std::fmt;

use super::step_titles;
use crate::models::ExecutionPlan;

/// The "Analysis" section of a plan report: a metrics table followed by the
/// critical path, parallelizable groups and rollback points by title.
pub struct AnalysisMarkdown<'a>(pub &'a ExecutionPlan);

impl fmt::Display for AnalysisMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let analysis = &plan.analysis;

        writeln!(f, "## Analysis")?;
        writeln!(f)?;
        writeln!(f, "| Metric | Value |")?;
        writeln!(f, "|--------|-------|")?;
        writeln!(f, "| Total steps | {} |", analysis.total_steps)?;
        writeln!(f, "| Affected files | {} |", analysis.total_files)?;
        writeln!(
            f,
            "| Estimated complexity | {} |",
            analysis.estimated_complexity
        )?;
        writeln!(f, "| Risk | {} |", analysis.risk_assessment)?;
        writeln!(
            f,
            "| Critical path length | {} |",
            analysis.critical_path.len()
        )?;
        writeln!(
            f,
            "| Parallelizable groups | {} |",
            analysis.parallelizable_groups.len()
        )?;
        writeln!(f, "| Rollback points | {} |", analysis.rollback_points.len())?;

        if analysis.critical_path.is_empty()
            && analysis.parallelizable_groups.is_empty()
            && analysis.rollback_points.is_empty()
        {
            return Ok(());
        }

        writeln!(f)?;
        if !analysis.critical_path.is_empty() {
            writeln!(
                f,
                "- **Critical path**: {}",
                step_titles(plan, &analysis.critical_path).join(" → ")
            )?;
        }
        for (index, group) in analysis.parallelizable_groups.iter().enumerate() {
            writeln!(
                f,
                "- **Parallel group {}**: {}",
                index + 1,
                step_titles(plan, group).join(", ")
            )?;
        }
        if !analysis.rollback_points.is_empty() {
            writeln!(
                f,
                "- **Rollback points**: {}",
                step_titles(plan, &analysis.rollback_points).join(", ")
            )?;
        }

        Ok(())
    }
}
