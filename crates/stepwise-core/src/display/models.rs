//! Display implementations for domain models.

use std::fmt;

use crate::models::{
    ActionType, PlanPhase, PlanProgress, Priority, RiskLevel, StepAction, StepStatus,
    ValidationIssue, ValidationReport,
};

impl fmt::Display for PlanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` `{}`", self.action_type, self.target)?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::Cycle { title, .. } => {
                write!(f, "Circular dependency detected involving step \"{title}\"")
            }
            ValidationIssue::MissingDependency {
                title, dependency, ..
            } => write!(f, "Step \"{title}\" depends on missing step {dependency}"),
            ValidationIssue::EmptyPlan => write!(f, "Plan has no steps"),
            ValidationIssue::HighRiskWithoutRollback => write!(
                f,
                "Plan contains high-risk steps but has no rollback points"
            ),
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return writeln!(f, "✓ Plan is valid");
        }

        writeln!(f, "✗ Plan has {} issue(s):", self.issues.len())?;
        writeln!(f)?;
        for issue in &self.issues {
            writeln!(f, "- {issue}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} ({}/{})",
            self.title,
            self.completed_steps + self.skipped_steps,
            self.total_steps
        )?;
        writeln!(f)?;
        writeln!(f, "- **Phase**: {}", self.phase)?;
        writeln!(f, "- **Progress**: {:.0}%", self.percent_complete())?;
        writeln!(f, "- **Pending**: {}", self.pending_steps)?;
        writeln!(f, "- **In progress**: {}", self.in_progress_steps)?;
        writeln!(f, "- **Completed**: {}", self.completed_steps)?;
        writeln!(f, "- **Skipped**: {}", self.skipped_steps)?;
        writeln!(f, "- **Failed**: {}", self.failed_steps)?;
        Ok(())
    }
}
