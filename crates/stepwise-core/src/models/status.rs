//! Status, priority and risk enumerations for steps.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Type-safe enumeration of step statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Step has not been started
    #[default]
    Pending,

    /// Step is being worked on
    InProgress,

    /// Step finished successfully
    Completed,

    /// Step was deliberately not performed
    Skipped,

    /// Step was attempted and did not succeed
    Failed,
}

impl FromStr for StepStatus {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(StepStatus::Pending),
            "in_progress" | "inprogress" | "in-progress" => Ok(StepStatus::InProgress),
            "completed" | "done" => Ok(StepStatus::Completed),
            "skipped" => Ok(StepStatus::Skipped),
            "failed" => Ok(StepStatus::Failed),
            _ => Err(PlannerError::invalid_input("status")
                .with_reason(format!("Invalid step status: {s}"))),
        }
    }
}

impl StepStatus {
    /// Wire representation, matching the serde encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::InProgress => "in_progress",
            StepStatus::Completed => "completed",
            StepStatus::Skipped => "skipped",
            StepStatus::Failed => "failed",
        }
    }

    /// Single-character glyph used in compact listings.
    pub fn glyph(&self) -> char {
        match self {
            StepStatus::Pending => '○',
            StepStatus::InProgress => '➤',
            StepStatus::Completed => '✓',
            StepStatus::Skipped => '↷',
            StepStatus::Failed => '✗',
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise_core::models::StepStatus;
    ///
    /// assert_eq!(StepStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(StepStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(StepStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Pending => "○ Pending",
            StepStatus::InProgress => "➤ In Progress",
            StepStatus::Completed => "✓ Completed",
            StepStatus::Skipped => "↷ Skipped",
            StepStatus::Failed => "✗ Failed",
        }
    }
}

/// Relative importance of a step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Priority::Critical),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(PlannerError::invalid_input("priority")
                .with_reason(format!("Invalid priority: {s}"))),
        }
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Risk rating of a step.
///
/// Variants are declared in ascending order so that `Ord` yields
/// `None < Low < Medium < High`, which is what risk aggregation relies on.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl FromStr for RiskLevel {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(RiskLevel::None),
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(PlannerError::invalid_input("risk")
                .with_reason(format!("Invalid risk level: {s}"))),
        }
    }
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "none",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Bracketed upper-case badge, e.g. `[HIGH]`.
    pub fn badge(&self) -> &'static str {
        match self {
            RiskLevel::None => "[NONE]",
            RiskLevel::Low => "[LOW]",
            RiskLevel::Medium => "[MEDIUM]",
            RiskLevel::High => "[HIGH]",
        }
    }
}
