//! Typed operations a step intends to perform.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Kind of operation recorded on a step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    CreateFile,
    ModifyFile,
    DeleteFile,
    RenameFile,
    MoveFile,
    AddDependency,
    RemoveDependency,
    RunCommand,
    RunTests,
    Refactor,
    Document,
    Review,
}

impl ActionType {
    pub const ALL: [ActionType; 12] = [
        ActionType::CreateFile,
        ActionType::ModifyFile,
        ActionType::DeleteFile,
        ActionType::RenameFile,
        ActionType::MoveFile,
        ActionType::AddDependency,
        ActionType::RemoveDependency,
        ActionType::RunCommand,
        ActionType::RunTests,
        ActionType::Refactor,
        ActionType::Document,
        ActionType::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::CreateFile => "create_file",
            ActionType::ModifyFile => "modify_file",
            ActionType::DeleteFile => "delete_file",
            ActionType::RenameFile => "rename_file",
            ActionType::MoveFile => "move_file",
            ActionType::AddDependency => "add_dependency",
            ActionType::RemoveDependency => "remove_dependency",
            ActionType::RunCommand => "run_command",
            ActionType::RunTests => "run_tests",
            ActionType::Refactor => "refactor",
            ActionType::Document => "document",
            ActionType::Review => "review",
        }
    }
}

impl FromStr for ActionType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase().replace('-', "_");
        ActionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                PlannerError::invalid_input("action")
                    .with_reason(format!("Invalid action type: {s}"))
            })
    }
}

/// One operation a step intends to perform, e.g. modifying a file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepAction {
    /// What kind of operation this is
    #[serde(rename = "type")]
    pub action_type: ActionType,

    /// File path, package name or command the action applies to
    pub target: String,

    /// Human readable explanation of the action
    #[serde(default)]
    pub description: String,

    /// Free-form extra data supplied by the proposer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl StepAction {
    pub fn new(
        action_type: ActionType,
        target: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            action_type,
            target: target.into(),
            description: description.into(),
            details: None,
        }
    }
}

impl FromStr for StepAction {
    type Err = PlannerError;

    /// Parse the compact `type:target[:description]` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let kind = parts.next().unwrap_or_default().trim();
        let target = parts.next().map(str::trim).unwrap_or_default();
        if target.is_empty() {
            return Err(PlannerError::invalid_input("action")
                .with_reason(format!("Expected 'type:target[:description]', got '{s}'")));
        }
        let description = parts.next().map(str::trim).unwrap_or_default();
        Ok(StepAction::new(kind.parse()?, target, description))
    }
}
