//! Plan lifecycle phases and the transition table between them.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Lifecycle stage of an execution plan.
///
/// ```text
/// analysis ⇄ strategy ⇄ presentation → approval → execution → completed
///               ↑                          │
///               └──────────────────────────┘
/// (every non-terminal phase may also move to cancelled)
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlanPhase {
    #[default]
    Analysis,
    Strategy,
    Presentation,
    Approval,
    Execution,
    Completed,
    Cancelled,
}

impl PlanPhase {
    /// All phases in lifecycle order.
    pub const ALL: [PlanPhase; 7] = [
        PlanPhase::Analysis,
        PlanPhase::Strategy,
        PlanPhase::Presentation,
        PlanPhase::Approval,
        PlanPhase::Execution,
        PlanPhase::Completed,
        PlanPhase::Cancelled,
    ];

    /// Phases reachable from `self` in a single transition.
    pub fn allowed_transitions(self) -> &'static [PlanPhase] {
        use PlanPhase::*;

        match self {
            Analysis => &[Strategy, Cancelled],
            Strategy => &[Presentation, Analysis, Cancelled],
            Presentation => &[Approval, Strategy, Cancelled],
            Approval => &[Execution, Strategy, Cancelled],
            Execution => &[Completed, Cancelled],
            Completed | Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, target: PlanPhase) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// Terminal phases have no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanPhase::Analysis => "analysis",
            PlanPhase::Strategy => "strategy",
            PlanPhase::Presentation => "presentation",
            PlanPhase::Approval => "approval",
            PlanPhase::Execution => "execution",
            PlanPhase::Completed => "completed",
            PlanPhase::Cancelled => "cancelled",
        }
    }
}

impl FromStr for PlanPhase {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        PlanPhase::ALL
            .into_iter()
            .find(|phase| phase.as_str() == wanted)
            .ok_or_else(|| {
                PlannerError::invalid_input("phase").with_reason(format!("Invalid phase: {s}"))
            })
    }
}
