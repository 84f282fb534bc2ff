//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
///
/// Engine operations that answer with a plain `bool` (unknown step ids,
/// rejected phase transitions) are reported to users through this type.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Pick success or failure from an engine outcome.
    pub fn from_outcome(
        outcome: bool,
        success: impl Into<String>,
        failure: impl Into<String>,
    ) -> Self {
        if outcome {
            Self::success(success)
        } else {
            Self::failure(failure)
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Step removed");
        assert_eq!(format!("{success}"), "Success: Step removed\n");

        let failure = OperationStatus::from_outcome(false, "moved", "Illegal transition");
        assert!(!failure.success);
        assert!(format!("{failure}").contains("Error: Illegal transition"));
    }
}
