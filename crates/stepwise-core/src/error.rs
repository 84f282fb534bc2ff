//! Error types for the plan engine.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all engine operations.
///
/// Lookups of unknown steps and illegal phase edges are not errors; those
/// operations return `Ok(false)` so callers can probe cheaply. Structural
/// defects in a plan (cycles, dangling dependencies) are reported by the
/// validator rather than raised here.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// A plan operation was invoked before any plan was created or loaded
    #[error("No active plan. Create or import a plan first")]
    NoActivePlan,
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Extension trait attaching a path to I/O failures.
pub trait IoResultExt<T> {
    /// Map an I/O error into [`PlannerError::FileSystem`] for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| PlannerError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, PlannerError>;
