//! JSON file persistence for a single plan.
//!
//! The engine itself never touches the filesystem. Hosts that want the
//! current plan to survive between runs (the `sw` binary does) read and
//! write it through a [`PlanStore`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{IoResultExt, PlannerError, Result},
    models::ExecutionPlan,
};

/// A plan document stored at a fixed path.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    /// Open a store at `path`, or at the default location when `None`.
    ///
    /// The default follows the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stepwise/plan.json` or
    /// `~/.local/share/stepwise/plan.json`. Parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::XdgDirectory` if the default location cannot
    /// be determined, or `PlannerError::FileSystem` if the parent directory
    /// cannot be created.
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = match path {
            Some(path) => path.as_ref().to_path_buf(),
            None => Self::default_path()?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).fs_context(parent)?;
            }
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored plan; `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` on read failure or
    /// `PlannerError::Serialization` if the file is not a plan document.
    pub fn load(&self) -> Result<Option<ExecutionPlan>> {
        if !self.path.exists() {
            debug!("No plan stored at {}", self.path.display());
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).fs_context(&self.path)?;
        let plan = serde_json::from_str(&json)?;
        debug!("Loaded plan from {}", self.path.display());
        Ok(Some(plan))
    }

    /// Write `plan`, replacing any previously stored plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Serialization` or `PlannerError::FileSystem`.
    pub fn save(&self, plan: &ExecutionPlan) -> Result<()> {
        let json = serde_json::to_string_pretty(plan)?;
        fs::write(&self.path, json).fs_context(&self.path)?;
        debug!("Saved plan {} to {}", plan.id, self.path.display());
        Ok(())
    }

    /// Remove the stored plan file if present.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the file exists but cannot be
    /// removed.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).fs_context(&self.path)?;
        }
        Ok(())
    }

    fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stepwise")
            .place_data_file("plan.json")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}
