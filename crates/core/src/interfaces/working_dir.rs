//! Working directory provider
//!
//! `resolve` and `relative` anchor relative paths somewhere. That anchor is
//! an explicit dependency of the dialect engines so resolution stays
//! deterministic under test and never reads hidden global state.

use crate::error::{Error, Result};

/// Source of the working directory used to anchor relative paths
///
/// Implementations must yield an absolute path in the dialect the consuming
/// engine interprets.
pub trait WorkingDir: Send + Sync {
    /// Current working directory as absolute text
    fn current_dir(&self) -> Result<String>;
}

/// Reads the working directory of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWorkingDir;

impl WorkingDir for ProcessWorkingDir {
    fn current_dir(&self) -> Result<String> {
        let dir = std::env::current_dir()?;
        dir.into_os_string().into_string().map_err(|raw| {
            tracing::debug!("process working directory is not valid Unicode: {raw:?}");
            Error::InvalidArgumentType {
                argument: "working directory",
            }
        })
    }
}

/// Fixed working directory, for tests and reproducible resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticWorkingDir {
    dir: String,
}

impl StaticWorkingDir {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

impl WorkingDir for StaticWorkingDir {
    fn current_dir(&self) -> Result<String> {
        Ok(self.dir.clone())
    }
}
