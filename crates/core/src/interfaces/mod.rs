//! Contract seams of the pathway engines
//!
//! The traits here are the substitution points: `PathApi` is what calling
//! code depends on, `WorkingDir` is what the engines themselves depend on
//! instead of ambient process state.

use std::ffi::OsStr;

use crate::error::{Error, Result};

pub mod path_api;
pub mod working_dir;

pub use path_api::PathApi;
pub use working_dir::{ProcessWorkingDir, StaticWorkingDir, WorkingDir};

/// Admit a platform string into the text-only contract.
///
/// Path operations take `&str`, so non-text input cannot reach them
/// directly; platform strings (argv, env, directory listings) are the door
/// it arrives through. `argument` names the parameter for the error.
pub fn require_text<'a>(argument: &'static str, value: &'a OsStr) -> Result<&'a str> {
    value.to_str().ok_or(Error::InvalidArgumentType { argument })
}
