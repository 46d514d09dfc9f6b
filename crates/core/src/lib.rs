//! pathway-core - Dialect-aware path manipulation engines
//!
//! This crate provides functionality to:
//! - Normalize, join, resolve, and relativize paths under POSIX and Windows rules
//! - Split paths into root, dir, base, name, and ext and assemble them back
//! - Anchor relative paths on an injected working directory provider
pub mod dialects;
pub mod error;
pub mod interfaces;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use dialects::{native, Posix, Win32, POSIX, WIN32};
pub use interfaces::{require_text, PathApi, ProcessWorkingDir, StaticWorkingDir, WorkingDir};
