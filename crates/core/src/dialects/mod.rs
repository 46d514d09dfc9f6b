//! Path dialect engines
//!
//! One engine per path grammar. [`Posix`] and [`Win32`] both implement
//! [`PathApi`], so callers can hold either behind the trait and stay
//! dialect-agnostic.

pub mod posix;
pub(crate) mod segments;
pub mod windows;

// Re-export commonly used types
pub use posix::Posix;
pub use windows::Win32;

use crate::interfaces::PathApi;
use crate::types::ParsedPath;

/// POSIX engine anchored on the process working directory
pub const POSIX: Posix = Posix::new();

/// Windows engine anchored on the process working directory
pub const WIN32: Win32 = Win32::new();

/// Engine matching the host platform's path grammar
pub fn native() -> &'static dyn PathApi {
    #[cfg(windows)]
    {
        &WIN32
    }
    #[cfg(not(windows))]
    {
        &POSIX
    }
}

/// Assemble a path from parsed fields.
///
/// `dir` wins over `root`, `base` wins over `name` plus `ext`, and a `dir`
/// equal to the root is not followed by a separator of its own.
pub(crate) fn format_parsed(parsed: &ParsedPath, separator: &str) -> String {
    let dir = if parsed.dir.is_empty() {
        &parsed.root
    } else {
        &parsed.dir
    };
    let base = if parsed.base.is_empty() {
        format!("{}{}", parsed.name, parsed.ext)
    } else {
        parsed.base.clone()
    };
    if dir.is_empty() {
        return base;
    }
    if *dir == parsed.root {
        format!("{dir}{base}")
    } else {
        format!("{dir}{separator}{base}")
    }
}
