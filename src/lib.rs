//! pathway - Path manipulation for POSIX and Windows dialects
//!
//! This crate re-exports the engines from `pathway-core`:
//! - [`POSIX`] and [`WIN32`] for a fixed dialect
//! - [`native`] for the dialect of the host platform
//! - [`PathApi`] to stay dialect-agnostic behind a trait object
pub use pathway_core::*;
