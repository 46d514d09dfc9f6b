//! Path manipulation contract
//!
//! One trait, two conforming engines. Calling code names the capability it
//! needs (`&dyn PathApi` or a generic bound) and stays portable across
//! dialects; tests substitute an engine with a pinned working directory.
//! Semantics follow the Node.js `path` module, quirks included, so paths
//! written for one host mean the same thing everywhere.

use crate::error::Result;
use crate::types::ParsedPath;

/// Path manipulation for one dialect (POSIX or Windows).
///
/// All operations are pure text manipulation; nothing here touches the
/// filesystem. The only environmental input is the working directory, and
/// that arrives through the engine's injected [`WorkingDir`] provider, which
/// is why `relative`, `resolve` and `to_namespaced_path` are fallible.
///
/// [`WorkingDir`]: crate::interfaces::WorkingDir
pub trait PathApi: Send + Sync {
    /// Search-path list separator: `:` on POSIX, `;` on Windows
    fn delimiter(&self) -> &'static str;

    /// Path segment separator: `/` on POSIX, `\` on Windows
    fn separator(&self) -> &'static str;

    /// Last portion of `path`, like the Unix `basename` command.
    ///
    /// Trailing separators are ignored. When `suffix` is given, non-empty,
    /// and the segment ends with it without being the whole segment, it is
    /// stripped (`basename("/a/quux.html", Some(".html"))` is `quux`).
    /// A suffix equal to the entire input yields empty text. The Windows
    /// dialect ignores a leading drive prefix (`C:file` has basename `file`).
    fn basename(&self, path: &str, suffix: Option<&str>) -> String;

    /// Directory portion of `path`, like the Unix `dirname` command.
    ///
    /// Trailing separators are ignored. A path without separators yields
    /// `.`; a root is its own directory.
    fn dirname(&self, path: &str) -> String;

    /// Extension of the last segment, from its final `.` to the end.
    ///
    /// Empty when the segment has no dot, when its only dot is the leading
    /// character (dotfiles have no extension), or when the segment is `..`.
    fn extname(&self, path: &str) -> String;

    /// Build a path from a [`ParsedPath`], the inverse of [`parse`].
    ///
    /// Precedence when the record is partial or inconsistent: `dir` wins
    /// over `root`, `base` wins over `name` + `ext`. No separator is added
    /// after a bare root, and `ext` is used verbatim.
    ///
    /// [`parse`]: PathApi::parse
    fn format(&self, parsed: &ParsedPath) -> String;

    /// Whether `path` is anchored independent of any working directory.
    ///
    /// POSIX: a leading `/`. Windows: a leading separator (UNC paths
    /// included) or a separator-terminated drive (`C:\`); a bare drive
    /// (`C:`) is drive-relative, not absolute.
    fn is_absolute(&self, path: &str) -> bool;

    /// Join `segments` with the dialect separator and normalize the result.
    ///
    /// Zero-length segments are skipped; joining nothing yields `.`.
    fn join(&self, segments: &[&str]) -> String;

    /// Resolve `.` and `..` segments and collapse repeated separators.
    ///
    /// A single trailing separator is preserved. The Windows dialect
    /// rewrites `/` to `\` and keeps `..` from climbing past a root.
    /// Normalizing empty text yields `.`.
    fn normalize(&self, path: &str) -> String;

    /// Decompose `path` into root, dir, base, name and ext.
    ///
    /// Trailing separators are ignored, and `dir` falls back to the root
    /// when the last segment sits directly on it.
    fn parse(&self, path: &str) -> ParsedPath;

    /// Relative path from `from` to `to`, resolving both first.
    ///
    /// Equal paths (case-insensitively equal on Windows) yield empty text.
    /// On Windows, paths on different devices (drive letters or UNC
    /// servers) cannot be bridged with `..`, so `to` is returned fully
    /// resolved; shares on one server are walked like ordinary segments.
    fn relative(&self, from: &str, to: &str) -> Result<String>;

    /// Resolve `segments` right to left into an absolute path.
    ///
    /// Accumulation stops at the first absolute path; if none is found the
    /// working directory anchors the result. Zero-length segments are
    /// skipped, the output is normalized, and trailing separators are
    /// dropped. On Windows a drive-qualified segment pins the device:
    /// leftward segments on other devices are ignored, and a drive-relative
    /// tail (`C:file`) anchors on the working directory only when it
    /// already sits on that device, otherwise on the device root.
    fn resolve(&self, segments: &[&str]) -> Result<String>;

    /// Namespace-prefixed form of `path` on Windows; identity on POSIX.
    ///
    /// The path is resolved first, then prefixed: `\\?\` for
    /// drive-absolute results, `\\?\UNC\` for UNC results. Inputs that
    /// resolve to an already-namespaced or device form (`\\?\`, `\\.\`),
    /// or that are too short to classify, come back unchanged.
    fn to_namespaced_path(&self, path: &str) -> Result<String>;
}
