use serde::{Deserialize, Serialize};

/// Structural breakdown of a path, as produced by `parse` and consumed by
/// `format`.
///
/// For `/home/user/file.txt` the POSIX dialect yields root `/`, dir
/// `/home/user`, base `file.txt`, name `file`, ext `.txt`. Every field may
/// be empty; `format` accepts partial records and applies the documented
/// precedence (`dir` over `root`, `base` over `name` + `ext`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedPath {
    /// Anchor of the path: `/`, `\`, `C:`, `C:\` or `\\server\share\`
    pub root: String,
    /// Directory portion, including the root
    pub dir: String,
    /// Last segment, extension included
    pub base: String,
    /// Last segment without its extension
    pub name: String,
    /// Extension of the last segment, leading dot included
    pub ext: String,
}

impl ParsedPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = ext.into();
        self
    }
}
