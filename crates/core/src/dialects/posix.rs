//! POSIX dialect engine

use crate::dialects::{format_parsed, segments};
use crate::error::Result;
use crate::interfaces::{PathApi, ProcessWorkingDir, WorkingDir};
use crate::types::ParsedPath;

pub(crate) fn is_posix_sep(c: char) -> bool {
    c == '/'
}

/// POSIX path engine: forward slashes, single `/` root, case-sensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Posix<W = ProcessWorkingDir> {
    working_dir: W,
}

impl Posix<ProcessWorkingDir> {
    /// Engine anchored on the process working directory
    pub const fn new() -> Self {
        Self {
            working_dir: ProcessWorkingDir,
        }
    }
}

impl<W: WorkingDir> Posix<W> {
    /// Engine anchored on an explicit working directory provider
    pub fn with_working_dir(working_dir: W) -> Self {
        Self { working_dir }
    }

    /// Working directory forced into POSIX syntax.
    ///
    /// A Windows-shaped directory (drive prefix, backslashes) is cut down to
    /// its slash-rooted part so resolution stays inside the dialect.
    fn posix_cwd(&self) -> Result<String> {
        let raw = self.working_dir.current_dir()?;
        if raw.starts_with('/') {
            return Ok(raw);
        }
        let slashed = raw.replace('\\', "/");
        match slashed.find('/') {
            Some(idx) => Ok(slashed[idx..].to_string()),
            None => Ok(slashed),
        }
    }
}

impl<W: WorkingDir> PathApi for Posix<W> {
    fn delimiter(&self) -> &'static str {
        ":"
    }

    fn separator(&self) -> &'static str {
        "/"
    }

    fn basename(&self, path: &str, suffix: Option<&str>) -> String {
        segments::basename_of(path, 0, suffix, is_posix_sep)
    }

    fn dirname(&self, path: &str) -> String {
        if path.is_empty() {
            return ".".to_string();
        }
        let bytes = path.as_bytes();
        let has_root = bytes[0] == b'/';
        let mut end: Option<usize> = None;
        let mut matched_segment = false;
        for i in (1..bytes.len()).rev() {
            if bytes[i] == b'/' {
                if matched_segment {
                    end = Some(i);
                    break;
                }
            } else {
                matched_segment = true;
            }
        }
        match end {
            // `//a` keeps its doubled root
            Some(1) if has_root => "//".to_string(),
            Some(end) => path[..end].to_string(),
            None if has_root => "/".to_string(),
            None => ".".to_string(),
        }
    }

    fn extname(&self, path: &str) -> String {
        let Some((start, end)) = segments::last_segment_range(path, 0, is_posix_sep) else {
            return String::new();
        };
        let segment = &path[start..end];
        segment[segment.len() - segments::ext_len(segment)..].to_string()
    }

    fn format(&self, parsed: &ParsedPath) -> String {
        format_parsed(parsed, self.separator())
    }

    fn is_absolute(&self, path: &str) -> bool {
        path.starts_with('/')
    }

    fn join(&self, segments: &[&str]) -> String {
        let parts: Vec<&str> = segments.iter().copied().filter(|s| !s.is_empty()).collect();
        if parts.is_empty() {
            return ".".to_string();
        }
        self.normalize(&parts.join("/"))
    }

    fn normalize(&self, path: &str) -> String {
        if path.is_empty() {
            return ".".to_string();
        }
        let absolute = path.starts_with('/');
        let trailing = path.ends_with('/');
        let collapsed = segments::collapse(path, !absolute, is_posix_sep).join("/");
        if collapsed.is_empty() {
            if absolute {
                return "/".to_string();
            }
            return if trailing {
                "./".to_string()
            } else {
                ".".to_string()
            };
        }
        let mut out = String::with_capacity(collapsed.len() + 2);
        if absolute {
            out.push('/');
        }
        out.push_str(&collapsed);
        if trailing {
            out.push('/');
        }
        out
    }

    fn parse(&self, path: &str) -> ParsedPath {
        let mut parsed = ParsedPath::default();
        if path.is_empty() {
            return parsed;
        }
        let absolute = path.starts_with('/');
        if absolute {
            parsed.root = "/".to_string();
        }
        let floor = usize::from(absolute);
        let Some((start, end)) = segments::last_segment_range(path, floor, is_posix_sep) else {
            parsed.dir = parsed.root.clone();
            return parsed;
        };
        let segment = &path[start..end];
        let ext_len = segments::ext_len(segment);
        parsed.base = segment.to_string();
        parsed.name = segment[..segment.len() - ext_len].to_string();
        parsed.ext = segment[segment.len() - ext_len..].to_string();
        parsed.dir = if start > floor {
            path[..start - 1].to_string()
        } else {
            parsed.root.clone()
        };
        parsed
    }

    fn relative(&self, from: &str, to: &str) -> Result<String> {
        if from == to {
            return Ok(String::new());
        }
        let from = self.resolve(&[from])?;
        let to = self.resolve(&[to])?;
        if from == to {
            return Ok(String::new());
        }
        let from_parts: Vec<&str> = from.split('/').filter(|s| !s.is_empty()).collect();
        let to_parts: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();
        let common = from_parts
            .iter()
            .zip(&to_parts)
            .take_while(|(a, b)| a == b)
            .count();
        let mut out: Vec<&str> = vec![".."; from_parts.len() - common];
        out.extend_from_slice(&to_parts[common..]);
        Ok(out.join("/"))
    }

    fn resolve(&self, segments: &[&str]) -> Result<String> {
        let mut gathered = String::new();
        let mut absolute = false;
        for segment in segments.iter().rev() {
            if segment.is_empty() {
                continue;
            }
            gathered = format!("{segment}/{gathered}");
            if segment.starts_with('/') {
                absolute = true;
                break;
            }
        }
        if !absolute {
            let cwd = self.posix_cwd()?;
            tracing::trace!("anchoring relative input on working directory {cwd}");
            gathered = format!("{cwd}/{gathered}");
            absolute = cwd.starts_with('/');
        }
        let collapsed = segments::collapse(&gathered, !absolute, is_posix_sep).join("/");
        if absolute {
            Ok(format!("/{collapsed}"))
        } else if collapsed.is_empty() {
            Ok(".".to_string())
        } else {
            Ok(collapsed)
        }
    }

    fn to_namespaced_path(&self, path: &str) -> Result<String> {
        // Namespace prefixes are a Windows concept; POSIX paths pass through.
        Ok(path.to_string())
    }
}
