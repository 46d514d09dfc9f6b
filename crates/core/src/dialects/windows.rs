//! Windows dialect engine
//!
//! Drive letters, UNC shares, and two interchangeable separator characters.
//! The root grammar is the hard part; [`WinRoot::parse`] is the single
//! scanner every operation shares.

use crate::dialects::{format_parsed, segments};
use crate::error::Result;
use crate::interfaces::{PathApi, ProcessWorkingDir, WorkingDir};
use crate::types::ParsedPath;

pub(crate) fn is_win_sep(c: char) -> bool {
    c == '/' || c == '\\'
}

fn is_sep_byte(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

fn starts_with_drive(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Breakdown of the root of a Windows-dialect path.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WinRoot {
    /// Canonical device prefix: `C:` or `\\server\share`
    device: Option<String>,
    /// Bytes of the path covered by the root, trailing separator included
    len: usize,
    /// Whether the path is anchored rather than relative to a device or
    /// working directory
    absolute: bool,
}

impl WinRoot {
    fn parse(path: &str) -> Self {
        let bytes = path.as_bytes();
        let len = bytes.len();
        if len == 0 {
            return Self {
                device: None,
                len: 0,
                absolute: false,
            };
        }
        if is_sep_byte(bytes[0]) {
            if len > 1 && is_sep_byte(bytes[1]) {
                // Candidate UNC root: \\server\share
                let mut j = 2;
                while j < len && !is_sep_byte(bytes[j]) {
                    j += 1;
                }
                if j < len && j > 2 {
                    let server = &path[2..j];
                    while j < len && is_sep_byte(bytes[j]) {
                        j += 1;
                    }
                    if j < len {
                        let share_start = j;
                        while j < len && !is_sep_byte(bytes[j]) {
                            j += 1;
                        }
                        let device = format!("\\\\{server}\\{}", &path[share_start..j]);
                        let root_len = if j == len { len } else { j + 1 };
                        return Self {
                            device: Some(device),
                            len: root_len,
                            absolute: true,
                        };
                    }
                }
            }
            return Self {
                device: None,
                len: 1,
                absolute: true,
            };
        }
        if starts_with_drive(path) {
            if len > 2 && is_sep_byte(bytes[2]) {
                return Self {
                    device: Some(path[..2].to_string()),
                    len: 3,
                    absolute: true,
                };
            }
            return Self {
                device: Some(path[..2].to_string()),
                len: 2,
                absolute: false,
            };
        }
        Self {
            device: None,
            len: 0,
            absolute: false,
        }
    }
}

/// Windows path engine: drive and UNC roots, `\` canonical separator,
/// case-insensitive comparison where the filesystem is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32<W = ProcessWorkingDir> {
    working_dir: W,
}

impl Win32<ProcessWorkingDir> {
    /// Engine anchored on the process working directory
    pub const fn new() -> Self {
        Self {
            working_dir: ProcessWorkingDir,
        }
    }
}

impl<W: WorkingDir> Win32<W> {
    /// Engine anchored on an explicit working directory provider
    pub fn with_working_dir(working_dir: W) -> Self {
        Self { working_dir }
    }

    /// Working directory to anchor a path pinned to `device` (empty when no
    /// device is pinned yet).
    ///
    /// There are no per-drive directories behind a single provider: when the
    /// provider's directory is not on the pinned device, the device root is
    /// the anchor.
    fn device_cwd(&self, device: &str) -> Result<String> {
        let cwd = self.working_dir.current_dir()?;
        if device.is_empty() {
            return Ok(cwd);
        }
        let on_device = WinRoot::parse(&cwd)
            .device
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case(device));
        if on_device {
            return Ok(cwd);
        }
        tracing::debug!("working directory {cwd} is not on {device}, anchoring on the device root");
        Ok(format!("{device}\\"))
    }
}

impl<W: WorkingDir> PathApi for Win32<W> {
    fn delimiter(&self) -> &'static str {
        ";"
    }

    fn separator(&self) -> &'static str {
        "\\"
    }

    fn basename(&self, path: &str, suffix: Option<&str>) -> String {
        // A bare drive prefix is not part of any segment
        let start = if starts_with_drive(path) { 2 } else { 0 };
        segments::basename_of(path, start, suffix, is_win_sep)
    }

    fn dirname(&self, path: &str) -> String {
        if path.is_empty() {
            return ".".to_string();
        }
        let bytes = path.as_bytes();
        if bytes.len() == 1 {
            return if is_sep_byte(bytes[0]) {
                path.to_string()
            } else {
                ".".to_string()
            };
        }
        let root = WinRoot::parse(path);
        let mut end: Option<usize> = None;
        let mut matched_segment = false;
        for i in (root.len..bytes.len()).rev() {
            if is_sep_byte(bytes[i]) {
                if matched_segment {
                    end = Some(i);
                    break;
                }
            } else {
                matched_segment = true;
            }
        }
        match end {
            Some(end) => path[..end].to_string(),
            None if root.len > 0 => path[..root.len].to_string(),
            None => ".".to_string(),
        }
    }

    fn extname(&self, path: &str) -> String {
        let start = if starts_with_drive(path) { 2 } else { 0 };
        let Some((seg_start, seg_end)) = segments::last_segment_range(path, start, is_win_sep)
        else {
            return String::new();
        };
        let segment = &path[seg_start..seg_end];
        segment[segment.len() - segments::ext_len(segment)..].to_string()
    }

    fn format(&self, parsed: &ParsedPath) -> String {
        format_parsed(parsed, self.separator())
    }

    fn is_absolute(&self, path: &str) -> bool {
        let bytes = path.as_bytes();
        if bytes.is_empty() {
            return false;
        }
        is_sep_byte(bytes[0])
            || (bytes.len() > 2 && starts_with_drive(path) && is_sep_byte(bytes[2]))
    }

    fn join(&self, segments: &[&str]) -> String {
        let parts: Vec<&str> = segments.iter().copied().filter(|s| !s.is_empty()).collect();
        let Some(first) = parts.first().copied() else {
            return ".".to_string();
        };
        let mut joined = parts.join("\\");

        // Collapse extra leading separators unless the first segment is a
        // UNC stem (exactly two separators, then a name): `\\host` must
        // keep its doubled prefix, `\\\x` and `\x` must not gain one.
        let first_bytes = first.as_bytes();
        let mut slashes = 0;
        let mut dedupe = true;
        if !first_bytes.is_empty() && is_sep_byte(first_bytes[0]) {
            slashes += 1;
            if first_bytes.len() > 1 && is_sep_byte(first_bytes[1]) {
                slashes += 1;
                if first_bytes.len() > 2 {
                    if is_sep_byte(first_bytes[2]) {
                        slashes += 1;
                    } else {
                        dedupe = false;
                    }
                }
            }
        }
        if dedupe {
            let bytes = joined.as_bytes();
            while slashes < bytes.len() && is_sep_byte(bytes[slashes]) {
                slashes += 1;
            }
            if slashes >= 2 {
                joined = format!("\\{}", &joined[slashes..]);
            }
        }
        self.normalize(&joined)
    }

    fn normalize(&self, path: &str) -> String {
        if path.is_empty() {
            return ".".to_string();
        }
        if path.len() == 1 {
            return if path == "/" {
                "\\".to_string()
            } else {
                path.to_string()
            };
        }
        let root = WinRoot::parse(path);
        let mut tail = segments::collapse(&path[root.len..], !root.absolute, is_win_sep).join("\\");
        if tail.is_empty() && !root.absolute {
            tail.push('.');
        }
        if !tail.is_empty() && path.ends_with(is_win_sep) {
            tail.push('\\');
        }
        match &root.device {
            None => {
                if root.absolute {
                    format!("\\{tail}")
                } else {
                    tail
                }
            }
            Some(device) => {
                if root.absolute {
                    format!("{device}\\{tail}")
                } else {
                    format!("{device}{tail}")
                }
            }
        }
    }

    fn parse(&self, path: &str) -> ParsedPath {
        let mut parsed = ParsedPath::default();
        if path.is_empty() {
            return parsed;
        }
        let root = WinRoot::parse(path);
        parsed.root = path[..root.len].to_string();
        let Some((start, end)) = segments::last_segment_range(path, root.len, is_win_sep) else {
            parsed.dir = parsed.root.clone();
            return parsed;
        };
        let segment = &path[start..end];
        let ext_len = segments::ext_len(segment);
        parsed.base = segment.to_string();
        parsed.name = segment[..segment.len() - ext_len].to_string();
        parsed.ext = segment[segment.len() - ext_len..].to_string();
        parsed.dir = if start > root.len {
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
        let from_orig = self.resolve(&[from])?;
        let to_orig = self.resolve(&[to])?;
        if from_orig == to_orig {
            return Ok(String::new());
        }
        if from_orig.to_lowercase() == to_orig.to_lowercase() {
            return Ok(String::new());
        }

        // Compared component-wise, the device (drive or UNC server) is the
        // leading component and a share is an ordinary one, so `..` can
        // cross shares on a single server.
        let from_parts: Vec<&str> = from_orig
            .split(is_win_sep)
            .filter(|s| !s.is_empty())
            .collect();
        let to_parts: Vec<&str> = to_orig
            .split(is_win_sep)
            .filter(|s| !s.is_empty())
            .collect();
        let common = from_parts
            .iter()
            .zip(&to_parts)
            .take_while(|(a, b)| a.to_lowercase() == b.to_lowercase())
            .count();
        if common == 0 && !from_parts.is_empty() && !to_parts.is_empty() {
            // Different devices cannot be bridged with `..`
            return Ok(to_orig);
        }
        let mut out: Vec<&str> = vec![".."; from_parts.len() - common];
        out.extend_from_slice(&to_parts[common..]);
        Ok(out.join("\\"))
    }

    fn resolve(&self, segments: &[&str]) -> Result<String> {
        let mut device = String::new();
        let mut tail = String::new();
        let mut absolute = false;

        for segment in segments.iter().rev() {
            if segment.is_empty() {
                continue;
            }
            let root = WinRoot::parse(segment);
            if let Some(seg_device) = &root.device {
                if device.is_empty() {
                    device = seg_device.clone();
                } else if !seg_device.eq_ignore_ascii_case(&device) {
                    // A path on another device cannot contribute
                    continue;
                }
            }
            if absolute {
                if !device.is_empty() {
                    break;
                }
                continue;
            }
            tail = format!("{}\\{}", &segment[root.len..], tail);
            absolute = root.absolute;
            if absolute && !device.is_empty() {
                break;
            }
        }

        if !absolute || device.is_empty() {
            let cwd = self.device_cwd(&device)?;
            let root = WinRoot::parse(&cwd);
            if device.is_empty() {
                if let Some(cwd_device) = &root.device {
                    device = cwd_device.clone();
                }
            }
            if !absolute {
                tail = format!("{}\\{}", &cwd[root.len..], tail);
                absolute = root.absolute;
            }
        }

        let collapsed = segments::collapse(&tail, !absolute, is_win_sep).join("\\");
        if absolute {
            Ok(format!("{device}\\{collapsed}"))
        } else {
            let anchored = format!("{device}{collapsed}");
            Ok(if anchored.is_empty() {
                ".".to_string()
            } else {
                anchored
            })
        }
    }

    fn to_namespaced_path(&self, path: &str) -> Result<String> {
        if path.is_empty() {
            return Ok(String::new());
        }
        let resolved = self.resolve(&[path])?;
        let bytes = resolved.as_bytes();
        if bytes.len() <= 2 {
            return Ok(path.to_string());
        }
        if bytes[0] == b'\\' && bytes[1] == b'\\' {
            // `\\?\` and `\\.\` forms are already namespaced or device paths
            if bytes[2] != b'?' && bytes[2] != b'.' {
                let namespaced = format!("\\\\?\\UNC\\{}", &resolved[2..]);
                tracing::trace!("namespaced {path} as {namespaced}");
                return Ok(namespaced);
            }
        } else if starts_with_drive(&resolved) && bytes[2] == b'\\' {
            let namespaced = format!("\\\\?\\{resolved}");
            tracing::trace!("namespaced {path} as {namespaced}");
            return Ok(namespaced);
        }
        Ok(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::StaticWorkingDir;

    fn pinned(dir: &str) -> Win32<StaticWorkingDir> {
        Win32::with_working_dir(StaticWorkingDir::new(dir))
    }

    #[test]
    fn test_constants() {
        let win = Win32::new();
        assert_eq!(win.delimiter(), ";");
        assert_eq!(win.separator(), "\\");
    }

    #[test]
    fn test_win_root_drive() {
        let rel = WinRoot::parse("C:temp");
        assert_eq!(rel.device.as_deref(), Some("C:"));
        assert_eq!(rel.len, 2);
        assert!(!rel.absolute);

        let abs = WinRoot::parse("C:\\temp");
        assert_eq!(abs.device.as_deref(), Some("C:"));
        assert_eq!(abs.len, 3);
        assert!(abs.absolute);
    }

    #[test]
    fn test_win_root_unc() {
        let root = WinRoot::parse("\\\\server\\share\\dir");
        assert_eq!(root.device.as_deref(), Some("\\\\server\\share"));
        assert_eq!(root.len, "\\\\server\\share\\".len());
        assert!(root.absolute);

        // Forward slashes parse to the same canonical device
        let slashed = WinRoot::parse("//server/share/dir");
        assert_eq!(slashed.device.as_deref(), Some("\\\\server\\share"));

        // Server with no share is a plain separator root
        let bare = WinRoot::parse("\\\\server");
        assert_eq!(bare.device, None);
        assert_eq!(bare.len, 1);
    }

    #[test]
    fn test_win_root_plain() {
        let rooted = WinRoot::parse("\\temp");
        assert_eq!(rooted.device, None);
        assert_eq!(rooted.len, 1);
        assert!(rooted.absolute);

        let relative = WinRoot::parse("temp");
        assert_eq!(relative.len, 0);
        assert!(!relative.absolute);
    }

    #[test]
    fn test_normalize_canonicalizes_separators() {
        let win = Win32::new();
        assert_eq!(win.normalize("C:\\temp\\\\foo\\bar\\..\\"), "C:\\temp\\foo\\");
        assert_eq!(
            win.normalize("C:////temp\\\\/\\/\\/foo/bar"),
            "C:\\temp\\foo\\bar"
        );
        assert_eq!(
            win.normalize("//server/share/dir/file.ext"),
            "\\\\server\\share\\dir\\file.ext"
        );
        assert_eq!(win.normalize("/foo/../bar"), "\\bar");
    }

    #[test]
    fn test_normalize_roots() {
        let win = Win32::new();
        assert_eq!(win.normalize("C:"), "C:.");
        assert_eq!(win.normalize("C:\\"), "C:\\");
        assert_eq!(win.normalize("/"), "\\");
        assert_eq!(win.normalize("\\\\server\\share"), "\\\\server\\share\\");
        assert_eq!(win.normalize(""), ".");
    }

    #[test]
    fn test_normalize_relative_climbs() {
        let win = Win32::new();
        assert_eq!(win.normalize("..\\..\\abc\\..\\def"), "..\\..\\def");
        assert_eq!(win.normalize("C:..\\abc"), "C:..\\abc");
        // A root swallows `..`
        assert_eq!(win.normalize("\\\\srv\\share\\..\\x"), "\\\\srv\\share\\x");
        assert_eq!(win.normalize("C:\\..\\x"), "C:\\x");
    }

    #[test]
    fn test_join() {
        let win = Win32::new();
        assert_eq!(
            win.join(&["/foo", "bar", "baz/asdf", "quux", ".."]),
            "\\foo\\bar\\baz\\asdf"
        );
        assert_eq!(win.join(&["C:\\foo", "bar"]), "C:\\foo\\bar");
        assert_eq!(win.join(&["C:", "foo"]), "C:\\foo");
        assert_eq!(win.join(&[]), ".");
        assert_eq!(win.join(&["a", "", "b"]), win.join(&["a", "b"]));
    }

    #[test]
    fn test_join_keeps_unc_stems_only() {
        let win = Win32::new();
        assert_eq!(win.join(&["//foo", "bar"]), "\\\\foo\\bar\\");
        assert_eq!(win.join(&["\\\\foo", "bar"]), "\\\\foo\\bar\\");
        assert_eq!(win.join(&["//foo/bar"]), "\\\\foo\\bar\\");
        // Three separators is not a UNC stem
        assert_eq!(win.join(&["///foo", "bar"]), "\\foo\\bar");
        assert_eq!(win.join(&["\\\\", "foo"]), "\\foo");
    }

    #[test]
    fn test_is_absolute() {
        let win = Win32::new();
        assert!(win.is_absolute("//server"));
        assert!(win.is_absolute("\\\\server"));
        assert!(win.is_absolute("C:/foo/.."));
        assert!(win.is_absolute("C:\\foo\\.."));
        assert!(!win.is_absolute("C:"));
        assert!(!win.is_absolute("bar\\baz"));
        assert!(!win.is_absolute("bar/baz"));
        assert!(!win.is_absolute("."));
        assert!(!win.is_absolute(""));
    }

    #[test]
    fn test_basename_skips_drive_prefix() {
        let win = Win32::new();
        assert_eq!(win.basename("C:\\temp\\myfile.html", None), "myfile.html");
        assert_eq!(win.basename("C:myfile.html", None), "myfile.html");
        assert_eq!(win.basename("C:myfile.html", Some(".html")), "myfile");
        assert_eq!(win.basename("C:", None), "");
        assert_eq!(win.basename("C:\\", None), "");
        assert_eq!(win.basename("\\\\srv\\share\\f.txt", None), "f.txt");
        assert_eq!(win.basename("foo\\bar\\", None), "bar");
    }

    #[test]
    fn test_dirname() {
        let win = Win32::new();
        assert_eq!(win.dirname("c:\\foo\\bar\\baz"), "c:\\foo\\bar");
        assert_eq!(win.dirname("c:\\foo"), "c:\\");
        assert_eq!(win.dirname("c:\\"), "c:\\");
        assert_eq!(win.dirname("c:"), "c:");
        assert_eq!(win.dirname("foo"), ".");
        assert_eq!(win.dirname("\\foo\\bar"), "\\foo");
        assert_eq!(win.dirname("\\foo\\bar\\"), "\\foo");
    }

    #[test]
    fn test_dirname_unc_root_is_its_own_parent() {
        let win = Win32::new();
        assert_eq!(win.dirname("\\\\unc\\share\\foo"), "\\\\unc\\share\\");
        assert_eq!(win.dirname("\\\\unc\\share"), "\\\\unc\\share");
        assert_eq!(
            win.dirname("\\\\unc\\share\\foo\\bar"),
            "\\\\unc\\share\\foo"
        );
    }

    #[test]
    fn test_extname() {
        let win = Win32::new();
        assert_eq!(win.extname("C:\\a\\b.txt"), ".txt");
        assert_eq!(win.extname("C:.txt"), "");
        assert_eq!(win.extname("file.ext\\"), ".ext");
        assert_eq!(win.extname("archive.tar.gz"), ".gz");
        assert_eq!(win.extname("noext"), "");
    }

    #[test]
    fn test_parse() {
        let win = Win32::new();
        let parsed = win.parse("C:\\path\\dir\\file.txt");
        assert_eq!(parsed.root, "C:\\");
        assert_eq!(parsed.dir, "C:\\path\\dir");
        assert_eq!(parsed.base, "file.txt");
        assert_eq!(parsed.name, "file");
        assert_eq!(parsed.ext, ".txt");

        let unc = win.parse("\\\\server\\share\\file");
        assert_eq!(unc.root, "\\\\server\\share\\");
        assert_eq!(unc.dir, "\\\\server\\share\\");
        assert_eq!(unc.base, "file");

        let drive = win.parse("C:");
        assert_eq!(drive.root, "C:");
        assert_eq!(drive.dir, "C:");
        assert_eq!(drive.base, "");
    }

    #[test]
    fn test_format_inverts_parse() {
        let win = Win32::new();
        for path in ["C:\\path\\dir\\file.txt", "C:\\file", "dir\\file.tar.gz"] {
            assert_eq!(win.format(&win.parse(path)), path);
        }
        // A bare root gets no extra separator
        assert_eq!(
            win.format(&ParsedPath::new().with_root("C:\\").with_base("b.txt")),
            "C:\\b.txt"
        );
        assert_eq!(
            win.format(&ParsedPath::new().with_root("C:").with_base("b.txt")),
            "C:b.txt"
        );
    }

    #[test]
    fn test_resolve_pins_the_rightmost_device() {
        let api = pinned("C:\\users\\me");
        assert_eq!(api.resolve(&["c:/ignored", "d:\\win"]).unwrap(), "d:\\win");
        assert_eq!(api.resolve(&["d:\\base", "d:file"]).unwrap(), "d:\\base\\file");
        assert_eq!(api.resolve(&["D:\\x", "y"]).unwrap(), "D:\\x\\y");
    }

    #[test]
    fn test_resolve_falls_back_to_working_directory() {
        let api = pinned("C:\\users\\me");
        assert_eq!(api.resolve(&[]).unwrap(), "C:\\users\\me");
        assert_eq!(api.resolve(&["foo"]).unwrap(), "C:\\users\\me\\foo");
        assert_eq!(api.resolve(&["foo/..", "bar"]).unwrap(), "C:\\users\\me\\bar");
    }

    #[test]
    fn test_resolve_drive_relative_tails() {
        let api = pinned("C:\\users\\me");
        // Same device: anchored on the working directory
        assert_eq!(api.resolve(&["C:x"]).unwrap(), "C:\\users\\me\\x");
        // Other device: anchored on its root
        assert_eq!(api.resolve(&["D:x"]).unwrap(), "D:\\x");
    }

    #[test]
    fn test_resolve_rooted_path_takes_device_from_working_directory() {
        let api = pinned("C:\\users\\me");
        assert_eq!(api.resolve(&["\\foo"]).unwrap(), "C:\\foo");
        assert_eq!(api.resolve(&["/foo", "bar"]).unwrap(), "C:\\foo\\bar");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let api = pinned("C:\\users\\me");
        for input in ["a\\..\\b", "\\\\srv\\share\\x", "D:rel"] {
            let once = api.resolve(&[input]).unwrap();
            assert_eq!(api.resolve(&[once.as_str()]).unwrap(), once);
        }
    }

    #[test]
    fn test_relative_walks_between_directories() {
        let api = pinned("C:\\base");
        assert_eq!(
            api.relative("C:\\orandea\\test\\aaa", "C:\\orandea\\impl\\bbb")
                .unwrap(),
            "..\\..\\impl\\bbb"
        );
        assert_eq!(api.relative("C:\\foo\\bar", "C:\\foo").unwrap(), "..");
        assert_eq!(api.relative("C:\\foo", "C:\\foo\\bar\\baz").unwrap(), "bar\\baz");
    }

    #[test]
    fn test_relative_compares_case_insensitively() {
        let api = pinned("C:\\base");
        assert_eq!(api.relative("C:\\A\\b", "c:\\a\\B").unwrap(), "");
        // Output keeps the casing of `to`
        assert_eq!(api.relative("C:\\foo\\BAR", "c:\\foo\\bar\\baz").unwrap(), "baz");
    }

    #[test]
    fn test_relative_across_devices_returns_to() {
        let api = pinned("C:\\base");
        assert_eq!(
            api.relative("c:\\blah\\blah", "d:\\games").unwrap(),
            "d:\\games"
        );
        assert_eq!(
            api.relative("\\\\alpha\\share\\x", "\\\\beta\\share\\y").unwrap(),
            "\\\\beta\\share\\y"
        );
        assert_eq!(
            api.relative("C:\\foo", "\\\\srv\\share\\bar").unwrap(),
            "\\\\srv\\share\\bar"
        );
    }

    #[test]
    fn test_relative_between_unc_shares() {
        let api = pinned("C:\\base");
        assert_eq!(
            api.relative("\\\\foo\\bar\\baz", "\\\\foo\\bar\\baz-quux")
                .unwrap(),
            "..\\baz-quux"
        );
        assert_eq!(
            api.relative("\\\\foo\\bar", "\\\\foo\\bar\\baz").unwrap(),
            "baz"
        );
    }

    #[test]
    fn test_relative_bridges_shares_on_one_server() {
        let api = pinned("C:\\base");
        assert_eq!(
            api.relative("\\\\foo\\baz", "\\\\foo\\bar\\baz").unwrap(),
            "..\\bar\\baz"
        );
        assert_eq!(
            api.relative("\\\\srv\\share1\\x", "\\\\srv\\share2\\y").unwrap(),
            "..\\..\\share2\\y"
        );
        // Server comparison stays case-insensitive
        assert_eq!(
            api.relative("\\\\SRV\\share1", "\\\\srv\\share2").unwrap(),
            "..\\share2"
        );
    }

    #[test]
    fn test_to_namespaced_path_drive() {
        let api = pinned("C:\\base");
        assert_eq!(
            api.to_namespaced_path("C:\\foo\\bar").unwrap(),
            "\\\\?\\C:\\foo\\bar"
        );
        assert_eq!(
            api.to_namespaced_path("c:/blah\\blah").unwrap(),
            "\\\\?\\c:\\blah\\blah"
        );
        // Relative paths resolve against the working directory first
        assert_eq!(
            api.to_namespaced_path("foo\\bar").unwrap(),
            "\\\\?\\C:\\base\\foo\\bar"
        );
    }

    #[test]
    fn test_to_namespaced_path_unc() {
        let api = pinned("C:\\base");
        insta::assert_snapshot!(
            api.to_namespaced_path("\\\\foo\\bar").unwrap(),
            @r"\\?\UNC\foo\bar\"
        );
        assert_eq!(
            api.to_namespaced_path("//srv/share/x").unwrap(),
            "\\\\?\\UNC\\srv\\share\\x"
        );
    }

    #[test]
    fn test_to_namespaced_path_passes_special_forms_through() {
        let api = pinned("C:\\base");
        assert_eq!(
            api.to_namespaced_path("\\\\?\\c:\\foo").unwrap(),
            "\\\\?\\c:\\foo"
        );
        assert_eq!(
            api.to_namespaced_path("\\\\.\\pipe\\x").unwrap(),
            "\\\\.\\pipe\\x"
        );
        assert_eq!(api.to_namespaced_path("").unwrap(), "");
    }
}
