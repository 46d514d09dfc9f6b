//! Segment-level scanning shared by both dialect engines.

/// Collapse `.` and `..` segments into a component stack.
///
/// `path` must already have its root stripped. With `allow_above_root`,
/// `..` segments that would climb past the start are kept (relative paths);
/// without it they are dropped (rooted paths cannot climb higher).
pub(crate) fn collapse(
    path: &str,
    allow_above_root: bool,
    is_sep: fn(char) -> bool,
) -> Vec<&str> {
    let mut stack: Vec<&str> = Vec::new();
    for segment in path.split(is_sep) {
        match segment {
            "" | "." => {}
            ".." => match stack.last() {
                Some(&"..") | None => {
                    if allow_above_root {
                        stack.push("..");
                    }
                }
                Some(_) => {
                    stack.pop();
                }
            },
            _ => stack.push(segment),
        }
    }
    stack
}

/// Byte range of the last segment of `path`, ignoring trailing separators.
///
/// Scanning never looks left of `start` (callers pass the root length).
/// `None` when there is no segment at all.
pub(crate) fn last_segment_range(
    path: &str,
    start: usize,
    is_sep: fn(char) -> bool,
) -> Option<(usize, usize)> {
    let mut end: Option<usize> = None;
    for (idx, ch) in path[start..].char_indices().rev() {
        let idx = start + idx;
        if is_sep(ch) {
            if let Some(end) = end {
                return Some((idx + ch.len_utf8(), end));
            }
        } else if end.is_none() {
            end = Some(idx + ch.len_utf8());
        }
    }
    end.map(|end| (start, end))
}

/// Byte length of a segment's `.`-extension, 0 when it has none.
///
/// A leading dot marks a dotfile, not an extension, and `..` has no
/// extension either.
pub(crate) fn ext_len(segment: &str) -> usize {
    // Without this arm `..` would split into a `.` name plus a `.` ext;
    // `parse` and `extname` both agree it is extension-free.
    if segment == ".." {
        return 0;
    }
    match segment.rfind('.') {
        None | Some(0) => 0,
        Some(pos) => segment.len() - pos,
    }
}

/// Shared `basename` body; `start` is the dialect's scan floor.
pub(crate) fn basename_of(
    path: &str,
    start: usize,
    suffix: Option<&str>,
    is_sep: fn(char) -> bool,
) -> String {
    if let Some(suffix) = suffix {
        if !suffix.is_empty() && suffix == path {
            return String::new();
        }
    }
    let Some((seg_start, seg_end)) = last_segment_range(path, start, is_sep) else {
        return String::new();
    };
    let segment = &path[seg_start..seg_end];
    if let Some(suffix) = suffix {
        if !suffix.is_empty() && segment != suffix && segment.ends_with(suffix) {
            return segment[..segment.len() - suffix.len()].to_string();
        }
    }
    segment.to_string()
}
