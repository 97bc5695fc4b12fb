use color_eyre::Section as _;
use color_eyre::eyre::{Result, eyre};
use std::path::Path;

/// Separator used for all path splitting and joining.
pub const SEPARATOR: char = '/';

pub fn path_to_string(path: &Path) -> Result<String> {
    path.to_str().map(str::to_owned).ok_or_else(|| {
        eyre!("path is not valid UTF-8: {}", path.display())
            .suggestion("Pass a UTF-8 path with --cwd/--home")
    })
}

/// Expand a leading `~` or `~/` to `home`. Other forms (`~user`) are left alone.
pub fn expand_tilde(raw: &str, home: &str) -> String {
    shellexpand::tilde_with_context(raw, || Some(home)).into_owned()
}

/// Lexically resolve `path` against the absolute directory `base`.
///
/// `.` segments and empty segments are dropped, `..` pops the previous
/// segment and stops at the root. Nothing is read from disk.
pub fn absolutize(path: &str, base: &str, sep: char) -> String {
    let joined = if path.starts_with(sep) {
        path.to_string()
    } else {
        join(base, path, sep)
    };
    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split(sep) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    let mut out = String::with_capacity(joined.len());
    for segment in segments {
        out.push(sep);
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push(sep);
    }
    out
}

/// Join two path fragments. An empty head yields the tail unchanged, so an
/// empty placeholder still produces a valid relative path.
pub fn join(head: &str, tail: &str, sep: char) -> String {
    if head.is_empty() {
        return tail.to_string();
    }
    let mut out = String::with_capacity(head.len() + tail.len() + 1);
    out.push_str(head);
    if !head.ends_with(sep) {
        out.push(sep);
    }
    out.push_str(tail);
    out
}

/// Split at the last separator into `(parent, filename)`.
///
/// The parent of a top-level entry is the root itself; a bare name has an
/// empty parent.
pub fn split_parent(path: &str, sep: char) -> (&str, &str) {
    match path.rfind(sep) {
        None => ("", path),
        Some(0) => path.split_at(sep.len_utf8()),
        Some(idx) => (&path[..idx], &path[idx + sep.len_utf8()..]),
    }
}
