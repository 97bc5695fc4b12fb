//! Breadcrumb shortening.
//!
//! A path is shortened by swapping a known absolute prefix for a short
//! placeholder and collapsing every remaining directory to its first
//! character. The filename is never touched.

use crate::util::{SEPARATOR, absolutize, expand_tilde, join, split_parent};

pub const CURRENT_DIR_PLACEHOLDER: &str = "";
pub const PARENT_DIR_PLACEHOLDER: &str = "..";
pub const HOME_PLACEHOLDER: &str = "~";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub placeholder: String,
    pub expansion: String,
}

impl Replacement {
    pub fn new(placeholder: impl Into<String>, expansion: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            expansion: expansion.into(),
        }
    }
}

/// Outcome of searching the table for a directory prefix.
#[derive(Debug, PartialEq, Eq)]
pub enum PrefixMatch<'a> {
    Replaced {
        placeholder: &'a str,
        remainder: &'a str,
    },
    Unmatched,
}

/// Ordered prefix replacements. The first entry whose expansion prefixes a
/// directory wins, regardless of how long the other matches are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: Vec<Replacement>,
}

impl ReplacementTable {
    /// Standard table: working directory, its parent, then home.
    /// `cwd` and `home` must already be absolute.
    pub fn new(cwd: &str, home: &str, sep: char) -> Self {
        Self::from_entries(vec![
            Replacement::new(CURRENT_DIR_PLACEHOLDER, absolutize("", cwd, sep)),
            Replacement::new(PARENT_DIR_PLACEHOLDER, absolutize("..", cwd, sep)),
            Replacement::new(HOME_PLACEHOLDER, absolutize("", home, sep)),
        ])
    }

    pub fn from_entries(entries: Vec<Replacement>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Replacement] {
        &self.entries
    }

    pub fn find<'a>(&'a self, dir: &'a str, sep: char) -> PrefixMatch<'a> {
        self.entries
            .iter()
            .find_map(|entry| {
                strip_dir_prefix(dir, &entry.expansion, sep).map(|remainder| {
                    PrefixMatch::Replaced {
                        placeholder: entry.placeholder.as_str(),
                        remainder,
                    }
                })
            })
            .unwrap_or(PrefixMatch::Unmatched)
    }
}

/// Strip `prefix` from `dir` only on a segment boundary, returning the
/// remainder without its leading separator.
fn strip_dir_prefix<'a>(dir: &'a str, prefix: &str, sep: char) -> Option<&'a str> {
    let rest = dir.strip_prefix(prefix)?;
    if rest.is_empty() {
        return Some(rest);
    }
    if prefix.ends_with(sep) {
        return Some(rest);
    }
    rest.strip_prefix(sep)
}

/// Append the first character of every segment in `dirs` onto `base`.
fn truncate_onto(base: String, dirs: &str, sep: char) -> String {
    dirs.split(sep)
        .filter_map(|segment| segment.chars().next())
        .fold(base, |acc, initial| {
            let mut buf = [0u8; 4];
            join(&acc, initial.encode_utf8(&mut buf), sep)
        })
}

#[derive(Debug, Clone)]
pub struct Shortener {
    cwd: String,
    home: String,
    table: ReplacementTable,
    separator: char,
}

impl Shortener {
    pub fn new(cwd: &str, home: &str) -> Self {
        Self::with_separator(cwd, home, SEPARATOR)
    }

    pub fn with_separator(cwd: &str, home: &str, separator: char) -> Self {
        let root = separator.to_string();
        let cwd = absolutize(cwd, &root, separator);
        let home = absolutize(home, &root, separator);
        let table = ReplacementTable::new(&cwd, &home, separator);
        Self {
            cwd,
            home,
            table,
            separator,
        }
    }

    pub fn table(&self) -> &ReplacementTable {
        &self.table
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    /// Expand `~` and resolve against the working directory. Never fails and
    /// never touches the filesystem.
    pub fn normalize(&self, path: &str) -> String {
        let expanded = expand_tilde(path, &self.home);
        absolutize(&expanded, &self.cwd, self.separator)
    }

    pub fn shorten(&self, path: &str) -> String {
        let sep = self.separator;
        let (dir, filename) = split_parent(path, sep);
        let short_dir = match self.table.find(dir, sep) {
            PrefixMatch::Replaced {
                placeholder,
                remainder,
            } => truncate_onto(placeholder.to_string(), remainder, sep),
            PrefixMatch::Unmatched => {
                let root = if dir.starts_with(sep) {
                    sep.to_string()
                } else {
                    String::new()
                };
                truncate_onto(root, dir, sep)
            }
        };
        join(&short_dir, filename, sep)
    }
}

#[cfg(test)]
mod tests {
    use super::{PrefixMatch, Replacement, ReplacementTable, Shortener};

    fn alice() -> Shortener {
        Shortener::new("/home/alice/work/proj", "/home/alice")
    }

    #[test]
    fn table_is_cwd_parent_home_in_order() {
        let shortener = alice();
        let entries = shortener.table().entries();
        assert_eq!(
            entries,
            &[
                Replacement::new("", "/home/alice/work/proj"),
                Replacement::new("..", "/home/alice/work"),
                Replacement::new("~", "/home/alice"),
            ]
        );
    }

    #[test]
    fn find_respects_segment_boundary() {
        let table = ReplacementTable::from_entries(vec![Replacement::new("~", "/home/al")]);
        assert_eq!(table.find("/home/alice", '/'), PrefixMatch::Unmatched);
        assert_eq!(
            table.find("/home/al/docs", '/'),
            PrefixMatch::Replaced {
                placeholder: "~",
                remainder: "docs"
            }
        );
        assert_eq!(
            table.find("/home/al", '/'),
            PrefixMatch::Replaced {
                placeholder: "~",
                remainder: ""
            }
        );
    }

    #[test]
    fn shorten_strips_working_directory() {
        assert_eq!(
            alice().shorten("/home/alice/work/proj/src/main.py"),
            "s/main.py"
        );
        assert_eq!(alice().shorten("/home/alice/work/proj/main.py"), "main.py");
    }

    #[test]
    fn shorten_uses_parent_placeholder() {
        assert_eq!(
            alice().shorten("/home/alice/work/other/deep/x.rs"),
            "../o/d/x.rs"
        );
    }

    #[test]
    fn shorten_uses_home_placeholder() {
        assert_eq!(
            alice().shorten("/home/alice/docs/notes.txt"),
            "~/d/notes.txt"
        );
        assert_eq!(alice().shorten("/home/alice/.bashrc"), "~/.bashrc");
    }

    #[test]
    fn shorten_truncates_everything_without_match() {
        assert_eq!(alice().shorten("/etc/config/app.conf"), "/e/c/app.conf");
        assert_eq!(alice().shorten("/hosts"), "/hosts");
    }

    #[test]
    fn shorten_keeps_sibling_of_home_unmatched() {
        assert_eq!(
            alice().shorten("/home/alicia/notes/a.md"),
            "/h/a/n/a.md"
        );
    }

    #[test]
    fn shorten_takes_first_char_not_first_byte() {
        assert_eq!(alice().shorten("/srv/émoji/ñandú/x"), "/s/é/ñ/x");
    }

    #[test]
    fn parent_wins_over_home_when_they_coincide() {
        let shortener = Shortener::new("/home/alice/proj", "/home/alice");
        assert_eq!(
            shortener.shorten("/home/alice/docs/notes.txt"),
            "../d/notes.txt"
        );
    }

    #[test]
    fn cwd_wins_over_home_when_they_coincide() {
        let shortener = Shortener::new("/home/alice", "/home/alice");
        assert_eq!(shortener.shorten("/home/alice/docs/notes.txt"), "d/notes.txt");
    }

    #[test]
    fn root_working_directory_matches_everything() {
        let shortener = Shortener::new("/", "/home/alice");
        assert_eq!(shortener.shorten("/etc/config/app.conf"), "e/c/app.conf");
        assert_eq!(shortener.shorten("/home/alice/a.txt"), "h/a/a.txt");
    }

    #[test]
    fn normalize_expands_tilde_before_resolving() {
        assert_eq!(
            alice().normalize("~/work/proj/a/b/c.py"),
            "/home/alice/work/proj/a/b/c.py"
        );
        assert_eq!(
            alice().normalize("./src/../lib.rs"),
            "/home/alice/work/proj/lib.rs"
        );
        assert_eq!(alice().normalize("/abs/./x"), "/abs/x");
    }

    #[test]
    fn custom_separator_is_honored() {
        let shortener = Shortener::with_separator("\\src\\repo", "\\users\\me", '\\');
        assert_eq!(shortener.shorten("\\src\\repo\\src\\lib.rs"), "s\\lib.rs");
        assert_eq!(shortener.shorten("\\src\\other\\x.rs"), "..\\o\\x.rs");
        assert_eq!(shortener.shorten("\\users\\me\\docs\\a.txt"), "~\\d\\a.txt");
    }
}
