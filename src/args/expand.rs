//! Pattern expansion of filename globs found in arguments.
//!
//! Unix shells expand `*.csv` before the program ever sees it; the Windows
//! command shell does not. The expander is a strategy so the router behaves
//! the same on any host and tests can pick either one.

use std::path::{is_separator, Component, Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};

use crate::config::{ExpansionMode, GlobSettings};

/// Turns raw process arguments into the router's original argument list.
pub trait PatternExpander {
    /// Expand `args` into a fresh list. Never fails.
    fn expand(&self, args: &[String]) -> Vec<String>;
}

/// Arguments are copied through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl PatternExpander for Passthrough {
    fn expand(&self, args: &[String]) -> Vec<String> {
        args.to_vec()
    }
}

/// Each argument is matched against the filesystem as a glob pattern.
///
/// An argument with at least one match is replaced by its matches, in the
/// order the glob walk yields them. An argument with no match (or one that is
/// not a valid pattern) is kept as the literal string, so `*.pyc` with no
/// such files stays `*.pyc`. Arguments without metacharacters are never
/// looked up, and matches keep the pattern's directory text as typed
/// (`./*.csv` yields `./a.csv`).
#[derive(Debug, Clone, Copy)]
pub struct GlobExpander {
    options: MatchOptions,
}

impl GlobExpander {
    pub fn new(settings: &GlobSettings) -> Self {
        Self {
            options: settings.match_options(),
        }
    }

    fn matches(&self, pattern: &str) -> Vec<String> {
        if Pattern::escape(pattern) == pattern {
            return Vec::new();
        }

        let Ok(paths) = glob_with(pattern, self.options) else {
            tracing::trace!(pattern, "Not a valid glob pattern, keeping literal");
            return Vec::new();
        };

        let prefix = literal_prefix(pattern);

        // Unreadable entries are skipped rather than reported.
        paths
            .filter_map(Result::ok)
            .map(|path| restore_prefix(prefix, &path))
            .collect()
    }
}

/// Leading directory text of `pattern` that holds no metacharacters,
/// separator included.
fn literal_prefix(pattern: &str) -> &str {
    let magic = pattern.find(['*', '?', '[']).unwrap_or(pattern.len());
    pattern[..magic]
        .char_indices()
        .filter(|(_, c)| is_separator(*c))
        .map(|(i, c)| &pattern[..i + c.len_utf8()])
        .last()
        .unwrap_or("")
}

/// Rewrite a glob match so it starts with `prefix` exactly as typed.
///
/// The glob walk drops `.` components and doubled separators; a match that
/// does not start with the normalized prefix is returned as the walk gave it.
fn restore_prefix(prefix: &str, matched: &Path) -> String {
    let mut rest = matched.components().filter(significant);

    for wanted in Path::new(prefix).components().filter(significant) {
        if rest.next() != Some(wanted) {
            return matched.to_string_lossy().into_owned();
        }
    }

    let tail: PathBuf = rest.collect();
    format!("{}{}", prefix, tail.to_string_lossy())
}

fn significant(component: &Component<'_>) -> bool {
    *component != Component::CurDir
}

impl Default for GlobExpander {
    fn default() -> Self {
        Self::new(&GlobSettings::default())
    }
}

impl PatternExpander for GlobExpander {
    fn expand(&self, args: &[String]) -> Vec<String> {
        let mut expanded = Vec::with_capacity(args.len());

        for arg in args {
            let matches = self.matches(arg);
            if matches.is_empty() {
                expanded.push(arg.clone());
            } else {
                tracing::debug!(pattern = %arg, count = matches.len(), "Expanded argument");
                expanded.extend(matches);
            }
        }

        expanded
    }
}

/// The expander for this platform: globbing on Windows, passthrough elsewhere.
pub fn platform_default() -> Box<dyn PatternExpander> {
    expander_for(ExpansionMode::Auto, &GlobSettings::default())
}

/// Pick the expander a mode calls for on this platform.
pub fn expander_for(mode: ExpansionMode, settings: &GlobSettings) -> Box<dyn PatternExpander> {
    if mode.expands() {
        Box::new(GlobExpander::new(settings))
    } else {
        Box::new(Passthrough)
    }
}
