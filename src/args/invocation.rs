//! Invocation path — split the program path into directory and base name.

use std::path::is_separator;

/// The path the process was launched with, split once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvocationPath {
    directory: String,
    base_name: String,
}

impl InvocationPath {
    /// Split `program` after its last path separator.
    ///
    /// The directory part loses its trailing separators unless it is made of
    /// nothing else (so `/x` keeps `/` as its directory).
    pub fn split(program: &str) -> Self {
        let cut = program
            .char_indices()
            .filter(|(_, c)| is_separator(*c))
            .map(|(i, c)| i + c.len_utf8())
            .last()
            .unwrap_or(0);

        let (head, tail) = program.split_at(cut);
        let trimmed = head.trim_end_matches(is_separator);
        let directory = if trimmed.is_empty() { head } else { trimmed };

        Self {
            directory: directory.to_string(),
            base_name: tail.to_string(),
        }
    }

    /// Directory the program was invoked from, possibly empty.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// File name of the program.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }
}
