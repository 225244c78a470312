use glob::MatchOptions;
use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    #[serde(default)]
    pub expansion: ExpansionConfig,
    #[serde(default)]
    pub glob: GlobSettings,
}

/// When filename patterns in arguments are expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionMode {
    /// Expand only where the shell does not (Windows).
    #[default]
    Auto,
    /// Always expand, whatever the platform.
    Always,
    /// Never expand; arguments are taken as given.
    Never,
}

impl ExpansionMode {
    /// Parse a mode name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    /// Whether this mode expands patterns on the current platform.
    pub fn expands(self) -> bool {
        match self {
            Self::Auto => cfg!(windows),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Expansion settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionConfig {
    #[serde(default)]
    pub mode: ExpansionMode,
}

/// Glob matching settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobSettings {
    /// Match letters case-sensitively (default: false on Windows, true
    /// elsewhere, like the platform's own filename matching).
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
    /// `*`, `?` and classes never match a path separator (default: true).
    #[serde(default = "default_true")]
    pub require_literal_separator: bool,
    /// A leading `.` must be matched literally, hiding dotfiles (default: true).
    #[serde(default = "default_true")]
    pub require_literal_leading_dot: bool,
}

fn default_true() -> bool {
    true
}

fn default_case_sensitive() -> bool {
    !cfg!(windows)
}

impl Default for GlobSettings {
    fn default() -> Self {
        Self {
            case_sensitive: default_case_sensitive(),
            require_literal_separator: true,
            require_literal_leading_dot: true,
        }
    }
}

impl GlobSettings {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
            require_literal_separator: self.require_literal_separator,
            require_literal_leading_dot: self.require_literal_leading_dot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_ignores_case() {
        assert_eq!(ExpansionMode::parse("ALWAYS"), Some(ExpansionMode::Always));
        assert_eq!(ExpansionMode::parse(" never "), Some(ExpansionMode::Never));
        assert_eq!(ExpansionMode::parse("auto"), Some(ExpansionMode::Auto));
        assert_eq!(ExpansionMode::parse("sometimes"), None);
    }

    #[test]
    fn test_forced_modes_ignore_platform() {
        assert!(ExpansionMode::Always.expands());
        assert!(!ExpansionMode::Never.expands());
        assert_eq!(ExpansionMode::Auto.expands(), cfg!(windows));
    }

    #[test]
    fn test_case_folding_follows_platform() {
        let settings = GlobSettings::default();
        assert_eq!(settings.case_sensitive, !cfg!(windows));
        assert_eq!(settings.match_options().case_sensitive, !cfg!(windows));
    }

    #[test]
    fn test_match_options_mirror_settings() {
        let settings = GlobSettings {
            case_sensitive: false,
            ..GlobSettings::default()
        };
        let options = settings.match_options();
        assert!(!options.case_sensitive);
        assert!(options.require_literal_separator);
        assert!(options.require_literal_leading_dot);
    }
}
