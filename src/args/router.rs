//! Argument router — claim flags and options, leave positionals behind.

use std::str::FromStr;

use crate::args::error::{BoxError, ConvertError};
use crate::args::expand::{expander_for, PatternExpander};
use crate::args::invocation::InvocationPath;
use crate::config::RouterConfig;

/// Outcome of looking up an option token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionLookup {
    /// The option token is not on the command line.
    Absent,
    /// The option token is the last argument; no value follows it.
    Missing,
    /// The token that follows the option in the original argument order.
    Value(String),
}

/// Splits invocation arguments into flags, options and positionals.
///
/// Two views are kept: `original` is the expanded argument list and never
/// changes, `remaining` starts as a copy and loses each flag, option and
/// option value the first time it is claimed. Lookups always search
/// `original`, so asking for the same flag twice gives the same answer.
#[derive(Debug, Clone)]
pub struct ArgumentRouter {
    invocation: InvocationPath,
    original: Vec<String>,
    remaining: Vec<String>,
}

impl ArgumentRouter {
    /// Build a router over `args`, expanded by `expander`.
    pub fn new(program: &str, args: &[String], expander: &dyn PatternExpander) -> Self {
        let original = expander.expand(args);
        let remaining = original.clone();

        tracing::debug!(program, count = original.len(), "Captured arguments");

        Self {
            invocation: InvocationPath::split(program),
            original,
            remaining,
        }
    }

    /// Build a router using the expansion mode and glob settings of `config`.
    pub fn with_config(program: &str, args: &[String], config: &RouterConfig) -> Self {
        let expander = expander_for(config.expansion.mode, &config.glob);
        Self::new(program, args, expander.as_ref())
    }

    /// Build a router over this process's own arguments.
    ///
    /// Uses the default configuration, with `ARGROUTER_EXPAND` honored.
    pub fn from_env() -> Self {
        let mut argv = std::env::args_os().map(|a| a.to_string_lossy().into_owned());
        let program = argv.next().unwrap_or_default();
        let args: Vec<String> = argv.collect();
        let config = RouterConfig::default().with_env_overrides();

        Self::with_config(&program, &args, &config)
    }

    /// Directory part of the program path, possibly empty.
    pub fn script_directory(&self) -> &str {
        self.invocation.directory()
    }

    /// File name part of the program path.
    pub fn script_base_name(&self) -> &str {
        self.invocation.base_name()
    }

    /// Arguments not yet claimed by any flag or option query.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// The expanded argument list as captured, before any claims.
    pub fn original(&self) -> &[String] {
        &self.original
    }

    /// Consume the router, keeping only the unclaimed arguments.
    pub fn into_remaining(self) -> Vec<String> {
        self.remaining
    }

    /// Report whether `name` appears on the command line and claim it.
    ///
    /// Matching is exact. Repeated calls keep returning `true`; each call
    /// removes at most one occurrence, and only while one is left.
    pub fn flag(&mut self, name: &str) -> bool {
        if !self.original.iter().any(|arg| arg == name) {
            return false;
        }

        self.claim(name);
        true
    }

    /// Look up `name` and claim both it and its value.
    ///
    /// The value is the token right after `name` in the *original* order,
    /// even when that token was already claimed by an earlier query.
    pub fn lookup(&mut self, name: &str) -> OptionLookup {
        let Some(index) = self.original.iter().position(|arg| arg == name) else {
            return OptionLookup::Absent;
        };

        self.claim(name);

        let Some(value) = self.original.get(index + 1).cloned() else {
            tracing::debug!(option = name, "Option has no value");
            return OptionLookup::Missing;
        };

        self.claim(&value);
        OptionLookup::Value(value)
    }

    /// Option value with all four knobs.
    ///
    /// Returns `default` if `name` is absent and `missing` if it has no value
    /// (neither goes through `convert`). Otherwise returns `convert` applied
    /// to the raw value; a conversion failure comes back as [`ConvertError`].
    pub fn option_with<T, E, F>(
        &mut self,
        name: &str,
        default: T,
        missing: T,
        convert: F,
    ) -> Result<T, ConvertError>
    where
        F: FnOnce(&str) -> Result<T, E>,
        E: Into<BoxError>,
    {
        match self.lookup(name) {
            OptionLookup::Absent => Ok(default),
            OptionLookup::Missing => Ok(missing),
            OptionLookup::Value(raw) => {
                convert(&raw).map_err(|e| ConvertError::new(name, &raw, e))
            }
        }
    }

    /// Option value as text: `None` if absent, `Some("")` if the value is
    /// missing.
    pub fn option(&mut self, name: &str) -> Option<String> {
        match self.lookup(name) {
            OptionLookup::Absent => None,
            OptionLookup::Missing => Some(String::new()),
            OptionLookup::Value(raw) => Some(raw),
        }
    }

    /// Option value as text with explicit fallbacks.
    pub fn option_or(&mut self, name: &str, default: &str, missing: &str) -> String {
        match self.lookup(name) {
            OptionLookup::Absent => default.to_string(),
            OptionLookup::Missing => missing.to_string(),
            OptionLookup::Value(raw) => raw,
        }
    }

    /// Option value parsed with [`FromStr`].
    pub fn option_parse<T>(&mut self, name: &str, default: T, missing: T) -> Result<T, ConvertError>
    where
        T: FromStr,
        T::Err: Into<BoxError>,
    {
        self.option_with(name, default, missing, str::parse::<T>)
    }

    /// Remove the first remaining occurrence of `token`, if any.
    fn claim(&mut self, token: &str) {
        if let Some(pos) = self.remaining.iter().position(|arg| arg == token) {
            self.remaining.remove(pos);
            tracing::trace!(token, "Claimed argument");
        }
    }
}
