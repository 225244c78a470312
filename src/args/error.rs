//! Error raised when an option value fails conversion.

use thiserror::Error;

/// Boxed error produced by a caller-supplied conversion.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Conversion of an option's raw text failed.
///
/// The router never inspects the failure; it only records which option and
/// which raw text were involved and hands the caller's error back.
#[derive(Debug, Error)]
#[error("Invalid value '{raw}' for option '{option}': {source}")]
pub struct ConvertError {
    /// Option token the value belonged to.
    pub option: String,
    /// Raw text taken from the command line.
    pub raw: String,
    #[source]
    pub source: BoxError,
}

impl ConvertError {
    pub fn new(option: &str, raw: &str, source: impl Into<BoxError>) -> Self {
        Self {
            option: option.to_string(),
            raw: raw.to_string(),
            source: source.into(),
        }
    }
}
