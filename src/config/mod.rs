//! Router configuration: expansion mode and glob matching settings.

mod loader;
mod types;

pub use loader::{ConfigError, EXPAND_ENV_VAR};
pub use types::{ExpansionConfig, ExpansionMode, GlobSettings, RouterConfig};
