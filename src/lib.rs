//! Split process arguments into flags, options and leftover positionals.
//!
//! ```no_run
//! use argrouter::ArgumentRouter;
//!
//! let mut cli = ArgumentRouter::from_env();
//! let recurse = cli.flag("-r");
//! let input = cli.option("-f");
//! let count = cli.option_parse("-n", 10u32, 10).unwrap_or(10);
//! for path in cli.remaining() {
//!     println!("{path} recurse={recurse} input={input:?} count={count}");
//! }
//! ```

pub mod args;
pub mod config;
pub mod logging;

pub use args::{ArgumentRouter, ConvertError, OptionLookup};
pub use config::{ConfigError, RouterConfig};
