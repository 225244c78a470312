//! Argument routing for scripts and small tools.
//!
//! ```text
//! C:> mytool  -r     -f      infile.txt   args for tool...
//!            ----   ----     ----------   ----------------
//!            flag  option   option value     remaining
//! ```
//!
//! The process arguments are expanded (see [`PatternExpander`]), then the
//! host asks for each flag and option it knows. Whatever nobody claimed is
//! left in [`ArgumentRouter::remaining`].

mod error;
mod expand;
mod invocation;
mod router;

pub use error::{BoxError, ConvertError};
pub use expand::{expander_for, platform_default, GlobExpander, Passthrough, PatternExpander};
pub use invocation::InvocationPath;
pub use router::{ArgumentRouter, OptionLookup};
