//! Detection internals: version extraction and executable lookup.
//!
//! - `parse_version_pair`: regex-based `major.minor` extraction from
//!   version-query output
//! - `ExecutableLookup` / `SystemLookup`: capability probing on the
//!   platform search path, with fallback locations

mod lookup;
mod parser;

pub use lookup::{ExecutableLookup, SystemLookup};
pub(crate) use parser::parse_version_pair;
