//! Installation of the target tool.
//!
//! Exactly one of two strategies runs per launch: `uv tool install` from
//! the git remote when the `uv` front-end is present, otherwise
//! `pip install --upgrade` through the selected interpreter. A failed
//! install terminates the run; there is no retry and no cross-strategy
//! fallback.

mod dispatcher;
mod errors;
mod strategy;

pub use dispatcher::run_install;
pub use errors::InstallError;
pub use strategy::{InstallCommand, InstallStrategy};
