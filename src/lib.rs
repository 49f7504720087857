//! # agentflow-bootstrap
//!
//! Bootstrap launcher for the AgentFlow CLI.
//!
//! Given no local installation of `agentflow`, the launcher finds a
//! suitable Python interpreter, installs the tool from its git remote
//! (via `uv tool install` when the `uv` front-end is present, otherwise
//! `pip install --upgrade`), and hands off to it with the original
//! argument vector, mirroring the tool's exit code.
//!
//! The flow is a single sequential pass with early exits:
//!
//! 1. Probe `python3`, `python`, `py` with `--version` and select the
//!    first candidate meeting the version floor (3.10 by default).
//! 2. If the tool is already resolvable, launch it immediately.
//! 3. Otherwise install via exactly one of the two strategies, then
//!    launch.
//!
//! The decision procedure operates through the [`ProcessRunner`] and
//! [`ExecutableLookup`] seams, so the entire flow is testable with fakes
//! and no real subprocesses.
//!
//! ## Example
//!
//! ```rust,no_run
//! use agentflow_bootstrap::{run, BootstrapConfig, SystemLookup, SystemRunner};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = BootstrapConfig::default();
//!     let args: Vec<String> = std::env::args().skip(1).collect();
//!     let code = match run(&config, &SystemRunner, &SystemLookup, &args, |_| {}).await {
//!         Ok(code) => code,
//!         Err(err) => {
//!             eprintln!("{err}");
//!             1
//!         }
//!     };
//!     std::process::exit(code);
//! }
//! ```

mod bootstrap;
mod config;
mod detection;
mod exec;
mod install;
mod interpreter;
mod launch;
mod locate;
mod probe;
mod progress;

pub use bootstrap::{run, BootstrapError};
pub use config::{BootstrapConfig, AGENTFLOW_REPO_URL, AGENTFLOW_TOOL, UV_FRONTEND};
pub use detection::{ExecutableLookup, SystemLookup};
pub use exec::{CapturedOutput, ChildExit, ProcessRunner, SystemRunner};
pub use install::{run_install, InstallCommand, InstallError, InstallStrategy};
pub use interpreter::{Interpreter, InterpreterKind, VersionFloor, VersionPair};
pub use launch::launch_tool;
pub use locate::{locate_interpreter, probe_interpreter};
pub use probe::{InterpreterProbe, RejectReason};
pub use progress::BootstrapProgress;
