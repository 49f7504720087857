//! Launcher configuration.

use crate::interpreter::{InterpreterKind, VersionFloor};
use serde::{Deserialize, Serialize};

/// Git remote the tool is installed from.
pub const AGENTFLOW_REPO_URL: &str = "https://github.com/kittors/AgentFlow";

/// Command name of the installed tool.
pub const AGENTFLOW_TOOL: &str = "agentflow";

/// Fast installer front-end probed before falling back to pip.
pub const UV_FRONTEND: &str = "uv";

/// Configuration for one bootstrap run.
///
/// `Default` carries the AgentFlow values: install `agentflow` from its
/// git remote, prefer the `uv` front-end, require Python 3.10+, and try
/// `python3`, `python`, `py` in that order.
///
/// # Example
///
/// ```rust
/// use agentflow_bootstrap::BootstrapConfig;
///
/// let config = BootstrapConfig::default();
/// assert_eq!(config.tool, "agentflow");
/// assert_eq!(config.floor.to_string(), "3.10");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Command name of the tool to install and launch.
    pub tool: String,

    /// Git remote the tool is installed from.
    pub repo_url: String,

    /// Alternate installer front-end to prefer when present.
    pub frontend: String,

    /// Minimum acceptable interpreter version.
    pub floor: VersionFloor,

    /// Interpreter candidates in preference order.
    pub candidates: Vec<InterpreterKind>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            tool: AGENTFLOW_TOOL.to_string(),
            repo_url: AGENTFLOW_REPO_URL.to_string(),
            frontend: UV_FRONTEND.to_string(),
            floor: VersionFloor::default(),
            candidates: InterpreterKind::all().collect(),
        }
    }
}
