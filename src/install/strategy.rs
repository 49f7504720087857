//! Install strategy selection and command construction.

use crate::config::BootstrapConfig;
use crate::interpreter::Interpreter;
use serde::{Deserialize, Serialize};

/// One of the two mutually exclusive ways to install the tool.
///
/// # Example
///
/// ```rust
/// use agentflow_bootstrap::InstallStrategy;
///
/// assert_eq!(InstallStrategy::select(true), InstallStrategy::UvTool);
/// assert_eq!(InstallStrategy::select(false), InstallStrategy::Pip);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum InstallStrategy {
    /// `uv tool install` straight from the git remote.
    UvTool,
    /// `pip install --upgrade` through the selected interpreter.
    Pip,
}

impl InstallStrategy {
    /// Pick the strategy from the front-end capability flag.
    ///
    /// Exactly one strategy is selected per run; there is no fallback from
    /// one to the other afterwards.
    pub fn select(frontend_present: bool) -> Self {
        if frontend_present {
            Self::UvTool
        } else {
            Self::Pip
        }
    }

    /// Short name for status lines (`uv` / `pip`).
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::UvTool => "uv",
            Self::Pip => "pip",
        }
    }

    /// Build the install command for this strategy.
    ///
    /// The uv path installs the tool by name from the git remote; the pip
    /// path upgrades from the same remote (with the `.git` suffix pip
    /// expects) through the selected interpreter.
    pub fn command(&self, config: &BootstrapConfig, interpreter: &Interpreter) -> InstallCommand {
        match self {
            Self::UvTool => InstallCommand {
                program: config.frontend.clone(),
                args: vec![
                    "tool".to_string(),
                    "install".to_string(),
                    "--from".to_string(),
                    format!("git+{}", config.repo_url),
                    config.tool.clone(),
                ],
                strategy: *self,
            },
            Self::Pip => InstallCommand {
                program: interpreter.kind.command_name().to_string(),
                args: vec![
                    "-m".to_string(),
                    "pip".to_string(),
                    "install".to_string(),
                    "--upgrade".to_string(),
                    format!("git+{}.git", config.repo_url),
                ],
                strategy: *self,
            },
        }
    }
}

/// A structured install command, ready for execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallCommand {
    /// The program to execute.
    pub program: String,
    /// Arguments to pass to the program.
    pub args: Vec<String>,
    /// The strategy this command belongs to.
    pub strategy: InstallStrategy,
}

impl InstallCommand {
    /// Raw command string for display and diagnostics.
    pub fn rendered(&self) -> String {
        let mut out = self.program.clone();
        for arg in &self.args {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }
}
