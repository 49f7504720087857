//! Progress milestones reported during the bootstrap flow.
//!
//! The core flow performs no printing of its own; milestones go through a
//! callback and the binary renders them as status lines.

use crate::install::InstallStrategy;
use crate::interpreter::Interpreter;

/// Milestones emitted by the bootstrap flow, in order of occurrence.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum BootstrapProgress {
    /// A suitable interpreter was selected.
    InterpreterSelected {
        /// The selected interpreter.
        interpreter: Interpreter,
    },

    /// The tool is already present; installation is skipped.
    ToolPresent {
        /// Command name of the tool.
        tool: String,
    },

    /// Installation is starting with the given strategy.
    Installing {
        /// The strategy that was selected.
        strategy: InstallStrategy,
    },

    /// The installer finished successfully.
    InstallCompleted {
        /// Command name of the tool.
        tool: String,
    },
}

impl BootstrapProgress {
    /// Short description of the milestone.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InterpreterSelected { .. } => "Interpreter selected",
            Self::ToolPresent { .. } => "Tool already installed",
            Self::Installing { .. } => "Installing",
            Self::InstallCompleted { .. } => "Install complete",
        }
    }
}
