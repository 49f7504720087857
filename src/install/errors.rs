//! Error types for install dispatch.
//!
//! Each variant carries an actionable fix suggestion alongside the
//! failure itself.

use crate::exec::ChildExit;
use std::io;
use thiserror::Error;

/// Errors from running the chosen install command.
///
/// # Example
///
/// ```rust
/// use agentflow_bootstrap::InstallError;
///
/// fn report(error: InstallError) {
///     eprintln!("install failed: {}", error);
///     eprintln!("to fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
    /// The installer process could not be started at all.
    #[error("installer `{program}` could not be started")]
    Spawn {
        /// The program that failed to spawn.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The installer ran but did not finish with exit code 0.
    ///
    /// A signal-killed installer lands here as well; only a clean zero
    /// exit counts as a successful install.
    #[error("installer `{command}` failed with {exit}")]
    InstallerFailed {
        /// Rendered command line that was run.
        command: String,
        /// How the installer ended.
        exit: ChildExit,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },
}

impl InstallError {
    /// Get an actionable suggestion for fixing this error.
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::Spawn { fix, .. } => fix,
            Self::InstallerFailed { fix, .. } => fix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_display() {
        let error = InstallError::Spawn {
            program: "uv".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            fix: "Check that `uv` is installed and on PATH".to_string(),
        };
        assert!(error.to_string().contains("uv"));
        assert!(error.to_string().contains("could not be started"));
    }

    #[test]
    fn test_installer_failed_display() {
        let error = InstallError::InstallerFailed {
            command: "uv tool install agentflow".to_string(),
            exit: ChildExit::Code(2),
            fix: "See the installer output above for details".to_string(),
        };
        assert!(error.to_string().contains("exit code 2"));
        assert!(error.to_string().contains("uv tool install agentflow"));
    }

    #[test]
    fn test_all_variants_have_fix() {
        let errors = vec![
            InstallError::Spawn {
                program: "uv".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
                fix: "Check that `uv` is installed and on PATH".to_string(),
            },
            InstallError::InstallerFailed {
                command: "python3 -m pip install".to_string(),
                exit: ChildExit::Signaled,
                fix: "See the installer output above for details".to_string(),
            },
        ];
        for error in errors {
            assert!(!error.fix_suggestion().is_empty());
        }
    }
}
