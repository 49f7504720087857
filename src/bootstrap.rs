//! The whole launch flow as one sequential state machine.

use crate::config::BootstrapConfig;
use crate::detection::ExecutableLookup;
use crate::exec::ProcessRunner;
use crate::install::{run_install, InstallError, InstallStrategy};
use crate::interpreter::VersionFloor;
use crate::launch::launch_tool;
use crate::locate::locate_interpreter;
use crate::progress::BootstrapProgress;
use thiserror::Error;

/// Terminal failures of the bootstrap flow.
///
/// Both variants map to exit code 1 in the binary; everything else the
/// flow can encounter either folds into the next probe step or becomes
/// the forwarded exit code of the launched tool.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BootstrapError {
    /// No candidate interpreter met the version floor.
    #[error("no suitable interpreter found (need Python {floor} or newer)")]
    NoInterpreter {
        /// The floor no candidate met.
        floor: VersionFloor,
    },

    /// The install invocation failed.
    #[error(transparent)]
    Install(#[from] InstallError),
}

impl BootstrapError {
    /// Actionable suggestion for resolving the failure.
    pub fn fix_suggestion(&self) -> String {
        match self {
            Self::NoInterpreter { floor } => {
                format!("Install Python {floor} or newer, then run the launcher again")
            }
            Self::Install(err) => err.fix_suggestion().to_string(),
        }
    }
}

/// Run the full flow: locate an interpreter, install the tool when it is
/// missing, and hand off with the forwarded arguments.
///
/// Strictly sequential: each child process is awaited to completion
/// before the next step, and no timeouts are imposed on children. The
/// returned value is the exit code for the parent process; `Err` covers
/// the two terminal failures.
///
/// # Example
///
/// ```rust,no_run
/// use agentflow_bootstrap::{run, BootstrapConfig, SystemLookup, SystemRunner};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let config = BootstrapConfig::default();
///     let args: Vec<String> = std::env::args().skip(1).collect();
///     let code = match run(&config, &SystemRunner, &SystemLookup, &args, |_| {}).await {
///         Ok(code) => code,
///         Err(err) => {
///             eprintln!("{err}");
///             1
///         }
///     };
///     std::process::exit(code);
/// }
/// ```
pub async fn run<R, L, F>(
    config: &BootstrapConfig,
    runner: &R,
    lookup: &L,
    args: &[String],
    on_progress: F,
) -> Result<i32, BootstrapError>
where
    R: ProcessRunner,
    L: ExecutableLookup,
    F: Fn(BootstrapProgress),
{
    let interpreter = locate_interpreter(runner, &config.candidates, config.floor)
        .await
        .ok_or(BootstrapError::NoInterpreter {
            floor: config.floor,
        })?;
    on_progress(BootstrapProgress::InterpreterSelected {
        interpreter: interpreter.clone(),
    });

    if lookup.resolve(&config.tool).is_some() {
        on_progress(BootstrapProgress::ToolPresent {
            tool: config.tool.clone(),
        });
        return Ok(launch_tool(runner, &config.tool, args).await);
    }

    let strategy = InstallStrategy::select(lookup.resolve(&config.frontend).is_some());
    on_progress(BootstrapProgress::Installing { strategy });
    run_install(runner, &strategy.command(config, &interpreter)).await?;
    on_progress(BootstrapProgress::InstallCompleted {
        tool: config.tool.clone(),
    });

    Ok(launch_tool(runner, &config.tool, args).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_interpreter_display_and_fix() {
        let error = BootstrapError::NoInterpreter {
            floor: VersionFloor::default(),
        };
        assert_eq!(
            error.to_string(),
            "no suitable interpreter found (need Python 3.10 or newer)"
        );
        assert!(error.fix_suggestion().contains("3.10"));
    }

    #[test]
    fn test_install_error_fix_passes_through() {
        let error = BootstrapError::Install(InstallError::InstallerFailed {
            command: "uv tool install".to_string(),
            exit: crate::exec::ChildExit::Code(2),
            fix: "See the installer output above for details".to_string(),
        });
        assert_eq!(
            error.fix_suggestion(),
            "See the installer output above for details"
        );
    }
}
