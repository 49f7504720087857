//! Install dispatch: run exactly one strategy's command to completion.

use crate::exec::{ChildExit, ProcessRunner};
use crate::install::{InstallCommand, InstallError};

/// Run the chosen install command with inherited stdio.
///
/// The installer's prompts and output go straight to the user. Only exit
/// code 0 counts as success; anything else (including a signal-killed
/// installer) is a failure. There is no retry and no fallback to the
/// other strategy.
pub async fn run_install<R: ProcessRunner>(
    runner: &R,
    command: &InstallCommand,
) -> Result<(), InstallError> {
    let exit = runner
        .run_inherited(&command.program, &command.args)
        .await
        .map_err(|source| InstallError::Spawn {
            program: command.program.clone(),
            source,
            fix: format!("Check that `{}` is installed and on PATH", command.program),
        })?;

    match exit {
        ChildExit::Code(0) => Ok(()),
        exit => Err(InstallError::InstallerFailed {
            command: command.rendered(),
            exit,
            fix: "See the installer output above for details".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::CapturedOutput;
    use crate::install::InstallStrategy;
    use std::io;

    /// Runner that answers every inherited run with one scripted exit.
    struct OneShotRunner {
        exit: io::Result<ChildExit>,
    }

    impl ProcessRunner for OneShotRunner {
        async fn capture(&self, _program: &str, _args: &[String]) -> io::Result<CapturedOutput> {
            panic!("the dispatcher never captures output");
        }

        async fn run_inherited(&self, _program: &str, _args: &[String]) -> io::Result<ChildExit> {
            match &self.exit {
                Ok(exit) => Ok(*exit),
                Err(err) => Err(io::Error::new(err.kind(), "scripted failure")),
            }
        }
    }

    fn command() -> InstallCommand {
        InstallCommand {
            program: "uv".to_string(),
            args: vec!["tool".to_string(), "install".to_string()],
            strategy: InstallStrategy::UvTool,
        }
    }

    #[tokio::test]
    async fn test_zero_exit_is_success() {
        let runner = OneShotRunner {
            exit: Ok(ChildExit::Code(0)),
        };
        assert!(run_install(&runner, &command()).await.is_ok());
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_failure() {
        let runner = OneShotRunner {
            exit: Ok(ChildExit::Code(2)),
        };
        let err = run_install(&runner, &command()).await.unwrap_err();
        assert!(matches!(
            err,
            InstallError::InstallerFailed {
                exit: ChildExit::Code(2),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_signal_killed_installer_is_failure() {
        let runner = OneShotRunner {
            exit: Ok(ChildExit::Signaled),
        };
        let err = run_install(&runner, &command()).await.unwrap_err();
        assert!(matches!(
            err,
            InstallError::InstallerFailed {
                exit: ChildExit::Signaled,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_spawn_failure() {
        let runner = OneShotRunner {
            exit: Err(io::Error::new(io::ErrorKind::NotFound, "missing")),
        };
        let err = run_install(&runner, &command()).await.unwrap_err();
        assert!(matches!(err, InstallError::Spawn { .. }));
        assert!(err.fix_suggestion().contains("uv"));
    }
}
