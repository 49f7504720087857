//! Process execution seam and child exit classification.

use std::fmt;
use std::io;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// How a child process ended.
///
/// # Example
///
/// ```rust
/// use agentflow_bootstrap::ChildExit;
///
/// assert_eq!(ChildExit::Code(7).forwarded_code(), 7);
/// assert_eq!(ChildExit::Signaled.forwarded_code(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// The child exited with a numeric status code.
    Code(i32),
    /// The child terminated without a numeric status (killed by a signal).
    Signaled,
}

impl ChildExit {
    /// Whether the child finished with exit code 0.
    pub fn success(&self) -> bool {
        matches!(self, Self::Code(0))
    }

    /// The exit code the parent adopts after the hand-off.
    ///
    /// A child with no numeric status maps to 0.
    pub fn forwarded_code(&self) -> i32 {
        match self {
            Self::Code(code) => *code,
            Self::Signaled => 0,
        }
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Code(code),
            None => Self::Signaled,
        }
    }
}

impl fmt::Display for ChildExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "exit code {code}"),
            Self::Signaled => write!(f, "termination by signal"),
        }
    }
}

/// Output captured from a probe invocation.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// How the probe process ended.
    pub exit: ChildExit,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CapturedOutput {
    /// The text to parse a version from: stdout preferred, stderr as
    /// fallback (some interpreters report their version on stderr).
    pub fn report(&self) -> &str {
        if !self.stdout.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Subprocess execution for the launcher.
///
/// The decision procedure never spawns processes directly; it goes through
/// this trait so tests can script an entire environment without real
/// subprocesses.
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Run a command to completion, capturing its output.
    async fn capture(&self, program: &str, args: &[String]) -> io::Result<CapturedOutput>;

    /// Run a command to completion with inherited stdin/stdout/stderr.
    ///
    /// The child's prompts and output go straight to the user; only the
    /// exit classification comes back.
    async fn run_inherited(&self, program: &str, args: &[String]) -> io::Result<ChildExit>;
}

/// Real subprocess execution.
///
/// Each invocation blocks the flow until the child exits; no timeout is
/// imposed, so a hung child hangs the launcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    async fn capture(&self, program: &str, args: &[String]) -> io::Result<CapturedOutput> {
        let output = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await?;

        Ok(CapturedOutput {
            exit: output.status.into(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    async fn run_inherited(&self, program: &str, args: &[String]) -> io::Result<ChildExit> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        Ok(status.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarded_code() {
        assert_eq!(ChildExit::Code(0).forwarded_code(), 0);
        assert_eq!(ChildExit::Code(5).forwarded_code(), 5);
        assert_eq!(ChildExit::Signaled.forwarded_code(), 0);
    }

    #[test]
    fn test_success_only_for_code_zero() {
        assert!(ChildExit::Code(0).success());
        assert!(!ChildExit::Code(1).success());
        assert!(!ChildExit::Signaled.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_classification() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status 0 is exit code 0; 256 is exit code 1; a low raw
        // value is a signal number.
        assert_eq!(ChildExit::from(ExitStatus::from_raw(0)), ChildExit::Code(0));
        assert_eq!(
            ChildExit::from(ExitStatus::from_raw(256)),
            ChildExit::Code(1)
        );
        assert_eq!(ChildExit::from(ExitStatus::from_raw(9)), ChildExit::Signaled);
    }

    #[test]
    fn test_report_prefers_stdout() {
        let output = CapturedOutput {
            exit: ChildExit::Code(0),
            stdout: "Python 3.11.2".to_string(),
            stderr: "noise".to_string(),
        };
        assert_eq!(output.report(), "Python 3.11.2");
    }

    #[test]
    fn test_report_falls_back_to_stderr() {
        let output = CapturedOutput {
            exit: ChildExit::Code(0),
            stdout: String::new(),
            stderr: "Python 2.7.18".to_string(),
        };
        assert_eq!(output.report(), "Python 2.7.18");
    }

    #[test]
    fn test_display() {
        assert_eq!(ChildExit::Code(2).to_string(), "exit code 2");
        assert_eq!(ChildExit::Signaled.to_string(), "termination by signal");
    }

    #[tokio::test]
    async fn test_capture_nonexistent_program() {
        let args = vec!["--version".to_string()];
        let result = SystemRunner
            .capture("/nonexistent/path/to/interpreter", &args)
            .await;
        assert!(result.is_err());
    }
}
