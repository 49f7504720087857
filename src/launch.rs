//! Hand-off to the installed tool.

use crate::exec::ProcessRunner;
use tracing::debug;

/// Launch the tool by bare command name with the forwarded argument
/// vector and inherited stdio, returning the exit code for the parent.
///
/// The parent adopts the child's numeric exit code. A child without one
/// (killed by a signal) maps to 0, and so does a launch that cannot spawn
/// at all; both cases are recorded at debug level only.
pub async fn launch_tool<R: ProcessRunner>(runner: &R, tool: &str, args: &[String]) -> i32 {
    match runner.run_inherited(tool, args).await {
        Ok(exit) => exit.forwarded_code(),
        Err(err) => {
            debug!(tool, error = %err, "hand-off could not spawn the tool");
            0
        }
    }
}
