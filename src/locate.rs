//! Interpreter location: version-query each candidate, first acceptable wins.

use crate::detection::parse_version_pair;
use crate::exec::ProcessRunner;
use crate::interpreter::{Interpreter, InterpreterKind, VersionFloor};
use crate::probe::{InterpreterProbe, RejectReason};
use tracing::debug;

/// Probe a single interpreter candidate.
///
/// Runs `{command} --version`, parses the first `major.minor` pair from
/// the output (stdout preferred, stderr fallback), and compares it to the
/// floor. This never fails: a missing command, a spawn error, or a
/// non-zero exit folds into [`InterpreterProbe::NotFound`], and unusable
/// output folds into [`InterpreterProbe::Rejected`]. Problems are recorded
/// at debug level only.
pub async fn probe_interpreter<R: ProcessRunner>(
    runner: &R,
    kind: InterpreterKind,
    floor: VersionFloor,
) -> InterpreterProbe {
    let command = kind.command_name();
    let args = vec!["--version".to_string()];

    let output = match runner.capture(command, &args).await {
        Ok(output) => output,
        Err(err) => {
            debug!(command, error = %err, "version query could not run");
            return InterpreterProbe::NotFound;
        }
    };

    if !output.exit.success() {
        debug!(command, exit = %output.exit, "version query failed");
        return InterpreterProbe::NotFound;
    }

    let report = output.report().trim().to_string();
    let Some(version) = parse_version_pair(&report) else {
        debug!(command, report = %report, "no parseable version in output");
        return InterpreterProbe::Rejected(RejectReason::Unparseable);
    };

    if floor.accepts(version) {
        InterpreterProbe::Accepted(Interpreter {
            kind,
            version,
            raw_version: report,
        })
    } else {
        debug!(command, %version, %floor, "version below floor");
        InterpreterProbe::Rejected(RejectReason::BelowFloor { found: version })
    }
}

/// Walk the candidates in order and return the first accepted interpreter.
///
/// Rejected and not-found candidates are skipped silently; `None` means
/// the list is exhausted with no candidate meeting the floor.
pub async fn locate_interpreter<R: ProcessRunner>(
    runner: &R,
    candidates: &[InterpreterKind],
    floor: VersionFloor,
) -> Option<Interpreter> {
    for kind in candidates {
        if let Some(interpreter) = probe_interpreter(runner, *kind, floor)
            .await
            .into_accepted()
        {
            return Some(interpreter);
        }
    }
    None
}
