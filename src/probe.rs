//! Probe result types for interpreter detection.

use crate::interpreter::{Interpreter, VersionPair};

/// Why a responding candidate was not selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RejectReason {
    /// The version query ran but its output contained no parseable
    /// `major.minor` pair.
    Unparseable,
    /// A version was parsed but falls below the floor.
    BelowFloor {
        /// The version that was found.
        found: VersionPair,
    },
}

impl RejectReason {
    /// Human-readable description of the rejection.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Unparseable => "no parseable version in output",
            Self::BelowFloor { .. } => "version below the required floor",
        }
    }
}

/// Outcome of probing a single interpreter candidate.
///
/// Probe problems are values, not faults: a candidate that cannot be
/// invoked, exits non-zero, or reports an unusable version produces
/// `NotFound` or `Rejected`, and the locator moves on to the next
/// candidate. Nothing here is an error condition by itself.
///
/// # Example
///
/// ```rust
/// use agentflow_bootstrap::InterpreterProbe;
///
/// let probe = InterpreterProbe::NotFound;
/// assert!(!probe.is_accepted());
/// assert!(probe.into_accepted().is_none());
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum InterpreterProbe {
    /// The candidate answered the version query and meets the floor.
    Accepted(Interpreter),
    /// The candidate answered but was not selected.
    Rejected(RejectReason),
    /// The candidate could not be invoked successfully (missing command,
    /// spawn failure, or non-zero exit of the version query).
    NotFound,
}

impl InterpreterProbe {
    /// Whether this probe selected the candidate.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Unwrap the selected interpreter, if any.
    pub fn into_accepted(self) -> Option<Interpreter> {
        match self {
            Self::Accepted(interpreter) => Some(interpreter),
            _ => None,
        }
    }
}
