//! Interpreter candidate kinds, version pairs, and the version floor.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// A candidate runtime interpreter command.
///
/// Candidates are tried in declaration order: `python3` first, then
/// `python`, then the `py` launcher found on Windows installs.
///
/// # Extensibility
///
/// This enum is marked `#[non_exhaustive]` to allow adding new candidates
/// in future versions. When matching on `InterpreterKind`, always include
/// a wildcard pattern to handle future variants.
///
/// # Example
///
/// ```rust
/// use agentflow_bootstrap::InterpreterKind;
///
/// let names: Vec<_> = InterpreterKind::all().map(|k| k.command_name()).collect();
/// assert_eq!(names, ["python3", "python", "py"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[non_exhaustive]
pub enum InterpreterKind {
    /// The `python3` command.
    Python3,
    /// The `python` command.
    Python,
    /// The `py` launcher (Windows).
    Py,
}

impl InterpreterKind {
    /// The command name to invoke for this candidate.
    pub fn command_name(&self) -> &'static str {
        match self {
            Self::Python3 => "python3",
            Self::Python => "python",
            Self::Py => "py",
        }
    }

    /// Iterator over all candidates in preference order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

/// A parsed `major.minor` version pair extracted from interpreter output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionPair {
    /// Major version component.
    pub major: u32,
    /// Minor version component.
    pub minor: u32,
}

impl VersionPair {
    /// Construct a version pair.
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for VersionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Minimum acceptable `(major, minor)` interpreter version.
///
/// The default floor is 3.10.
///
/// # Example
///
/// ```rust
/// use agentflow_bootstrap::{VersionFloor, VersionPair};
///
/// let floor = VersionFloor::default();
/// assert!(floor.accepts(VersionPair::new(3, 11)));
/// assert!(!floor.accepts(VersionPair::new(3, 9)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFloor {
    /// Minimum major version.
    pub major: u32,
    /// Minimum minor version when the major version is exactly at the floor.
    pub minor: u32,
}

impl VersionFloor {
    /// Whether a parsed version meets this floor.
    ///
    /// Accepts when `major > floor.major`, or `major == floor.major` and
    /// `minor >= floor.minor`.
    pub fn accepts(&self, version: VersionPair) -> bool {
        version.major > self.major || (version.major == self.major && version.minor >= self.minor)
    }
}

impl Default for VersionFloor {
    fn default() -> Self {
        Self { major: 3, minor: 10 }
    }
}

impl fmt::Display for VersionFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A selected interpreter: the candidate that answered the version query
/// and met the floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpreter {
    /// Which candidate was selected.
    pub kind: InterpreterKind,
    /// Parsed `major.minor` pair.
    pub version: VersionPair,
    /// Trimmed version-query output (e.g. `"Python 3.11.2"`).
    pub raw_version: String,
}
