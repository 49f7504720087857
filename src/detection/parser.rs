//! Version extraction from interpreter output.

use crate::interpreter::VersionPair;
use regex::Regex;

/// Extract the first `major.minor` pair from version-query output.
///
/// The first occurrence of a `<digits>.<digits>` substring wins; trailing
/// text after the pair is ignored, so `"Python 3.11.2"` and
/// `"Python 3.10.0rc1"` both parse. Returns `None` when no such substring
/// exists or a component does not fit the integer type.
pub(crate) fn parse_version_pair(output: &str) -> Option<VersionPair> {
    let re = Regex::new(r"(\d+)\.(\d+)").expect("Invalid version regex");
    let caps = re.captures(output)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    Some(VersionPair::new(major, minor))
}
