//! Executable lookup with fallback locations.

use std::path::{Path, PathBuf};

/// System fallback paths to check if an executable is not found in PATH.
const FALLBACK_PATHS: &[&str] = &["/usr/local/bin", "/usr/bin"];

/// Resolution of command names to executables.
///
/// This is the seam for the capability probe: the launcher only ever asks
/// "is this name resolvable", so tests substitute a fake that answers from
/// a fixed set instead of touching the real search path.
pub trait ExecutableLookup {
    /// Resolve a command name to an executable path, or `None` when the
    /// name is not resolvable.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Search-path lookup against the real system.
///
/// Primary resolution goes through the `which` crate (the platform's
/// `where`/`which` equivalent, handling symlinks and platform
/// differences). Names not on PATH are also checked in common system
/// directories and user-local install locations, since a tool installed
/// moments ago may live in a directory the current PATH predates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLookup;

impl ExecutableLookup for SystemLookup {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }

        for dir in FALLBACK_PATHS {
            let path = PathBuf::from(dir).join(name);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(home) = std::env::var("HOME") {
            return home_fallback(name, Path::new(&home));
        }

        None
    }
}

/// User-local locations for tools installed without a PATH update.
fn home_fallback(name: &str, home: &Path) -> Option<PathBuf> {
    let candidates = [home.join(".local/bin").join(name), home.join("bin").join(name)];
    candidates.into_iter().find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_common_executable() {
        // ls should exist on any Linux system
        let result = SystemLookup.resolve("ls");
        assert!(result.is_some());
        assert!(result.unwrap().exists());
    }

    #[test]
    fn test_resolve_nonexistent_executable() {
        let result = SystemLookup.resolve("definitely_not_a_real_executable_12345");
        assert!(result.is_none());
    }

    #[test]
    fn test_home_fallback_finds_local_bin() {
        let home = tempfile::tempdir().unwrap();
        let bin_dir = home.path().join(".local/bin");
        std::fs::create_dir_all(&bin_dir).unwrap();
        std::fs::write(bin_dir.join("sometool"), b"#!/bin/sh\n").unwrap();

        let found = home_fallback("sometool", home.path());
        assert_eq!(found, Some(bin_dir.join("sometool")));
    }

    #[test]
    fn test_home_fallback_empty_home() {
        let home = tempfile::tempdir().unwrap();
        assert!(home_fallback("sometool", home.path()).is_none());
    }
}
