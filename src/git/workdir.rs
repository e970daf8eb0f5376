//! Temporary change of the process working directory.
//!
//! The working directory is shared by the whole process, so callers must not
//! run two of these scopes at once from different threads.

use crate::error::{GitLogError, Result};
use scopeguard::ScopeGuard;
use std::env;
use std::path::{Path, PathBuf};

/// Changes into `path` and returns a guard that changes back when dropped
pub fn enter(path: &Path) -> Result<ScopeGuard<PathBuf, impl FnOnce(PathBuf)>> {
    let original = env::current_dir().map_err(|source| GitLogError::InvalidWorkingDirectory {
        path: PathBuf::from("."),
        source,
    })?;

    let target = if path.is_absolute() {
        path.to_path_buf()
    } else {
        original.join(path)
    };

    env::set_current_dir(&target).map_err(|source| GitLogError::InvalidWorkingDirectory {
        path: target.clone(),
        source,
    })?;
    log::debug!("Entered {}", target.display());

    Ok(scopeguard::guard(original, |original| {
        match env::set_current_dir(&original) {
            Ok(()) => log::debug!("Returned to {}", original.display()),
            Err(e) => log::warn!("Failed to return to {}: {}", original.display(), e),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_enter_and_restore() {
        let before = env::current_dir().unwrap();
        let dir = TempDir::new().unwrap();
        let expected = dir.path().canonicalize().unwrap();

        {
            let _guard = enter(dir.path()).unwrap();
            assert_eq!(env::current_dir().unwrap().canonicalize().unwrap(), expected);
        }

        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn test_missing_directory() {
        let before = env::current_dir().unwrap();

        let err = enter(Path::new("/notfound/repo")).unwrap_err();
        assert!(matches!(err, GitLogError::InvalidWorkingDirectory { .. }));
        assert_eq!(env::current_dir().unwrap(), before);
    }
}
