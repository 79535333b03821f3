//! Filesystem port for the queries servicing resolution needs.

use std::fs;
use std::io;
use std::path::Path;

/// Abstract filesystem queries used during resolution.
///
/// Implementations must not create or modify anything; resolution only probes.
pub trait FileSystemProbe: Send + Sync {
    /// Returns `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns `true` if `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Read a small UTF-8 text file (index or version descriptor).
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`FileSystemProbe`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystemProbe for StdFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn std_filesystem_distinguishes_files_and_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("servicing.inf");
        fs::write(&file, "# empty").unwrap();

        let probe = StdFileSystem;
        assert!(probe.is_dir(dir.path()));
        assert!(!probe.is_file(dir.path()));
        assert!(probe.is_file(&file));
        assert!(!probe.is_dir(&file));
        assert_eq!(probe.read_to_string(&file).unwrap(), "# empty");
    }

    #[test]
    fn std_filesystem_missing_path() {
        let probe = StdFileSystem;
        let missing = Path::new("/nonexistent/rthost/servicing");
        assert!(!probe.is_dir(missing));
        assert!(!probe.is_file(missing));
        assert!(probe.read_to_string(missing).is_err());
    }
}
