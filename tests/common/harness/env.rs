//! Isolated test environment with temp directory.

use super::QuillCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary home directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Commands created through [`TestEnv::cmd`] see the temp directory as
/// their home, so the built-in samples are used unless a snapshot file is
/// passed explicitly.
pub struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Returns the path to the environment's directory.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes a file to the test environment and returns its path.
    ///
    /// Useful for creating snapshot files, custom templates, etc.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a QuillCommand configured for this test environment.
    pub fn cmd(&self) -> QuillCommand {
        QuillCommand::new().home(self.dir())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
