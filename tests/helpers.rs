//! Shared test utilities for hexpub tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment: a project directory with a mock build tree.
///
/// The process working directory is switched to the project directory for
/// the lifetime of the environment and restored on drop, so tests using it
/// must be `#[serial]`.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Project root (working directory while the env is alive)
    pub project: PathBuf,
    /// Build output directory inside the project
    pub build_dir: PathBuf,
    previous_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let project = temp_dir.path().to_path_buf();
        let build_dir = project.join(".pio/build/uno");
        fs::create_dir_all(&build_dir).expect("Failed to create build dir");

        let previous_dir = std::env::current_dir().expect("Failed to read cwd");
        std::env::set_current_dir(&project).expect("Failed to enter project dir");

        Self {
            _temp_dir: temp_dir,
            project,
            build_dir,
            previous_dir,
        }
    }

    /// Write a mock firmware image into the build directory.
    pub fn write_artifact(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.build_dir.join(name);
        fs::write(&path, content).expect("Failed to write artifact");
        path
    }

    /// Path of the published image.
    pub fn output_hex(&self) -> PathBuf {
        self.project.join("output.hex")
    }

    /// Config matching the mock build tree.
    pub fn config(&self) -> hexpub::config::Config {
        hexpub::config::Config {
            build_dir: ".pio/build/uno".to_string(),
            progname: "firmware".to_string(),
        }
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous_dir);
    }
}

/// Assert that a file exists with exactly the given bytes.
pub fn assert_file_bytes(path: &Path, expected: &[u8]) {
    let actual = fs::read(path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e));
    assert_eq!(actual, expected, "content of {}", path.display());
}

/// Bytes `DE AD BE EF`.
pub const DEADBEEF: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];
