//! Content digests for published artifacts.
//!
//! Uses SHA256 so `show status` can tell whether `output.hex` still matches
//! the image in the build directory.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::publish::OUTPUT_HEX;

/// SHA256 hex digest of a file.
/// Returns None if the file doesn't exist.
/// Logs a warning if the file exists but can't be read.
pub fn hash_file(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    match fs::read(path) {
        Ok(content) => Some(format!("{:x}", Sha256::digest(&content))),
        Err(e) => {
            eprintln!("  [WARN] Failed to read {} for hashing: {}", path.display(), e);
            None
        }
    }
}

/// Digests of the built image and of the published copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishStatus {
    pub artifact: PathBuf,
    pub artifact_hash: Option<String>,
    pub output_hash: Option<String>,
}

impl PublishStatus {
    /// Hash the configured hex image and `output.hex` in the working directory.
    pub fn check(config: &Config) -> Self {
        let artifact = config.hex_artifact();
        Self {
            artifact_hash: hash_file(&artifact),
            output_hash: hash_file(Path::new(OUTPUT_HEX)),
            artifact,
        }
    }

    /// True if `output.hex` matches the built image.
    pub fn is_up_to_date(&self) -> bool {
        self.artifact_hash.is_some() && self.artifact_hash == self.output_hash
    }
}
