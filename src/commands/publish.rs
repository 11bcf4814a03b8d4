//! Publish command - copies an existing hex image to output.hex.

use anyhow::Result;
use std::path::PathBuf;

use hexpub::hooks::BuildContext;
use hexpub::publish;

/// Execute the publish command with the given artifacts as build targets.
pub fn cmd_publish(artifacts: Vec<PathBuf>) -> Result<()> {
    publish::on_build_complete(&BuildContext::new(artifacts))
}
