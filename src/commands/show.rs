//! Show command - displays information.

use anyhow::Result;
use hexpub::cache::PublishStatus;
use hexpub::config::Config;
use hexpub::publish::OUTPUT_HEX;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show configuration
    Config { json: bool },
    /// Compare the built image with output.hex
    Status,
}

/// Execute the show command.
pub fn cmd_show(target: ShowTarget, config: &Config) -> Result<()> {
    match target {
        ShowTarget::Config { json: true } => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ShowTarget::Config { json: false } => config.print(),
        ShowTarget::Status => {
            let status = PublishStatus::check(config);

            println!("Status:");
            println!(
                "  {}: {}",
                status.artifact.display(),
                describe(status.artifact_hash.as_deref())
            );
            println!(
                "  {}: {}",
                OUTPUT_HEX,
                describe(status.output_hash.as_deref())
            );
            if status.is_up_to_date() {
                println!("  Published image is up to date.");
            } else if status.artifact_hash.is_some() {
                println!(
                    "  Published image is stale. Run 'hexpub publish {}'.",
                    status.artifact.display()
                );
            } else {
                println!("  Nothing built yet.");
            }
        }
    }
    Ok(())
}

fn describe(hash: Option<&str>) -> &str {
    hash.unwrap_or("missing")
}
