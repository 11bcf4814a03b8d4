//! Build command - runs the firmware build, then publishes the hex image.

use anyhow::{bail, Result};

use hexpub::config::Config;
use hexpub::orchestrator::{BuildStep, Orchestrator};
use hexpub::process::Cmd;

/// Execute the build command.
///
/// `target` overrides the hook key of the produced artifact.
pub fn cmd_build(config: &Config, target: Option<String>, command: &[String]) -> Result<()> {
    let Some((program, args)) = command.split_first() else {
        bail!("No build command given. Usage: hexpub build -- <command> [args...]");
    };

    let orchestrator = Orchestrator::with_publisher(config.clone());
    let mut step = BuildStep::hex(Cmd::new(program).args(args));
    if let Some(target) = target {
        step.target = target;
    }

    orchestrator.run(step)?;
    Ok(())
}
