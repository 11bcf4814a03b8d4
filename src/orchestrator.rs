//! Build orchestration: run a build step, then its post-actions.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::hooks::{BuildContext, HookRegistry, PostActionRegistrar};
use crate::process::Cmd;
use crate::publish;
use crate::timing::Timer;

/// A build step and the hook key of the target it produces.
pub struct BuildStep {
    pub command: Cmd,
    pub target: String,
}

impl BuildStep {
    /// Step producing the firmware hex image.
    pub fn hex(command: Cmd) -> Self {
        Self {
            command,
            target: publish::HEX_TARGET.to_string(),
        }
    }
}

/// Runs build steps and fires the post-actions registered for their targets.
pub struct Orchestrator {
    registry: HookRegistry,
}

impl Orchestrator {
    /// Orchestrator with no post-actions registered.
    pub fn new(config: Config) -> Self {
        Self {
            registry: HookRegistry::new(config),
        }
    }

    /// Orchestrator with the hex publisher registered.
    pub fn with_publisher(config: Config) -> Self {
        let mut orchestrator = Self::new(config);
        orchestrator.init(publish::register);
        orchestrator
    }

    /// Hand the registry to an initialization routine.
    pub fn init<F>(&mut self, init: F)
    where
        F: FnOnce(&mut dyn PostActionRegistrar),
    {
        init(&mut self.registry);
    }

    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    /// Run the step; on success fire its post-actions.
    ///
    /// A failed step fires nothing. Returns the number of post-actions run.
    pub fn run(&self, step: BuildStep) -> Result<usize> {
        let target = self.registry.expand(&step.target)?;

        println!("Building {}...", target.display());
        let timer = Timer::start(step.command.display());
        let program = step.command.program().to_string();
        step.command
            .error_msg(format!("Build command '{}' failed", program))
            .run_interactive()?;
        timer.finish();

        self.complete(target)
    }

    /// Report a target as built and fire its post-actions.
    pub fn complete(&self, target: PathBuf) -> Result<usize> {
        let ctx = BuildContext::single(target.clone());
        let fired = self
            .registry
            .fire(&target, &ctx)
            .with_context(|| format!("Build of {} failed", target.display()))?;
        if self.registry.is_empty() {
            eprintln!("[WARN] No post-actions registered");
        } else if fired == 0 {
            eprintln!("[WARN] No post-actions registered for {}", target.display());
        }
        Ok(fired)
    }
}
