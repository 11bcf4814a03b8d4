//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `build` - Run a build command and its post-actions
//! - `publish` - Publish an already built hex image
//! - `show` - Display information

pub mod build;
pub mod publish;
pub mod show;

pub use build::cmd_build;
pub use publish::cmd_publish;
pub use show::cmd_show;
