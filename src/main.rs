//! hexpub - firmware hex image publisher.
//!
//! Runs the firmware build and, once `$BUILD_DIR/${PROGNAME}.hex` exists,
//! copies it to `output.hex` in the current directory.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use hexpub::config::Config;

#[derive(Parser)]
#[command(name = "hexpub")]
#[command(about = "Publish the firmware hex image after a build")]
#[command(
    after_help = "QUICK START:\n  hexpub build -- pio run   Build, then copy the hex image to output.hex\n  hexpub publish <HEX>      Copy an existing image to output.hex\n  hexpub show status        Check whether output.hex is up to date"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a build command, then the post-actions of its target
    Build {
        /// Hook key of the produced artifact (default: $BUILD_DIR/${PROGNAME}.hex)
        #[arg(long)]
        target: Option<String>,

        /// Build command and its arguments
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Copy a built hex image to output.hex (first path is the source)
    Publish {
        #[arg(required = true)]
        artifacts: Vec<PathBuf>,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare the built image with output.hex
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let base_dir = std::env::current_dir().context("Failed to read current directory")?;
    let config = Config::load(&base_dir);

    match cli.command {
        Commands::Build { target, command } => {
            commands::cmd_build(&config, target, &command)?;
        }

        Commands::Publish { artifacts } => {
            commands::cmd_publish(artifacts)?;
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config { json } => commands::show::ShowTarget::Config { json },
                ShowTarget::Status => commands::show::ShowTarget::Status,
            };
            commands::cmd_show(show_target, &config)?;
        }
    }

    Ok(())
}
