// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crxdeploy")]
#[command(about = "Deploy content packages through a CRX repository admin console")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print only the final result
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new crxdeploy.yml configuration file
    Init {
        /// Console URL, e.g. http://localhost:4502/crx
        #[arg(long)]
        server: Option<String>,

        /// Path of the package archive to deploy
        #[arg(long)]
        package: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Deploy the package to the configured server
    Deploy {
        /// Target destination (defined in config)
        #[arg(short, long)]
        destination: Option<String>,

        /// Package archive to deploy instead of the configured one
        #[arg(long)]
        package: Option<PathBuf>,

        /// Stop after node deletion; do not upload or install
        #[arg(long)]
        skip_install: bool,

        /// Download the server's copy of the package first
        #[arg(long)]
        backup: bool,

        /// Take the backup and stop
        #[arg(long)]
        backup_only: bool,
    },

    /// Remove .vlt metadata files from a directory tree
    Clean {
        /// Directory to sweep (defaults to the current directory)
        dir: Option<PathBuf>,
    },

    /// Show the resolved configuration without contacting the server
    Status {
        /// Target destination (defined in config)
        #[arg(short, long)]
        destination: Option<String>,
    },
}
