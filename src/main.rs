// ABOUTME: Entry point for the crxdeploy CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use crxdeploy::config::{self, Config, Overrides};
use crxdeploy::error::Result;
use crxdeploy::output::{Output, OutputMode};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut output = Output::new(mode);

    if let Err(e) = run(cli.command, &mut output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(command: Commands, output: &mut Output) -> Result<()> {
    let cwd = env::current_dir()?;

    match command {
        Commands::Init {
            server,
            package,
            force,
        } => {
            config::init_config(&cwd, server.as_deref(), package.as_deref(), force)?;
            output.success(&format!("Created {}", config::CONFIG_FILENAME));
            Ok(())
        }
        Commands::Deploy {
            destination,
            package,
            skip_install,
            backup,
            backup_only,
        } => {
            let config = load(&cwd, destination.as_deref())?;
            let config = config.with_overrides(&Overrides {
                package,
                skip_install,
                backup,
                backup_only,
            })?;
            output.start_timer();
            commands::deploy(&config, output).await
        }
        Commands::Clean { dir } => {
            let dir = dir.unwrap_or(cwd);
            commands::clean(&dir, output)
        }
        Commands::Status { destination } => {
            let config = load(&cwd, destination.as_deref())?;
            commands::status(&config, output);
            Ok(())
        }
    }
}

fn load(dir: &std::path::Path, destination: Option<&str>) -> Result<Config> {
    let config = Config::discover(dir)?;
    match destination {
        Some(dest) => config.for_destination(dest),
        None => Ok(config),
    }
}
