//! Laurea CLI — Deploy an academic credential registry.
//!
//! Subcommands: init, deploy.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Laurea — Access-controlled registry of academic credentials.
#[derive(Parser, Debug)]
#[command(name = "laurea", version, about, long_about = None)]
struct Cli {
    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a starter deployment configuration.
    Init(commands::init::InitArgs),
    /// Deploy a registry from a configuration and report its genesis state.
    Deploy(commands::deploy::DeployArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init(args) => {
            init_tracing(cli.log_level.as_deref().unwrap_or("info"), "text")?;
            commands::init::run(args)
        }
        Commands::Deploy(args) => {
            let config = config::LaureaConfig::load(&args.config)?;
            let level = cli
                .log_level
                .clone()
                .unwrap_or_else(|| config.logging.level.clone());
            init_tracing(&level, &config.logging.format)?;
            commands::deploy::run(args, &config)
        }
    }
}

fn init_tracing(level: &str, format: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        "text" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init(),
        other => anyhow::bail!("unknown log format '{}' (expected text or json)", other),
    }
    Ok(())
}
