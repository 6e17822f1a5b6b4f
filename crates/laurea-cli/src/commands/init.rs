//! `laurea init` — Write a starter deployment configuration.

use clap::Args;
use std::path::PathBuf;

use crate::config::LaureaConfig;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (defaults to current directory).
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

pub fn run(args: &InitArgs) -> anyhow::Result<()> {
    let config_path = args.dir.join("laurea.toml");

    if config_path.exists() {
        anyhow::bail!("configuration file already exists at {}", config_path.display());
    }

    LaureaConfig::example().save(&config_path)?;
    tracing::info!(path = %config_path.display(), "wrote starter config");

    println!("Initialized Laurea deployment at {}", config_path.display());
    println!("Edit laurea.toml to set the registry owner and initial institutions.");
    println!("Run 'laurea deploy' to deploy the registry.");

    Ok(())
}
