//! `laurea deploy` — Deploy a registry from its genesis configuration.
//!
//! Constructs the registry, has the owner add every configured institution,
//! and prints the resulting state and emitted events as JSON.

use clap::Args;
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

use laurea_core::{CredentialRegistry, EventLog, Identity, RegistryEvent, TracingSink};

use crate::config::LaureaConfig;

#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Path to the configuration file (TOML).
    #[arg(short, long, default_value = "laurea.toml")]
    pub config: PathBuf,
}

/// Summary printed after a deployment.
#[derive(Debug, Serialize)]
pub struct DeploymentReport {
    pub owner: Identity,
    pub institutions: Vec<InstitutionSummary>,
    pub events: Vec<RegistryEvent>,
}

#[derive(Debug, Serialize)]
pub struct InstitutionSummary {
    pub id: Identity,
    pub name: String,
    pub is_active: bool,
}

pub fn run(args: &DeployArgs, config: &LaureaConfig) -> anyhow::Result<()> {
    tracing::info!(config = %args.config.display(), "deploying credential registry");
    let report = deploy(config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Deploy the registry described by `config` and summarize its state.
pub fn deploy(config: &LaureaConfig) -> anyhow::Result<DeploymentReport> {
    let registry =
        CredentialRegistry::from_genesis(&config.registry, (EventLog::new(), TracingSink))?;

    // A genesis may repeat an id under the overwrite policy; report each once.
    let mut seen = HashSet::new();
    let institutions = config
        .registry
        .institutions
        .iter()
        .filter(|genesis| seen.insert(genesis.id.clone()))
        .filter_map(|genesis| {
            registry
                .institution(&genesis.id)
                .map(|inst| InstitutionSummary {
                    id: genesis.id.clone(),
                    name: inst.name.clone(),
                    is_active: inst.is_active,
                })
        })
        .collect();

    Ok(DeploymentReport {
        owner: registry.owner().clone(),
        institutions,
        events: registry.into_sink().0.into_events(),
    })
}
