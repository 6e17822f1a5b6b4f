//! Deployment configuration loading and management.

use laurea_core::GenesisConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full configuration for a registry deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaureaConfig {
    /// Owner, policy, and initial institutions.
    pub registry: GenesisConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}
fn default_log_format() -> String {
    "text".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LaureaConfig {
    /// Starter configuration written by `laurea init`.
    pub fn example() -> Self {
        Self {
            registry: GenesisConfig::new("0xRegistryOwner")
                .with_institution("0xYourInstitutionAddress", "First University"),
            logging: LoggingConfig::default(),
        }
    }

    /// Load config from a TOML file. The file must exist and name the
    /// registry owner; logging settings fall back to defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "configuration file not found at {} (run 'laurea init' to create one)",
                path.display()
            );
        }
        let contents = std::fs::read_to_string(path)?;
        let config: LaureaConfig = toml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("invalid configuration {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Save the current config to a TOML file.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}
