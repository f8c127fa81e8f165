//! Optional configuration file for deployment defaults.

use std::path::Path;

use anyhow::{Context, Result};
use mxcraft_core::Network;
use serde::{Deserialize, Serialize};

/// The default name for the mxcraft configuration file.
pub const CRAFTCONF_FILENAME: &str = "Mxcraft.toml";

/// Deployment defaults loaded from `Mxcraft.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CraftConfig {
    /// Default target network.
    pub network: Option<Network>,
    /// Skip the toolchain build and deploy a placeholder artifact.
    pub skip_build: Option<bool>,
    /// Completion model for the authoring path.
    pub model: Option<String>,
}

impl CraftConfig {
    /// Load the configuration from a TOML file, or from the default file
    /// name inside a directory.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "Configuration file or directory not found: {}",
                path.display()
            ));
        }

        let config_path = if path.is_dir() {
            path.join(CRAFTCONF_FILENAME)
        } else {
            path.to_path_buf()
        };

        let content = std::fs::read_to_string(&config_path)
            .context(format!("Failed to read config from {}", config_path.display()))?;
        let config: Self =
            toml::from_str(&content).context("Failed to parse config file as TOML")?;
        tracing::info!(path = %config_path.display(), "Configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new("mxcraft-test").unwrap();
        let path = dir.path().join(CRAFTCONF_FILENAME);
        std::fs::write(&path, "network = \"devnet\"\nskip_build = true\n").unwrap();

        let config = CraftConfig::load_from_file(&path).unwrap();
        assert_eq!(config.network, Some(Network::Devnet));
        assert_eq!(config.skip_build, Some(true));
        assert_eq!(config.model, None);
    }

    #[test]
    fn test_load_from_directory() {
        let dir = TempDir::new("mxcraft-test").unwrap();
        std::fs::write(dir.path().join(CRAFTCONF_FILENAME), "network = \"mainnet\"\n").unwrap();

        let config = CraftConfig::load_from_file(dir.path()).unwrap();
        assert_eq!(config.network, Some(Network::Mainnet));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new("mxcraft-test").unwrap();
        assert!(CraftConfig::load_from_file(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new("mxcraft-test").unwrap();
        let path = dir.path().join(CRAFTCONF_FILENAME);
        std::fs::write(&path, "network = ").unwrap();
        assert!(CraftConfig::load_from_file(&path).is_err());
    }
}
