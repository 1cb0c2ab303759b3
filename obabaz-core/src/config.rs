//! Composer configuration from environment variables.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Catalogs;
use crate::error::CatalogError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidEnvVar { name: String, value: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Composer configuration.
#[derive(Debug, Clone, Default)]
pub struct ComposerConfig {
    /// Catalog file to use instead of the embedded one.
    pub catalog_path: Option<PathBuf>,
    /// Fixed seed for the tip draw. `None` draws from the thread RNG.
    pub tip_seed: Option<u64>,
}

impl ComposerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `OBABAZ_CATALOG_PATH`: catalog JSON file (default: embedded catalog)
    /// - `OBABAZ_TIP_SEED`: u64 seed for a reproducible tip (default: random)
    pub fn from_env() -> Result<Self, ConfigError> {
        let catalog_path = env::var("OBABAZ_CATALOG_PATH").ok().map(PathBuf::from);

        let tip_seed = match env::var("OBABAZ_TIP_SEED") {
            Ok(value) => Some(value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "OBABAZ_TIP_SEED".to_string(),
                value,
            })?),
            Err(_) => None,
        };

        Ok(Self {
            catalog_path,
            tip_seed,
        })
    }

    /// Load the configured catalog, or the embedded one.
    pub fn catalogs(&self) -> Result<Catalogs, ConfigError> {
        match &self.catalog_path {
            Some(path) => Ok(Catalogs::load(path)?),
            None => Ok(Catalogs::embedded().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_embedded_catalog() {
        let config = ComposerConfig::default();
        let catalogs = config.catalogs().unwrap();
        assert_eq!(catalogs.tips, Catalogs::embedded().tips);
    }

    // The only test in this crate that touches the environment; keep all
    // env mutation in here so it cannot race with itself.
    #[test]
    fn test_from_env() {
        env::remove_var("OBABAZ_CATALOG_PATH");
        env::remove_var("OBABAZ_TIP_SEED");
        let config = ComposerConfig::from_env().unwrap();
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.tip_seed, None);

        env::set_var("OBABAZ_CATALOG_PATH", "/etc/obabaz/catalog.json");
        env::set_var("OBABAZ_TIP_SEED", "42");
        let config = ComposerConfig::from_env().unwrap();
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/obabaz/catalog.json"))
        );
        assert_eq!(config.tip_seed, Some(42));

        env::set_var("OBABAZ_TIP_SEED", "lots");
        let result = ComposerConfig::from_env();

        env::remove_var("OBABAZ_CATALOG_PATH");
        env::remove_var("OBABAZ_TIP_SEED");

        match result {
            Err(ConfigError::InvalidEnvVar { name, value }) => {
                assert_eq!(name, "OBABAZ_TIP_SEED");
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidEnvVar, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = ComposerConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            tip_seed: None,
        };
        assert!(matches!(
            config.catalogs(),
            Err(ConfigError::Catalog(CatalogError::Io { .. }))
        ));
    }
}
