//! Application configuration

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::species::SpeciesPriceTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    /// Overrides the seed stored in the catalog file.
    #[serde(default)]
    pub random_seed: Option<u64>,
    #[serde(default = "default_sort")]
    pub default_sort: String,
    #[serde(default)]
    pub pricing: SpeciesPriceTable,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_name() -> String {
    "timberscope".to_string()
}

fn default_catalog() -> PathBuf {
    PathBuf::from("catalogs/washington.yaml")
}

fn default_sort() -> String {
    "score".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            catalog: default_catalog(),
            random_seed: None,
            default_sort: default_sort(),
            pricing: SpeciesPriceTable::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Save configuration to YAML file
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.catalog, PathBuf::from("catalogs/washington.yaml"));
        assert_eq!(config.default_sort, "score");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.pricing.lookup("Western Red Cedar").price_per_mbf, 620);
    }

    #[test]
    fn empty_document_takes_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_pricing_override() {
        let yaml = r#"
default_sort: value
pricing:
  rules:
    - contains: ["Spruce"]
      price_per_mbf: 560
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_sort, "value");
        assert_eq!(config.pricing.fallback_price_per_mbf, 400);
        assert_eq!(config.pricing.lookup("Sitka Spruce").price_per_mbf, 560);
        assert_eq!(config.pricing.lookup("Western Red Cedar").price_per_mbf, 400);
    }

    #[test]
    fn fallback_only_pricing_keeps_default_rules() {
        let config: Config =
            serde_yaml::from_str("pricing: { fallback_price_per_mbf: 450 }").unwrap();
        assert_eq!(config.pricing.fallback_price_per_mbf, 450);
        assert_eq!(config.pricing.rules, SpeciesPriceTable::default().rules);
        assert_eq!(config.pricing.lookup("Douglas Fir").price_per_mbf, 450);
    }

    #[test]
    fn config_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timberscope.yaml");
        let config = Config {
            random_seed: Some(7),
            ..Config::default()
        };
        config.to_yaml(&path).unwrap();

        let loaded = Config::from_yaml(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
