//! Configuration for the oracle.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::consensus::CONSENSUS_MIN;
use crate::{OracleError, OracleResult};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "ecoround.toml";

/// Main configuration for the oracle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Result source settings.
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Consensus settings.
    #[serde(default)]
    pub consensus: ConsensusConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Default source timeout (in seconds), used when a source sets none.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_timeout() -> u64 {
    5
}

/// Result source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// PandaScore configuration.
    #[serde(default)]
    pub pandascore: SourceConfig,

    /// VLR.gg configuration.
    #[serde(default)]
    pub vlr: SourceConfig,

    /// Liquipedia configuration.
    #[serde(default)]
    pub liquipedia: SourceConfig,
}

impl SourcesConfig {
    /// Number of enabled sources.
    pub fn enabled_count(&self) -> usize {
        [&self.pandascore, &self.vlr, &self.liquipedia]
            .iter()
            .filter(|s| s.enabled)
            .count()
    }
}

/// Configuration for a specific result source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Timeout for a single fetch (in seconds). Falls back to `general.timeout_secs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl SourceConfig {
    /// Effective fetch timeout.
    pub fn timeout(&self, general: &GeneralConfig) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(general.timeout_secs))
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Consensus settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsensusConfig {
    /// Minimum number of agreeing confident reports to resolve a match.
    #[serde(default = "default_consensus_min")]
    pub consensus_min: usize,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            consensus_min: default_consensus_min(),
        }
    }
}

fn default_consensus_min() -> usize {
    CONSENSUS_MIN
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Only parses; call [`Config::validate`] before using the values.
    pub fn load<P: AsRef<Path>>(path: P) -> OracleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> OracleResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            sources: SourcesConfig::default(),
            consensus: ConsensusConfig::default(),
        }
    }

    /// Checks values that serde defaults cannot guard.
    pub fn validate(&self) -> OracleResult<()> {
        if self.consensus.consensus_min == 0 {
            return Err(OracleError::config("consensus_min must be at least 1"));
        }
        if self.sources.enabled_count() == 0 {
            return Err(OracleError::config("at least one source must be enabled"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.consensus.consensus_min, 2);
        assert_eq!(config.sources.enabled_count(), 3);
        assert_eq!(config.general.log_format, "text");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [sources.vlr]
            enabled = false
            "#,
        )
        .unwrap();

        assert!(!config.sources.vlr.enabled);
        assert!(config.sources.pandascore.enabled);
        assert_eq!(config.sources.vlr.timeout_secs, None);
        assert_eq!(config.consensus.consensus_min, 2);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.consensus.consensus_min = 3;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.consensus.consensus_min, 3);
    }

    #[test]
    fn test_source_timeout_falls_back_to_general() {
        let config: Config = toml::from_str(
            r#"
            [general]
            timeout_secs = 12

            [sources.liquipedia]
            timeout_secs = 2
            "#,
        )
        .unwrap();

        let general = &config.general;
        assert_eq!(config.sources.liquipedia.timeout(general), Duration::from_secs(2));
        assert_eq!(config.sources.vlr.timeout(general), Duration::from_secs(12));
    }

    #[test]
    fn test_load_does_not_validate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[consensus]\nconsensus_min = 0\n").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.consensus.consensus_min, 0);
        assert!(loaded.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_quorum() {
        let mut config = Config::default();
        config.consensus.consensus_min = 0;
        assert!(matches!(config.validate(), Err(OracleError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_no_sources() {
        let mut config = Config::default();
        config.sources.pandascore.enabled = false;
        config.sources.vlr.enabled = false;
        config.sources.liquipedia.enabled = false;
        assert!(config.validate().is_err());
    }
}
