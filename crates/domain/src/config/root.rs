use serde::{Deserialize, Serialize};

use super::cluster::ClusterConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "nodeval.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/nodeval/config.toml";

/// Main configuration structure for nodeval
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Seed hosts, timeouts and credentials
    #[serde(default)]
    pub cluster: ClusterConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. nodeval.toml in current directory
    /// 3. /etc/nodeval/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.seeds.is_empty() {
            self.cluster.seeds = overrides.seeds;
        }
        if let Some(timeout) = overrides.connect_timeout_ms {
            self.cluster.connect_timeout_ms = timeout;
        }
        if let Some(user) = overrides.user {
            self.cluster.user = Some(user);
        }
        if let Some(password) = overrides.password {
            self.cluster.password = Some(password);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cluster.seeds.is_empty() {
            return Err(ConfigError::Validation(
                "No seed hosts configured".to_string(),
            ));
        }

        if self.cluster.connect_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Connect timeout cannot be 0".to_string(),
            ));
        }

        if self.cluster.user.is_some() != self.cluster.password.is_some() {
            return Err(ConfigError::Validation(
                "User and password must be configured together".to_string(),
            ));
        }

        self.cluster
            .seed_hosts()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub seeds: Vec<String>,
    pub connect_timeout_ms: Option<u64>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub log_level: Option<String>,
}
