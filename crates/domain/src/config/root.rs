use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::network::NetworkConfig;
use super::offchain::OffchainConfig;
use super::resolution::ResolutionConfig;
use crate::domain_codec::ROOT_LABEL;
use crate::felt::Felt;

const LOCAL_CONFIG_PATH: &str = "stark-resolver.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/stark-resolver/config.toml";

/// Main configuration structure for the resolver
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// RPC endpoint and naming contract
    #[serde(default)]
    pub network: NetworkConfig,

    /// Subject validation and record field defaults
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Offchain server queries
    #[serde(default)]
    pub offchain: OffchainConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. stark-resolver.toml in current directory
    /// 3. /etc/stark-resolver/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(url) = overrides.rpc_url {
            self.network.rpc_url = url;
        }
        if let Some(contract) = overrides.naming_contract {
            self.network.naming_contract = contract;
        }
        if let Some(parent) = overrides.parent_domain {
            self.resolution.parent_domain = parent;
        }
        if let Some(timeout) = overrides.offchain_timeout_ms {
            self.offchain.query_timeout_ms = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rpc_url = self.network.rpc_url.trim();
        if !(rpc_url.starts_with("http://") || rpc_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "network.rpc_url",
                reason: format!("'{}' is not an http(s) URL", self.network.rpc_url),
            });
        }

        Felt::parse(&self.network.naming_contract).map_err(|e| ConfigError::InvalidValue {
            field: "network.naming_contract",
            reason: e.to_string(),
        })?;

        if self.network.rpc_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "network.rpc_timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.offchain.query_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "offchain.query_timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }

        let parent = &self.resolution.parent_domain;
        let root_suffix = format!(".{}", ROOT_LABEL);
        if parent != ROOT_LABEL && !parent.ends_with(&root_suffix) {
            return Err(ConfigError::InvalidValue {
                field: "resolution.parent_domain",
                reason: format!("'{}' is not a .{} domain", parent, ROOT_LABEL),
            });
        }

        if !LoggingConfig::LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("unknown level '{}'", self.logging.level),
            });
        }

        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = self.to_toml_string()?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rpc_url: Option<String>,
    pub naming_contract: Option<String>,
    pub parent_domain: Option<String>,
    pub offchain_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}
