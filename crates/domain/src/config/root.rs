use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::ipset::IpSetConfig;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-ipset.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-ipset/config.toml";

/// Main configuration structure for Ferrous IPSet
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Address-set injection rules
    #[serde(default)]
    pub ipset: IpSetConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-ipset.toml in current directory
    /// 3. /etc/ferrous-ipset/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(check_cname) = overrides.check_cname {
            self.ipset.check_cname = check_cname;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ipset.validate()
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
    pub log_level: Option<String>,
    pub check_cname: Option<bool>,
}
