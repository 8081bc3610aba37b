//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::director::{DEFAULT_DIRECTOR_PASSWORD, DEFAULT_DIRECTOR_USERNAME};
use crate::application::DEFAULT_STACK_NAME;
use crate::domain::services::manifest::DEFAULT_MANIFEST_NAME;
use crate::error::ConfigError;
use crate::infrastructure::installer::DEFAULT_COMMAND;

use crate::domain::value_objects::ConfigWarning;

use super::loader;

/// Infrastructure stack configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackConfig {
    #[serde(default = "default_stack_name")]
    pub name: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            name: default_stack_name(),
        }
    }
}

fn default_stack_name() -> String {
    DEFAULT_STACK_NAME.to_string()
}

/// Director manifest and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorConfig {
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,

    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            manifest_name: default_manifest_name(),
            username: default_username(),
            password: default_password(),
        }
    }
}

fn default_manifest_name() -> String {
    DEFAULT_MANIFEST_NAME.to_string()
}

fn default_username() -> String {
    DEFAULT_DIRECTOR_USERNAME.to_string()
}

fn default_password() -> String {
    DEFAULT_DIRECTOR_PASSWORD.to_string()
}

/// Installer binary configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerConfig {
    #[serde(default = "default_installer_command")]
    pub command: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            command: default_installer_command(),
        }
    }
}

fn default_installer_command() -> String {
    DEFAULT_COMMAND.to_string()
}

/// Cloud endpoint configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudSettings {
    /// Alternate endpoint for the cloud clients; empty means the default
    #[serde(default)]
    pub endpoint_override: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub stack: StackConfig,

    #[serde(default)]
    pub director: DirectorConfig,

    #[serde(default)]
    pub installer: InstallerConfig,

    #[serde(default)]
    pub cloud: CloudSettings,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load the first config file found for `state_dir`, or defaults
    ///
    /// Environment overrides are applied on top in every case.
    pub fn load_layered(state_dir: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        let (config, warnings) = match loader::discover(state_dir) {
            Some(path) => loader::load_with_warnings(&path)?,
            None => (Config::default(), Vec::new()),
        };
        Ok((config.with_env_overrides(), warnings))
    }

    /// Apply environment variable overrides (BBL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_overrides_from(self, |key| std::env::var(key).ok())
    }

    /// Endpoint override, if one is configured
    pub fn endpoint_override(&self) -> Option<&str> {
        let endpoint = self.cloud.endpoint_override.trim();
        (!endpoint.is_empty()).then_some(endpoint)
    }
}
