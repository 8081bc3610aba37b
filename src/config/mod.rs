//! Configuration module for bbl
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BBL_*)
//! 3. State directory config (`<state-dir>/bbl.toml`)
//! 4. User config (`~/.config/bbl/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    ENV_DIRECTOR_PASSWORD, ENV_DIRECTOR_USERNAME, ENV_ENDPOINT_OVERRIDE, ENV_INSTALLER_COMMAND,
    ENV_STACK_NAME, STATE_DIR_CONFIG,
};
pub use types::{CloudSettings, Config, DirectorConfig, InstallerConfig, StackConfig};
