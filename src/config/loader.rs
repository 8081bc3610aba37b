//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::Config;

use crate::domain::value_objects::ConfigWarning;

/// Config file looked up inside the state directory
pub const STATE_DIR_CONFIG: &str = "bbl.toml";

pub const ENV_STACK_NAME: &str = "BBL_STACK_NAME";
pub const ENV_DIRECTOR_USERNAME: &str = "BBL_DIRECTOR_USERNAME";
pub const ENV_DIRECTOR_PASSWORD: &str = "BBL_DIRECTOR_PASSWORD";
pub const ENV_INSTALLER_COMMAND: &str = "BBL_INSTALLER_COMMAND";
pub const ENV_ENDPOINT_OVERRIDE: &str = "BBL_ENDPOINT_OVERRIDE";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First existing config file: state directory, then user config
pub fn discover(state_dir: &Path) -> Option<PathBuf> {
    let state_config = state_dir.join(STATE_DIR_CONFIG);
    if state_config.is_file() {
        return Some(state_config);
    }

    dirs::config_dir()
        .map(|dir| dir.join("bbl/config.toml"))
        .filter(|path| path.is_file())
}

/// Apply overrides read through `lookup`; unset or blank values are ignored
pub fn with_overrides_from(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(name) = get(ENV_STACK_NAME) {
        config.stack.name = name;
    }
    if let Some(username) = get(ENV_DIRECTOR_USERNAME) {
        config.director.username = username;
    }
    if let Some(password) = get(ENV_DIRECTOR_PASSWORD) {
        config.director.password = password;
    }
    if let Some(command) = get(ENV_INSTALLER_COMMAND) {
        config.installer.command = command;
    }
    if let Some(endpoint) = get(ENV_ENDPOINT_OVERRIDE) {
        config.cloud.endpoint_override = endpoint;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Closest known key within two edits
fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &[
        "stack",
        "name",
        "director",
        "manifest_name",
        "username",
        "password",
        "installer",
        "command",
        "cloud",
        "endpoint_override",
    ];

    KNOWN_KEYS
        .iter()
        .map(|key| (key, edit_distance(unknown, key)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(key, _)| key.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[b.len()]
}
