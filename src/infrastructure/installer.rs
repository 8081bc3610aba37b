//! Command Installer
//!
//! Drives a `bosh-init` compatible binary. Each run gets a scratch directory
//! holding the rendered manifest, the access private key and the prior state;
//! the state file the installer leaves behind becomes the new state.

use std::fs;
use std::path::Path;
use std::process::Command;

use crate::domain::entities::Manifest;
use crate::domain::ports::{DirectorInstaller, InstallerError};
use crate::domain::value_objects::{InstallerState, KeyPair};

pub const MANIFEST_FILE: &str = "bosh.yml";
pub const PRIVATE_KEY_FILE: &str = "bosh.pem";
pub const STATE_FILE: &str = "bosh-state.json";

/// Default installer binary looked up on `PATH`
pub const DEFAULT_COMMAND: &str = "bosh-init";

pub struct CommandInstaller {
    command: String,
}

impl CommandInstaller {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn prepare(
        &self,
        dir: &Path,
        manifest: &Manifest,
        key_pair: &KeyPair,
        prior_state: &InstallerState,
    ) -> Result<(), InstallerError> {
        let yaml =
            serde_yaml_ng::to_string(manifest).map_err(|e| InstallerError::Render(e.to_string()))?;
        fs::write(dir.join(MANIFEST_FILE), yaml)?;
        write_private_key(&dir.join(PRIVATE_KEY_FILE), &key_pair.private)?;

        if !prior_state.is_empty() {
            let state = serde_json::to_string_pretty(prior_state)
                .map_err(|e| InstallerError::InvalidState(e.to_string()))?;
            fs::write(dir.join(STATE_FILE), state)?;
        }
        Ok(())
    }
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl DirectorInstaller for CommandInstaller {
    fn install(
        &self,
        manifest: &Manifest,
        key_pair: &KeyPair,
        prior_state: &InstallerState,
    ) -> Result<InstallerState, InstallerError> {
        let workspace = tempfile::Builder::new().prefix("bbl-deploy-").tempdir()?;
        self.prepare(workspace.path(), manifest, key_pair, prior_state)?;

        let output = Command::new(&self.command)
            .arg("deploy")
            .arg(MANIFEST_FILE)
            .current_dir(workspace.path())
            .output()
            .map_err(|e| InstallerError::Spawn {
                command: self.command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(InstallerError::Failed {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        read_state(&workspace.path().join(STATE_FILE))
    }
}

fn read_state(path: &Path) -> Result<InstallerState, InstallerError> {
    if !path.exists() {
        return Err(InstallerError::InvalidState(format!(
            "installer did not write {STATE_FILE}"
        )));
    }
    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(serde_json::Value::Object(map)) => Ok(InstallerState::from_map(map)),
        Ok(other) => Err(InstallerError::InvalidState(format!(
            "expected an object, found {other}"
        ))),
        Err(e) => Err(InstallerError::InvalidState(e.to_string())),
    }
}

#[cfg(unix)]
fn write_private_key(path: &Path, key: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(key.as_bytes())
}

#[cfg(not(unix))]
fn write_private_key(path: &Path, key: &str) -> std::io::Result<()> {
    fs::write(path, key)
}
