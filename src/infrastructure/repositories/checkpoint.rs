//! JSON Checkpoint Repository
//!
//! Persists the bootstrap checkpoint at `<state-dir>/state.json`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::entities::{Checkpoint, DirectorRecord};
use crate::domain::ports::{CheckpointError, CheckpointRepository};
use crate::domain::value_objects::{
    CloudCredentials, InstallerState, InternalCredentials, KeyPair, SslKeyPair,
};

/// File name of the checkpoint inside the state directory
pub const STATE_FILE: &str = "state.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonCheckpoint {
    version: u32,
    #[serde(default)]
    cloud: CloudCredentials,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key_pair: Option<KeyPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    director: Option<JsonDirector>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonDirector {
    ssl_certificate: String,
    ssl_private_key: String,
    credentials: InternalCredentials,
    #[serde(default)]
    installer_state: InstallerState,
}

/// Only the version field, read first so future formats fail cleanly
#[derive(Deserialize)]
struct VersionProbe {
    version: Option<u32>,
}

pub struct JsonCheckpointRepository {
    path: PathBuf,
}

impl JsonCheckpointRepository {
    /// Repository for `state.json` inside `state_dir`
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        Self {
            path: state_dir.as_ref().join(STATE_FILE),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn access_error(&self, e: impl std::fmt::Display) -> CheckpointError {
        CheckpointError::Access {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }

    fn corrupted(&self, e: impl std::fmt::Display) -> CheckpointError {
        CheckpointError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }

    fn parse(&self, content: &str) -> Result<Checkpoint, CheckpointError> {
        let probe: VersionProbe = serde_json::from_str(content).map_err(|e| self.corrupted(e))?;
        let found = probe.version.ok_or_else(|| self.corrupted("missing field `version`"))?;
        if found != Checkpoint::VERSION {
            return Err(CheckpointError::VersionMismatch {
                path: self.path.clone(),
                found,
                expected: Checkpoint::VERSION,
            });
        }

        let json: JsonCheckpoint = serde_json::from_str(content).map_err(|e| self.corrupted(e))?;
        if let Some(director) = &json.director {
            self.check_director(director)?;
        }
        Ok(from_json(json))
    }

    /// A director record is only written whole; anything less cannot be trusted
    fn check_director(&self, director: &JsonDirector) -> Result<(), CheckpointError> {
        if director.ssl_certificate.trim().is_empty() || director.ssl_private_key.trim().is_empty()
        {
            return Err(self.corrupted("director record has no SSL key pair"));
        }
        if !director.credentials.is_complete() {
            return Err(self.corrupted(format!(
                "director record is missing {} of {} internal credentials",
                director.credentials.missing_count(),
                InternalCredentials::COUNT
            )));
        }
        Ok(())
    }

    fn write_atomic(&self, content: &str) -> Result<(), CheckpointError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| self.access_error(e))?;

        let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| self.access_error(e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| self.access_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.access_error(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.access_error(e.error))?;
        Ok(())
    }
}

impl CheckpointRepository for JsonCheckpointRepository {
    fn load(&self) -> Result<Checkpoint, CheckpointError> {
        if !self.path.exists() {
            return Ok(Checkpoint::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.access_error(e))?;
        if content.trim().is_empty() {
            return Ok(Checkpoint::default());
        }
        self.parse(&content)
    }

    fn save(&self, checkpoint: &Checkpoint) -> Result<(), CheckpointError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.access_error(e))?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| self.access_error(e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| self.access_error(e))?;

        let result = serde_json::to_string_pretty(&to_json(checkpoint))
            .map_err(|e| self.access_error(e))
            .and_then(|content| self.write_atomic(&content));

        let _ = lock_file.unlock();
        result
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn from_json(json: JsonCheckpoint) -> Checkpoint {
    Checkpoint {
        cloud: json.cloud,
        key_pair: json.key_pair,
        director: json.director.map(|d| DirectorRecord {
            ssl_key_pair: SslKeyPair::new(d.ssl_certificate, d.ssl_private_key),
            credentials: d.credentials,
            installer_state: d.installer_state,
        }),
    }
}

fn to_json(checkpoint: &Checkpoint) -> JsonCheckpoint {
    JsonCheckpoint {
        version: Checkpoint::VERSION,
        cloud: checkpoint.cloud.clone(),
        key_pair: checkpoint.key_pair.clone(),
        director: checkpoint.director.as_ref().map(|d| JsonDirector {
            ssl_certificate: d.ssl_key_pair.certificate.clone(),
            ssl_private_key: d.ssl_key_pair.private_key.clone(),
            credentials: d.credentials.clone(),
            installer_state: d.installer_state.clone(),
        }),
    }
}
