//! Output Rendering
//!
//! Redacted checkpoint summaries and error reports, as text or JSON.

use serde::Serialize;

use crate::domain::entities::Checkpoint;
use crate::domain::value_objects::InternalCredentials;
use crate::error::BootstrapError;

/// What `bbl state` shows; never includes private keys or passwords
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSummary {
    pub region: String,
    pub access_key: String,
    pub key_pair: Option<String>,
    pub director_deployed: bool,
    pub credentials_generated: usize,
    pub installer_state_keys: Vec<String>,
}

impl StateSummary {
    pub fn from_checkpoint(checkpoint: &Checkpoint) -> Self {
        let (credentials_generated, installer_state_keys) = match &checkpoint.director {
            Some(director) => (
                InternalCredentials::COUNT - director.credentials.missing_count(),
                director.installer_state.as_map().keys().cloned().collect(),
            ),
            None => (0, Vec::new()),
        };

        Self {
            region: checkpoint.cloud.region.clone(),
            access_key: redact(&checkpoint.cloud.access_key),
            key_pair: checkpoint.key_pair.as_ref().map(|k| k.name.clone()),
            director_deployed: checkpoint.has_director(),
            credentials_generated,
            installer_state_keys,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "event": "state",
            "state": self,
        })
    }

    pub fn to_text(&self) -> String {
        let or_none = |s: &str| {
            if s.is_empty() {
                "(none)".to_string()
            } else {
                s.to_string()
            }
        };

        let mut out = String::new();
        out.push_str(&format!("region:      {}\n", or_none(&self.region)));
        out.push_str(&format!("access key:  {}\n", or_none(&self.access_key)));
        out.push_str(&format!(
            "key pair:    {}\n",
            self.key_pair.as_deref().unwrap_or("(none)")
        ));
        if self.director_deployed {
            out.push_str(&format!(
                "director:    deployed ({} credentials)\n",
                self.credentials_generated
            ));
        } else {
            out.push_str("director:    not deployed\n");
        }
        out
    }
}

/// Keep the first four characters of a secret identifier
fn redact(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let visible: String = value.chars().take(4).collect();
    format!("{visible}****")
}

/// NDJSON error record for `--json` mode
pub fn error_json(command: &str, error: &BootstrapError) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "command": command,
        "kind": error.kind(),
        "message": error.to_string(),
    })
}
