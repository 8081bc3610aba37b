//! Cloud account credentials stored in the checkpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudCredentials {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
}

impl CloudCredentials {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: region.into(),
        }
    }

    /// Overlay any non-empty field from `other`
    ///
    /// Used to apply command-line credentials over the stored ones.
    pub fn merged_with(mut self, other: &CloudCredentials) -> Self {
        if !other.access_key.is_empty() {
            self.access_key = other.access_key.clone();
        }
        if !other.secret_key.is_empty() {
            self.secret_key = other.secret_key.clone();
        }
        if !other.region.is_empty() {
            self.region = other.region.clone();
        }
        self
    }
}
