//! Checkpoint Entity
//!
//! Records how far a bootstrap got. Re-running the workflow with a checkpoint
//! only redoes the steps whose results are not recorded yet.

use crate::domain::value_objects::{
    CloudCredentials, InstallerState, InternalCredentials, KeyPair, SslKeyPair,
};

/// Persisted bootstrap state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Checkpoint {
    pub cloud: CloudCredentials,
    pub key_pair: Option<KeyPair>,
    pub director: Option<DirectorRecord>,
}

/// What a first successful director deploy produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectorRecord {
    pub ssl_key_pair: SslKeyPair,
    pub credentials: InternalCredentials,
    pub installer_state: InstallerState,
}

impl Checkpoint {
    /// Current on-disk format version
    pub const VERSION: u32 = 1;

    pub fn new(cloud: CloudCredentials) -> Self {
        Self {
            cloud,
            key_pair: None,
            director: None,
        }
    }

    pub fn has_director(&self) -> bool {
        self.director.is_some()
    }

    /// SSL key pair of the deployed director, or an empty pair
    pub fn director_ssl_key_pair(&self) -> SslKeyPair {
        self.director
            .as_ref()
            .map(|d| d.ssl_key_pair.clone())
            .unwrap_or_default()
    }

    /// Installer state of the deployed director, or an empty state
    pub fn installer_state(&self) -> InstallerState {
        self.director
            .as_ref()
            .map(|d| d.installer_state.clone())
            .unwrap_or_default()
    }

    /// Credentials already generated for the director, if any
    pub fn director_credentials(&self) -> Option<InternalCredentials> {
        self.director.as_ref().map(|d| d.credentials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_checkpoint_has_nothing_provisioned() {
        let cp = Checkpoint::new(CloudCredentials::new("a", "s", "us-east-1"));
        assert!(cp.key_pair.is_none());
        assert!(!cp.has_director());
        assert!(cp.director_ssl_key_pair().is_empty());
        assert!(cp.installer_state().is_empty());
        assert!(cp.director_credentials().is_none());
    }

    #[test]
    fn director_accessors_read_the_record() {
        let mut state = serde_json::Map::new();
        state.insert("current_vm_cid".into(), "i-123".into());
        let cp = Checkpoint {
            director: Some(DirectorRecord {
                ssl_key_pair: SslKeyPair::new("cert", "key"),
                credentials: InternalCredentials {
                    mbus: "m".into(),
                    ..Default::default()
                },
                installer_state: InstallerState::from_map(state),
            }),
            ..Default::default()
        };

        assert_eq!(cp.director_ssl_key_pair(), SslKeyPair::new("cert", "key"));
        assert_eq!(cp.director_credentials().unwrap().mbus, "m");
        assert!(!cp.installer_state().is_empty());
    }
}
