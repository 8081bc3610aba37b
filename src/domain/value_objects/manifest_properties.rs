//! Manifest Properties
//!
//! The record threaded through the manifest sub-builders. Each stage takes a
//! value and hands back a new one; a stage only ever fills in the fields it
//! owns (the SSL step owns `ssl_key_pair`, the job builder owns
//! `credentials`).

use super::{InternalCredentials, SslKeyPair};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestProperties {
    pub director_username: String,
    pub director_password: String,
    pub subnet_id: String,
    pub availability_zone: String,
    pub elastic_ip: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub default_key_name: String,
    pub region: String,
    pub security_group: String,
    pub ssl_key_pair: SslKeyPair,
    pub credentials: InternalCredentials,
}

impl ManifestProperties {
    pub fn with_ssl_key_pair(self, ssl_key_pair: SslKeyPair) -> Self {
        Self {
            ssl_key_pair,
            ..self
        }
    }

    pub fn with_credentials(self, credentials: InternalCredentials) -> Self {
        Self {
            credentials,
            ..self
        }
    }
}
