//! Generator Ports
//!
//! Single-method collaborators that produce fresh identifiers, secrets and
//! key material.

use thiserror::Error;

use crate::domain::value_objects::SslKeyPair;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct GeneratorError(pub String);

impl GeneratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Public/private halves of a freshly generated access key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    pub public: String,
    pub private: String,
}

pub trait SslKeyPairGenerator {
    /// Issue a certificate and key for `common_name`
    fn generate(&self, common_name: &str) -> Result<SslKeyPair, GeneratorError>;
}

pub trait UuidGenerator {
    fn generate(&self) -> Result<String, GeneratorError>;
}

pub trait KeyPairGenerator {
    fn generate(&self) -> Result<KeyMaterial, GeneratorError>;
}

/// Source of internal passwords; implementations must be cryptographically strong
pub trait SecretGenerator {
    fn generate(&self) -> Result<String, GeneratorError>;
}
