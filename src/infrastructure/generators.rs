//! Generator Adapters
//!
//! Concrete implementations of the generator ports:
//! - `RcgenSslGenerator` - self-signed director certificates
//! - `RcgenKeyPairGenerator` - access key material
//! - `UuidV4Generator` - random identifiers
//! - `OsRngSecretGenerator` - internal passwords from OS entropy

use std::net::IpAddr;

use rand::rngs::OsRng;
use rand::RngCore;
use rcgen::{Certificate, CertificateParams, DnType, SanType, PKCS_ECDSA_P256_SHA256};

use crate::domain::ports::{
    GeneratorError, KeyMaterial, KeyPairGenerator, SecretGenerator, SslKeyPairGenerator,
    UuidGenerator,
};
use crate::domain::value_objects::SslKeyPair;

/// Issues self-signed certificates whose SAN covers the common name
#[derive(Debug, Clone, Copy, Default)]
pub struct RcgenSslGenerator;

impl RcgenSslGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SslKeyPairGenerator for RcgenSslGenerator {
    fn generate(&self, common_name: &str) -> Result<SslKeyPair, GeneratorError> {
        let mut params = CertificateParams::new(Vec::<String>::new());
        params
            .distinguished_name
            .push(DnType::CommonName, common_name);
        params.subject_alt_names = match common_name.parse::<IpAddr>() {
            Ok(ip) => vec![SanType::IpAddress(ip)],
            Err(_) => vec![SanType::DnsName(common_name.to_string())],
        };

        let cert = Certificate::from_params(params)
            .map_err(|e| GeneratorError::new(format!("certificate generation failed: {e}")))?;
        let certificate = cert
            .serialize_pem()
            .map_err(|e| GeneratorError::new(format!("certificate encoding failed: {e}")))?;

        Ok(SslKeyPair::new(certificate, cert.serialize_private_key_pem()))
    }
}

/// Generates ECDSA P-256 key material in PEM form.
///
/// The public half is a PEM SubjectPublicKeyInfo block, not an OpenSSH
/// `authorized_keys` line. The local cloud stores and compares it as opaque
/// text, but a provider key import or an SSH tunnel needs the OpenSSH form,
/// so a real provider adapter must convert it first.
#[derive(Debug, Clone, Copy, Default)]
pub struct RcgenKeyPairGenerator;

impl RcgenKeyPairGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl KeyPairGenerator for RcgenKeyPairGenerator {
    fn generate(&self) -> Result<KeyMaterial, GeneratorError> {
        let key = rcgen::KeyPair::generate(&PKCS_ECDSA_P256_SHA256)
            .map_err(|e| GeneratorError::new(format!("key generation failed: {e}")))?;
        Ok(KeyMaterial {
            public: key.public_key_pem(),
            private: key.serialize_pem(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl UuidGenerator for UuidV4Generator {
    fn generate(&self) -> Result<String, GeneratorError> {
        Ok(uuid::Uuid::new_v4().to_string())
    }
}

/// Hex-encoded secrets read straight from the operating system's CSPRNG
#[derive(Debug, Clone, Copy)]
pub struct OsRngSecretGenerator {
    bytes: usize,
}

impl OsRngSecretGenerator {
    pub const DEFAULT_BYTES: usize = 16;

    pub fn new() -> Self {
        Self {
            bytes: Self::DEFAULT_BYTES,
        }
    }

    pub fn with_bytes(bytes: usize) -> Self {
        Self { bytes }
    }
}

impl Default for OsRngSecretGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretGenerator for OsRngSecretGenerator {
    fn generate(&self) -> Result<String, GeneratorError> {
        let mut buf = vec![0u8; self.bytes];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| GeneratorError::new(format!("entropy source failed: {e}")))?;
        Ok(buf.iter().map(|b| format!("{b:02x}")).collect())
    }
}
