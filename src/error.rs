//! Error types for bbl
//!
//! Uses `thiserror` for library errors; the binary reports them with `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::Checkpoint;
use crate::domain::ports::{CheckpointError, CloudError, DeployError, GeneratorError, InstallerError};

/// Result type alias for bootstrap operations
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Main error type for the bootstrap workflow
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Cloud clients could not be built from the stored credentials
    #[error("failed to initialize cloud clients: {0}")]
    ClientInit(#[source] CloudError),

    /// Local and provider copies of the key pair disagree
    #[error("key pair '{name}' does not match the public key registered with the provider")]
    KeyPairConflict { name: String },

    /// Key pair lookup, generation or import failed
    #[error("failed to synchronize key pair: {0}")]
    KeyPairSync(String),

    #[error("failed to provision infrastructure: {0}")]
    Provisioning(#[from] ProvisioningError),

    #[error("failed to build director manifest: {0}")]
    ManifestBuild(#[from] ManifestBuildError),

    #[error("failed to deploy director: {0}")]
    Deploy(#[source] InstallerError),

    #[error("failed to persist checkpoint: {0}")]
    Checkpoint(#[from] CheckpointError),
}

impl BootstrapError {
    /// Stable identifier for machine-readable output
    pub fn kind(&self) -> &'static str {
        match self {
            BootstrapError::ClientInit(_) => "client_init",
            BootstrapError::KeyPairConflict { .. } => "key_pair_conflict",
            BootstrapError::KeyPairSync(_) => "key_pair_sync",
            BootstrapError::Provisioning(_) => "provisioning",
            BootstrapError::ManifestBuild(_) => "manifest_build",
            BootstrapError::Deploy(_) => "deploy",
            BootstrapError::Checkpoint(_) => "checkpoint",
        }
    }
}

impl From<DeployError> for BootstrapError {
    fn from(err: DeployError) -> Self {
        match err {
            DeployError::Manifest(e) => BootstrapError::ManifestBuild(e),
            DeployError::Installer(e) => BootstrapError::Deploy(e),
        }
    }
}

/// Infrastructure provisioning failures
#[derive(Error, Debug)]
pub enum ProvisioningError {
    #[error(transparent)]
    Cloud(#[from] CloudError),

    #[error("failed to render stack template: {0}")]
    Template(String),

    #[error("stack '{name}' not found after {operation}")]
    Vanished {
        name: String,
        operation: &'static str,
    },

    #[error("stack '{name}' did not converge: {reason}")]
    StackFailed { name: String, reason: String },

    #[error("stack '{name}' is still in progress after {operation}")]
    NotSettled {
        name: String,
        operation: &'static str,
    },

    #[error("stack '{name}' is missing output '{output}'")]
    MissingOutput { name: String, output: &'static str },
}

/// Manifest assembly failures
#[derive(Error, Debug)]
pub enum ManifestBuildError {
    #[error("failed to generate SSL key pair for {common_name}: {source}")]
    SslGeneration {
        common_name: String,
        #[source]
        source: GeneratorError,
    },

    #[error("manifest property '{0}' is required")]
    MissingProperty(&'static str),

    #[error("failed to generate internal credentials: {0}")]
    Credentials(#[source] GeneratorError),
}

/// Configuration file failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// A workflow run that stopped early
///
/// Carries the checkpoint as far as it got so the caller can persist it and
/// re-run later.
#[derive(Error, Debug)]
#[error("bootstrap interrupted")]
pub struct Interrupted {
    pub checkpoint: Box<Checkpoint>,
    #[source]
    pub error: BootstrapError,
}

impl Interrupted {
    pub fn new(checkpoint: Checkpoint, error: impl Into<BootstrapError>) -> Self {
        Self {
            checkpoint: Box::new(checkpoint),
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_key_pair_conflict() {
        let err = BootstrapError::KeyPairConflict {
            name: "keypair-abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "key pair 'keypair-abc' does not match the public key registered with the provider"
        );
        assert_eq!(err.kind(), "key_pair_conflict");
    }

    #[test]
    fn test_error_display_missing_property() {
        let err: BootstrapError = ManifestBuildError::MissingProperty("elastic_ip").into();
        assert_eq!(
            err.to_string(),
            "failed to build director manifest: manifest property 'elastic_ip' is required"
        );
    }

    #[test]
    fn test_deploy_error_manifest_maps_to_manifest_build() {
        let err: BootstrapError =
            DeployError::Manifest(ManifestBuildError::MissingProperty("region")).into();
        assert_eq!(err.kind(), "manifest_build");
    }

    #[test]
    fn test_deploy_error_installer_maps_to_deploy() {
        let err: BootstrapError = DeployError::Installer(InstallerError::Failed {
            command: "bosh-init".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "boom".to_string(),
        })
        .into();
        assert_eq!(err.kind(), "deploy");
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_config_parse_error_names_file() {
        let err = ConfigError::Parse {
            path: PathBuf::from("bbl.toml"),
            message: "expected `]`".to_string(),
        };
        assert_eq!(err.to_string(), "invalid config bbl.toml: expected `]`");
    }

    #[test]
    fn test_interrupted_keeps_checkpoint_and_source() {
        let interrupted = Interrupted::new(
            Checkpoint::default(),
            BootstrapError::KeyPairSync("throttled".to_string()),
        );
        assert_eq!(interrupted.to_string(), "bootstrap interrupted");
        let source = std::error::Error::source(&interrupted).unwrap();
        assert_eq!(
            source.to_string(),
            "failed to synchronize key pair: throttled"
        );
    }
}
