//! Director Deployer Port
//!
//! Installs or updates the director on provisioned infrastructure. Only the
//! input/output contract lives here; `DirectorInstaller` is the lower-level
//! seam that actually runs the installer against a rendered manifest.

use thiserror::Error;

use crate::domain::entities::{Manifest, Stack};
use crate::domain::value_objects::{
    CloudCredentials, InstallerState, InternalCredentials, KeyPair, SslKeyPair,
};
use crate::error::ManifestBuildError;

/// Everything a deploy needs to know about the environment
#[derive(Debug, Clone)]
pub struct DeployInput {
    /// Prior installer state; empty on a fresh install
    pub installer_state: InstallerState,
    pub stack: Stack,
    pub cloud: CloudCredentials,
    /// Director SSL pair from an earlier deploy; empty on a fresh install
    pub ssl_key_pair: SslKeyPair,
    /// Internal credentials from an earlier deploy, reused verbatim
    pub credentials: Option<InternalCredentials>,
    pub key_pair: KeyPair,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeployOutput {
    pub ssl_key_pair: SslKeyPair,
    pub credentials: InternalCredentials,
    pub installer_state: InstallerState,
}

#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Manifest(#[from] ManifestBuildError),

    #[error(transparent)]
    Installer(#[from] InstallerError),
}

pub trait DirectorDeployer {
    fn deploy(&self, input: DeployInput) -> Result<DeployOutput, DeployError>;
}

#[derive(Debug, Error)]
pub enum InstallerError {
    #[error("failed to prepare installer workspace: {0}")]
    Workspace(#[from] std::io::Error),

    #[error("failed to render manifest: {0}")]
    Render(String),

    #[error("could not start installer '{command}': {message}")]
    Spawn { command: String, message: String },

    #[error("installer '{command}' exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("installer state is not a JSON object: {0}")]
    InvalidState(String),
}

pub trait DirectorInstaller {
    /// Converge the director VM to `manifest`, returning the new installer state
    fn install(
        &self,
        manifest: &Manifest,
        key_pair: &KeyPair,
        prior_state: &InstallerState,
    ) -> Result<InstallerState, InstallerError>;
}
