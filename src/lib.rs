//! bbl - director bootstrapper
//!
//! Provisions the cloud infrastructure for a BOSH director, keeps its access
//! key pair in sync with the provider, assembles the director manifest and
//! drives the installer. Progress is recorded in a checkpoint so an
//! interrupted run picks up where it stopped.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BootstrapOptions, BootstrapUseCase, ManifestDirectorDeployer};
pub use config::Config;
pub use domain::entities::{Checkpoint, DirectorRecord, Manifest};
pub use error::{BootstrapError, BootstrapResult, Interrupted};
