//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BootstrapUseCase` - Key pair, stack and director against a checkpoint
//! - `ManifestDirectorDeployer` - Assemble the manifest and run the installer

pub mod bootstrap;
pub mod director;

pub use bootstrap::{BootstrapOptions, BootstrapUseCase, DEFAULT_STACK_NAME};
pub use director::ManifestDirectorDeployer;
