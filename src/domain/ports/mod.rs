//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod bootstrap_events;
pub mod checkpoint_repository;
pub mod cloud;
pub mod director;
pub mod generators;

pub use bootstrap_events::{BootstrapEvent, BootstrapEventSink, NoopEventSink};
pub use checkpoint_repository::{CheckpointError, CheckpointRepository};
pub use cloud::{
    ClientFactory, CloudClients, CloudConfig, CloudError, ComputeClient, StackClient,
    StackDescription, StackStatus, StackTemplate, StackUpdate,
};
pub use director::{
    DeployError, DeployInput, DeployOutput, DirectorDeployer, DirectorInstaller, InstallerError,
};
pub use generators::{
    GeneratorError, KeyMaterial, KeyPairGenerator, SecretGenerator, SslKeyPairGenerator,
    UuidGenerator,
};
