//! Domain Services
//!
//! Business logic for the bootstrap steps. Services talk to the outside world
//! only through ports, so they are testable with in-memory fakes.

pub mod key_pair_sync;
pub mod manifest;
pub mod provisioner;

pub use key_pair_sync::KeyPairSynchronizer;
pub use manifest::ManifestAssembler;
pub use provisioner::InfrastructureProvisioner;
