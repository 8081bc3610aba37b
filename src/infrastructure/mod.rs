//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `cloud/` - Cloud clients (local simulated cloud)
//! - `events/` - Event sinks (console, NDJSON)
//! - `generators` - Certificate, key pair, identifier and secret generators
//! - `installer` - Director installer driven through a command
//! - `repositories/` - Checkpoint persistence

pub mod cloud;
pub mod events;
pub mod generators;
pub mod installer;
pub mod repositories;

// Re-export for convenience
pub use cloud::LocalCloudFactory;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use generators::{
    OsRngSecretGenerator, RcgenKeyPairGenerator, RcgenSslGenerator, UuidV4Generator,
};
pub use installer::CommandInstaller;
pub use repositories::JsonCheckpointRepository;
