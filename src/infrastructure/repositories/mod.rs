//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod checkpoint;

pub use checkpoint::{JsonCheckpointRepository, STATE_FILE};
