//! Domain Entities
//!
//! - `Checkpoint` - Persisted bootstrap progress
//! - `Manifest` - Deployment descriptor handed to the director installer
//! - `Stack` - Provisioned infrastructure and its outputs

mod checkpoint;
pub mod manifest;
mod stack;

pub use checkpoint::{Checkpoint, DirectorRecord};
pub use manifest::Manifest;
pub use stack::{Stack, StackOutputs};
