//! Cloud client implementations
//!
//! - `LocalCloud` - file-backed simulation of the stack and compute services

mod local;

pub use local::{LocalCloudFactory, LocalComputeClient, LocalStackClient};
