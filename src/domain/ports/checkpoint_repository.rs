//! CheckpointRepository port - abstraction for checkpoint persistence

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::Checkpoint;

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("cannot access state file {path}: {message}")]
    Access { path: PathBuf, message: String },

    #[error("state file {path} is corrupted: {message}")]
    Corrupted { path: PathBuf, message: String },

    #[error("state file {path} has version {found}, expected {expected}")]
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

/// Loads and saves the bootstrap checkpoint
pub trait CheckpointRepository {
    /// Load the checkpoint, or an empty one if nothing was saved yet
    fn load(&self) -> Result<Checkpoint, CheckpointError>;

    fn save(&self, checkpoint: &Checkpoint) -> Result<(), CheckpointError>;

    /// Where the checkpoint lives, for progress reporting
    fn location(&self) -> String;
}
