//! Bootstrap Event Port
//!
//! Provides an observable interface for the bootstrap workflow.
//! Enables progress reporting, JSON event streams, and debugging.

/// Event emitted while bootstrapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapEvent {
    /// Workflow started against a stack
    Started { stack_name: String, region: String },

    /// Cloud clients were built
    ClientsReady,

    /// A new access key pair was generated locally
    KeyPairGenerated { name: String },

    /// The key pair was (re-)registered with the provider
    KeyPairImported { name: String },

    /// Local and remote key pair already agree
    KeyPairVerified { name: String },

    /// Stack does not exist yet and is being created
    StackCreating { name: String },

    /// Stack exists and is being updated
    StackUpdating { name: String },

    /// Stack update was a no-op
    StackUnchanged { name: String },

    /// Stack settled with usable outputs
    StackReady { name: String, elastic_ip: String },

    /// Director SSL certificate was issued for the elastic IP
    SslKeyPairGenerated { common_name: String },

    /// Missing internal credentials were generated
    CredentialsGenerated { count: usize },

    /// Manifest assembly finished
    ManifestGenerated { name: String },

    /// Installer is about to run; `update` is false for a fresh install
    DirectorDeploying { update: bool },

    /// Installer finished
    DirectorDeployed,

    /// Checkpoint was persisted
    CheckpointSaved { location: String },

    /// Partial progress could not be saved after a failed step
    CheckpointSaveFailed { location: String, message: String },

    /// Workflow finished successfully
    Completed,
}

/// Trait for receiving bootstrap events
///
/// Implementations can be:
/// - ConsoleEventSink: Step-by-step progress on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait BootstrapEventSink: Send + Sync {
    fn on_event(&self, event: BootstrapEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BootstrapEventSink for NoopEventSink {
    fn on_event(&self, _event: BootstrapEvent) {}
}
