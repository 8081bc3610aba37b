//! JSON Event Sink
//!
//! Outputs bootstrap events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BootstrapEvent, BootstrapEventSink};
use serde_json::json;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Render one event as a JSON object tagged with `event`
pub fn event_json(event: &BootstrapEvent) -> serde_json::Value {
    match event {
        BootstrapEvent::Started { stack_name, region } => json!({
            "event": "start",
            "stack": stack_name,
            "region": region,
        }),
        BootstrapEvent::ClientsReady => json!({ "event": "clients_ready" }),
        BootstrapEvent::KeyPairGenerated { name } => json!({
            "event": "key_pair_generated",
            "name": name,
        }),
        BootstrapEvent::KeyPairImported { name } => json!({
            "event": "key_pair_imported",
            "name": name,
        }),
        BootstrapEvent::KeyPairVerified { name } => json!({
            "event": "key_pair_verified",
            "name": name,
        }),
        BootstrapEvent::StackCreating { name } => json!({
            "event": "stack_creating",
            "stack": name,
        }),
        BootstrapEvent::StackUpdating { name } => json!({
            "event": "stack_updating",
            "stack": name,
        }),
        BootstrapEvent::StackUnchanged { name } => json!({
            "event": "stack_unchanged",
            "stack": name,
        }),
        BootstrapEvent::StackReady { name, elastic_ip } => json!({
            "event": "stack_ready",
            "stack": name,
            "elastic_ip": elastic_ip,
        }),
        BootstrapEvent::SslKeyPairGenerated { common_name } => json!({
            "event": "ssl_key_pair_generated",
            "common_name": common_name,
        }),
        BootstrapEvent::CredentialsGenerated { count } => json!({
            "event": "credentials_generated",
            "count": count,
        }),
        BootstrapEvent::ManifestGenerated { name } => json!({
            "event": "manifest_generated",
            "name": name,
        }),
        BootstrapEvent::DirectorDeploying { update } => json!({
            "event": "director_deploying",
            "mode": if *update { "update" } else { "install" },
        }),
        BootstrapEvent::DirectorDeployed => json!({ "event": "director_deployed" }),
        BootstrapEvent::CheckpointSaved { location } => json!({
            "event": "checkpoint_saved",
            "path": location,
        }),
        BootstrapEvent::CheckpointSaveFailed { location, message } => json!({
            "event": "checkpoint_save_failed",
            "path": location,
            "message": message,
        }),
        BootstrapEvent::Completed => json!({
            "event": "complete",
            "status": "success",
        }),
    }
}

impl BootstrapEventSink for JsonEventSink {
    fn on_event(&self, event: BootstrapEvent) {
        self.write_event(event_json(&event));
    }
}
