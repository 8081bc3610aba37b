//! Console Event Sink
//!
//! One short line per step on stderr, keeping stdout free for command output.

use crate::domain::ports::{BootstrapEvent, BootstrapEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose: false,
        }
    }

    /// Also report bookkeeping events (client setup, checkpoint saves)
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn line(&self, event: &BootstrapEvent) -> Option<String> {
        let text = match event {
            BootstrapEvent::Started { stack_name, region } => {
                format!("bootstrapping stack '{stack_name}' in {region}")
            }
            BootstrapEvent::ClientsReady if self.verbose => "cloud clients ready".to_string(),
            BootstrapEvent::ClientsReady => return None,
            BootstrapEvent::KeyPairGenerated { name } => format!("generated key pair {name}"),
            BootstrapEvent::KeyPairImported { name } => format!("imported key pair {name}"),
            BootstrapEvent::KeyPairVerified { name } => format!("key pair {name} is in sync"),
            BootstrapEvent::StackCreating { name } => format!("creating stack {name}"),
            BootstrapEvent::StackUpdating { name } => format!("updating stack {name}"),
            BootstrapEvent::StackUnchanged { name } => format!("stack {name} is up to date"),
            BootstrapEvent::StackReady { name, elastic_ip } => {
                format!("stack {name} ready (elastic IP {elastic_ip})")
            }
            BootstrapEvent::SslKeyPairGenerated { common_name } => {
                format!("issued director certificate for {common_name}")
            }
            BootstrapEvent::CredentialsGenerated { count } => {
                format!("generated {count} internal credentials")
            }
            BootstrapEvent::ManifestGenerated { name } => format!("rendered manifest {name}"),
            BootstrapEvent::DirectorDeploying { update: false } => {
                "installing director".to_string()
            }
            BootstrapEvent::DirectorDeploying { update: true } => {
                "updating director".to_string()
            }
            BootstrapEvent::DirectorDeployed => "director deployed".to_string(),
            BootstrapEvent::CheckpointSaved { location } if self.verbose => {
                format!("saved state to {location}")
            }
            BootstrapEvent::CheckpointSaved { .. } => return None,
            BootstrapEvent::CheckpointSaveFailed { location, message } => {
                format!("warning: could not save progress to {location}: {message}")
            }
            BootstrapEvent::Completed => "done".to_string(),
        };
        Some(text)
    }
}

impl BootstrapEventSink for ConsoleEventSink {
    fn on_event(&self, event: BootstrapEvent) {
        let Some(text) = self.line(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "==> {text}");
        }
    }
}
