//! Key pair synchronization service
//!
//! Makes sure one named access key pair exists both in the checkpoint and at
//! the provider. The local copy is authoritative for the private key; the
//! provider only ever sees the public half.

use std::sync::Arc;

use crate::domain::ports::{
    BootstrapEvent, BootstrapEventSink, ComputeClient, KeyPairGenerator, NoopEventSink,
    UuidGenerator,
};
use crate::domain::value_objects::KeyPair;
use crate::error::{BootstrapError, BootstrapResult};

/// Prefix for generated key pair names
pub const KEY_PAIR_NAME_PREFIX: &str = "keypair-";

pub struct KeyPairSynchronizer {
    generator: Box<dyn KeyPairGenerator>,
    uuids: Box<dyn UuidGenerator>,
    events: Arc<dyn BootstrapEventSink>,
}

impl KeyPairSynchronizer {
    pub fn new(generator: Box<dyn KeyPairGenerator>, uuids: Box<dyn UuidGenerator>) -> Self {
        Self {
            generator,
            uuids,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn BootstrapEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Reconcile `local` with the provider
    ///
    /// - incomplete local pair: generate fresh material and import it
    /// - complete local pair missing remotely: import it again
    /// - present on both sides: public keys must match, otherwise
    ///   [`BootstrapError::KeyPairConflict`]
    ///
    /// An already-synced pair comes back unchanged after a single lookup.
    pub fn sync(&self, local: KeyPair, compute: &dyn ComputeClient) -> BootstrapResult<KeyPair> {
        if !local.is_complete() {
            return self.create(local.name, compute);
        }

        let remote = compute
            .describe_key_pair(&local.name)
            .map_err(|e| BootstrapError::KeyPairSync(e.to_string()))?;

        match remote {
            None => {
                compute
                    .import_key_pair(&local.name, &local.public)
                    .map_err(|e| BootstrapError::KeyPairSync(e.to_string()))?;
                self.events.on_event(BootstrapEvent::KeyPairImported {
                    name: local.name.clone(),
                });
                Ok(local)
            }
            Some(public) if local.public_key_matches(&public) => {
                self.events.on_event(BootstrapEvent::KeyPairVerified {
                    name: local.name.clone(),
                });
                Ok(local)
            }
            Some(_) => Err(BootstrapError::KeyPairConflict { name: local.name }),
        }
    }

    fn create(&self, name: String, compute: &dyn ComputeClient) -> BootstrapResult<KeyPair> {
        let name = if name.is_empty() {
            let id = self
                .uuids
                .generate()
                .map_err(|e| BootstrapError::KeyPairSync(e.to_string()))?;
            format!("{KEY_PAIR_NAME_PREFIX}{id}")
        } else {
            // A named but incomplete pair cannot adopt a remote key we hold no private half for.
            let remote = compute
                .describe_key_pair(&name)
                .map_err(|e| BootstrapError::KeyPairSync(e.to_string()))?;
            if remote.is_some() {
                return Err(BootstrapError::KeyPairConflict { name });
            }
            name
        };

        let material = self
            .generator
            .generate()
            .map_err(|e| BootstrapError::KeyPairSync(e.to_string()))?;
        self.events
            .on_event(BootstrapEvent::KeyPairGenerated { name: name.clone() });

        compute
            .import_key_pair(&name, &material.public)
            .map_err(|e| BootstrapError::KeyPairSync(e.to_string()))?;
        self.events
            .on_event(BootstrapEvent::KeyPairImported { name: name.clone() });

        Ok(KeyPair::new(name, material.public, material.private))
    }
}
