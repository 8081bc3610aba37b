//! Manifest assembly service
//!
//! Builds the director manifest by threading [`ManifestProperties`] through a
//! fixed chain of sub-builders:
//!
//! 1. SSL check (regenerate the director certificate if it does not cover the elastic IP)
//! 2. releases
//! 3. resource pools
//! 4. disk pools
//! 5. networks
//! 6. cloud-provider block (fails fast without an elastic IP)
//! 7. jobs (generates missing internal credentials)
//! 8. bind the message-bus password into the cloud-provider block
//!
//! Read-only stages borrow the properties; only the SSL step and the job
//! builder hand back a new value.

pub mod cloud_provider;
pub mod disk_pools;
pub mod jobs;
pub mod networks;
pub mod releases;
pub mod resource_pools;

use std::sync::Arc;

use crate::domain::entities::Manifest;
use crate::domain::ports::{
    BootstrapEvent, BootstrapEventSink, NoopEventSink, SecretGenerator, SslKeyPairGenerator,
};
use crate::domain::value_objects::ManifestProperties;
use crate::error::ManifestBuildError;

/// Manifest name the installer deploys under
pub const DEFAULT_MANIFEST_NAME: &str = "bosh";

pub struct ManifestAssembler {
    name: String,
    ssl: Box<dyn SslKeyPairGenerator>,
    secrets: Box<dyn SecretGenerator>,
    events: Arc<dyn BootstrapEventSink>,
}

impl ManifestAssembler {
    pub fn new(ssl: Box<dyn SslKeyPairGenerator>, secrets: Box<dyn SecretGenerator>) -> Self {
        Self {
            name: DEFAULT_MANIFEST_NAME.to_string(),
            ssl,
            secrets,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_events(mut self, events: Arc<dyn BootstrapEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn build(
        &self,
        properties: ManifestProperties,
    ) -> Result<(Manifest, ManifestProperties), ManifestBuildError> {
        let properties = self.ensure_ssl_key_pair(properties)?;

        let releases = releases::build();
        let resource_pools = resource_pools::build(&properties);
        let disk_pools = disk_pools::build();
        let networks = networks::build(&properties);
        let cloud_provider = cloud_provider::build(&properties)?;

        let missing = properties.credentials.missing_count();
        let (jobs, properties) = jobs::build(properties, self.secrets.as_ref())?;
        if missing > 0 {
            self.events
                .on_event(BootstrapEvent::CredentialsGenerated { count: missing });
        }

        let cloud_provider = cloud_provider::bind_mbus(
            cloud_provider,
            &properties.credentials.mbus,
            &properties.elastic_ip,
        );

        let manifest = Manifest {
            name: self.name.clone(),
            releases,
            resource_pools,
            disk_pools,
            networks,
            jobs,
            cloud_provider,
        };
        self.events.on_event(BootstrapEvent::ManifestGenerated {
            name: manifest.name.clone(),
        });

        Ok((manifest, properties))
    }

    fn ensure_ssl_key_pair(
        &self,
        properties: ManifestProperties,
    ) -> Result<ManifestProperties, ManifestBuildError> {
        if properties
            .ssl_key_pair
            .is_valid_for_ip(&properties.elastic_ip)
        {
            return Ok(properties);
        }

        let common_name = properties.elastic_ip.clone();
        let ssl_key_pair =
            self.ssl
                .generate(&common_name)
                .map_err(|source| ManifestBuildError::SslGeneration {
                    common_name: common_name.clone(),
                    source,
                })?;
        self.events
            .on_event(BootstrapEvent::SslKeyPairGenerated { common_name });

        Ok(properties.with_ssl_key_pair(ssl_key_pair))
    }
}
