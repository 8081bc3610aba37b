//! Bootstrap Use Case
//!
//! Sequences the bootstrap against a checkpoint:
//! 1. Build cloud clients from the stored credentials
//! 2. Reconcile the access key pair
//! 3. Create or update the infrastructure stack
//! 4. Install or update the director
//!
//! Each failure stops the run and hands back the checkpoint as far as it got.
//! Nothing is retried.

use std::sync::Arc;

use crate::domain::entities::{Checkpoint, DirectorRecord};
use crate::domain::ports::{
    BootstrapEvent, BootstrapEventSink, CheckpointError, CheckpointRepository, ClientFactory,
    CloudConfig, DeployInput, DirectorDeployer, NoopEventSink,
};
use crate::domain::services::{InfrastructureProvisioner, KeyPairSynchronizer};
use crate::domain::value_objects::CloudCredentials;
use crate::error::{BootstrapError, BootstrapResult, Interrupted};

use super::options::BootstrapOptions;

/// Return early with the checkpoint as mutated so far
macro_rules! step {
    ($checkpoint:ident, $result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => return Err(Interrupted::new($checkpoint, e)),
        }
    };
}

/// Bootstrap use case
///
/// Parameterized by the client factory and the director deployer so tests can
/// swap either for in-memory fakes.
pub struct BootstrapUseCase<CF, D>
where
    CF: ClientFactory,
    D: DirectorDeployer,
{
    factory: CF,
    deployer: D,
    key_pairs: KeyPairSynchronizer,
    provisioner: InfrastructureProvisioner,
    options: BootstrapOptions,
    events: Arc<dyn BootstrapEventSink>,
}

impl<CF, D> BootstrapUseCase<CF, D>
where
    CF: ClientFactory,
    D: DirectorDeployer,
{
    pub fn new(
        factory: CF,
        deployer: D,
        key_pairs: KeyPairSynchronizer,
        options: BootstrapOptions,
    ) -> Self {
        Self {
            factory,
            deployer,
            key_pairs,
            provisioner: InfrastructureProvisioner::new(options.stack_name.clone()),
            options,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report progress of every step to `events`
    pub fn with_events(mut self, events: Arc<dyn BootstrapEventSink>) -> Self {
        self.key_pairs = self.key_pairs.with_events(events.clone());
        self.provisioner = self.provisioner.with_events(events.clone());
        self.events = events;
        self
    }

    pub fn options(&self) -> &BootstrapOptions {
        &self.options
    }

    /// Run the workflow once, without persisting anything
    pub fn execute(&self, checkpoint: Checkpoint) -> Result<Checkpoint, Interrupted> {
        let checkpoint = self.run(checkpoint, &mut |_: &Checkpoint| Ok(()))?;
        self.events.on_event(BootstrapEvent::Completed);
        Ok(checkpoint)
    }

    /// Load the checkpoint, run the workflow and save progress along the way
    ///
    /// Non-empty fields of `credentials` replace the stored ones. The
    /// checkpoint is written after the key pair changes, after the director
    /// record is set and once more at the end, including when a step fails.
    pub fn execute_and_persist(
        &self,
        repository: &dyn CheckpointRepository,
        credentials: &CloudCredentials,
    ) -> BootstrapResult<Checkpoint> {
        let stored = repository.load()?;
        let mut on_disk = stored.clone();

        let checkpoint = Checkpoint {
            cloud: stored.cloud.merged_with(credentials),
            ..stored
        };

        let outcome = self.run(checkpoint, &mut |cp: &Checkpoint| {
            self.persist(repository, cp, &mut on_disk)
        });

        match outcome {
            Ok(checkpoint) => {
                self.persist(repository, &checkpoint, &mut on_disk)?;
                self.events.on_event(BootstrapEvent::Completed);
                Ok(checkpoint)
            }
            Err(interrupted) => {
                // The step error is returned; a failed save is only reported
                if let Err(save_error) =
                    self.persist(repository, &interrupted.checkpoint, &mut on_disk)
                {
                    self.events.on_event(BootstrapEvent::CheckpointSaveFailed {
                        location: repository.location(),
                        message: save_error.to_string(),
                    });
                }
                Err(interrupted.error)
            }
        }
    }

    fn persist(
        &self,
        repository: &dyn CheckpointRepository,
        checkpoint: &Checkpoint,
        on_disk: &mut Checkpoint,
    ) -> Result<(), CheckpointError> {
        if checkpoint == on_disk {
            return Ok(());
        }
        repository.save(checkpoint)?;
        *on_disk = checkpoint.clone();
        self.events.on_event(BootstrapEvent::CheckpointSaved {
            location: repository.location(),
        });
        Ok(())
    }

    fn cloud_config(&self, checkpoint: &Checkpoint) -> CloudConfig {
        CloudConfig {
            access_key_id: checkpoint.cloud.access_key.clone(),
            secret_access_key: checkpoint.cloud.secret_key.clone(),
            region: checkpoint.cloud.region.clone(),
            endpoint_override: self.options.endpoint_override.clone(),
        }
    }

    fn run(
        &self,
        mut checkpoint: Checkpoint,
        on_step: &mut dyn FnMut(&Checkpoint) -> Result<(), CheckpointError>,
    ) -> Result<Checkpoint, Interrupted> {
        self.events.on_event(BootstrapEvent::Started {
            stack_name: self.options.stack_name.clone(),
            region: checkpoint.cloud.region.clone(),
        });

        // Step 1: Cloud clients
        let clients = step!(
            checkpoint,
            self.factory
                .connect(&self.cloud_config(&checkpoint))
                .map_err(BootstrapError::ClientInit)
        );
        self.events.on_event(BootstrapEvent::ClientsReady);

        // Step 2: Key pair
        let local = checkpoint.key_pair.clone().unwrap_or_default();
        let key_pair = step!(
            checkpoint,
            self.key_pairs.sync(local, clients.compute.as_ref())
        );
        if checkpoint.key_pair.as_ref() != Some(&key_pair) {
            checkpoint.key_pair = Some(key_pair.clone());
            step!(checkpoint, on_step(&checkpoint));
        }

        // Step 3: Infrastructure
        let stack = step!(
            checkpoint,
            self.provisioner.create(&key_pair.name, clients.stacks.as_ref())
        );

        // Step 4: Director
        let input = DeployInput {
            installer_state: checkpoint.installer_state(),
            stack,
            cloud: checkpoint.cloud.clone(),
            ssl_key_pair: checkpoint.director_ssl_key_pair(),
            credentials: checkpoint.director_credentials(),
            key_pair,
        };
        self.events.on_event(BootstrapEvent::DirectorDeploying {
            update: checkpoint.has_director(),
        });
        let output = step!(checkpoint, self.deployer.deploy(input));
        self.events.on_event(BootstrapEvent::DirectorDeployed);

        if checkpoint.director.is_none() {
            checkpoint.director = Some(DirectorRecord {
                ssl_key_pair: output.ssl_key_pair,
                credentials: output.credentials,
                installer_state: output.installer_state,
            });
            step!(checkpoint, on_step(&checkpoint));
        }

        Ok(checkpoint)
    }
}
