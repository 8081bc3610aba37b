//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{BootstrapOptions, BootstrapUseCase, ManifestDirectorDeployer};
use crate::config::Config;
use crate::domain::ports::{BootstrapEventSink, NoopEventSink};
use crate::domain::services::{KeyPairSynchronizer, ManifestAssembler};
use crate::infrastructure::{
    CommandInstaller, ConsoleEventSink, JsonCheckpointRepository, JsonEventSink,
    LocalCloudFactory, OsRngSecretGenerator, RcgenKeyPairGenerator, RcgenSslGenerator,
    UuidV4Generator,
};

/// Directory under the state dir that backs the local cloud by default
pub const LOCAL_CLOUD_DIR: &str = "cloud";

/// Type alias for the concrete BootstrapUseCase with all dependencies
pub type ConcreteBootstrapUseCase =
    BootstrapUseCase<LocalCloudFactory, ManifestDirectorDeployer<CommandInstaller>>;

/// Create a bootstrap use case with all dependencies wired up
///
/// All infrastructure dependencies are automatically injected; `events`
/// receives progress from every step, including manifest assembly.
pub fn create_bootstrap_use_case(
    config: &Config,
    state_dir: &Path,
    events: Arc<dyn BootstrapEventSink>,
) -> ConcreteBootstrapUseCase {
    let assembler = ManifestAssembler::new(
        Box::new(RcgenSslGenerator::new()),
        Box::new(OsRngSecretGenerator::new()),
    )
    .with_name(config.director.manifest_name.clone())
    .with_events(events.clone());

    let deployer = ManifestDirectorDeployer::new(
        assembler,
        CommandInstaller::new(config.installer.command.clone()),
    )
    .with_director_login(
        config.director.username.clone(),
        config.director.password.clone(),
    );

    let key_pairs = KeyPairSynchronizer::new(
        Box::new(RcgenKeyPairGenerator::new()),
        Box::new(UuidV4Generator),
    );

    let mut options = BootstrapOptions::new(config.stack.name.clone());
    if let Some(endpoint) = config.endpoint_override() {
        options = options.with_endpoint_override(endpoint);
    }

    BootstrapUseCase::new(
        LocalCloudFactory::new(state_dir.join(LOCAL_CLOUD_DIR)),
        deployer,
        key_pairs,
        options,
    )
    .with_events(events)
}

/// Checkpoint repository for `state_dir`
pub fn create_checkpoint_repository(state_dir: &Path) -> JsonCheckpointRepository {
    JsonCheckpointRepository::new(state_dir)
}

/// Event sink for the requested output mode
pub fn create_event_sink(json: bool, verbose: u8, quiet: bool) -> Arc<dyn BootstrapEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else if quiet {
        Arc::new(NoopEventSink)
    } else {
        Arc::new(ConsoleEventSink::stderr().verbose(verbose > 0))
    }
}
