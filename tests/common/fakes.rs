//! In-process collaborators for workflow tests.

use std::path::Path;
use std::sync::{Arc, Mutex};

use bbl::application::{BootstrapOptions, BootstrapUseCase, ManifestDirectorDeployer};
use bbl::domain::entities::Manifest;
use bbl::domain::ports::{DirectorInstaller, InstallerError};
use bbl::domain::services::{KeyPairSynchronizer, ManifestAssembler};
use bbl::domain::value_objects::{InstallerState, KeyPair};
use bbl::infrastructure::{
    JsonCheckpointRepository, LocalCloudFactory, OsRngSecretGenerator, RcgenKeyPairGenerator,
    RcgenSslGenerator, UuidV4Generator,
};

/// One recorded installer invocation
#[derive(Debug, Clone)]
pub struct InstallCall {
    pub manifest: Manifest,
    pub key_pair: KeyPair,
    pub prior_state: InstallerState,
}

#[derive(Debug, Default)]
struct InstallerLog {
    calls: Vec<InstallCall>,
    failures_left: usize,
}

/// Installer that records its input and returns a state counting runs
#[derive(Debug, Clone, Default)]
pub struct InProcessInstaller {
    log: Arc<Mutex<InstallerLog>>,
}

impl InProcessInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` installs fail
    pub fn fail_next(&self, n: usize) {
        self.log.lock().unwrap().failures_left = n;
    }

    pub fn calls(&self) -> Vec<InstallCall> {
        self.log.lock().unwrap().calls.clone()
    }
}

impl DirectorInstaller for InProcessInstaller {
    fn install(
        &self,
        manifest: &Manifest,
        key_pair: &KeyPair,
        prior_state: &InstallerState,
    ) -> Result<InstallerState, InstallerError> {
        let mut log = self.log.lock().unwrap();
        log.calls.push(InstallCall {
            manifest: manifest.clone(),
            key_pair: key_pair.clone(),
            prior_state: prior_state.clone(),
        });

        if log.failures_left > 0 {
            log.failures_left -= 1;
            return Err(InstallerError::Failed {
                command: "in-process".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "director VM did not respond".to_string(),
            });
        }

        let mut state = serde_json::Map::new();
        state.insert("current_vm_cid".into(), "i-director".into());
        state.insert("runs".into(), log.calls.len().into());
        Ok(InstallerState::from_map(state))
    }
}

pub type TestUseCase =
    BootstrapUseCase<LocalCloudFactory, ManifestDirectorDeployer<InProcessInstaller>>;

/// The production workflow against the local cloud and an in-process installer
pub struct Workflow {
    pub use_case: TestUseCase,
    pub repository: JsonCheckpointRepository,
    pub installer: InProcessInstaller,
}

impl Workflow {
    pub fn new(root: &Path) -> Self {
        let installer = InProcessInstaller::new();
        let assembler = ManifestAssembler::new(
            Box::new(RcgenSslGenerator::new()),
            Box::new(OsRngSecretGenerator::new()),
        );
        let use_case = BootstrapUseCase::new(
            LocalCloudFactory::new(root.join("cloud")),
            ManifestDirectorDeployer::new(assembler, installer.clone()),
            KeyPairSynchronizer::new(
                Box::new(RcgenKeyPairGenerator::new()),
                Box::new(UuidV4Generator),
            ),
            BootstrapOptions::default(),
        );

        Self {
            use_case,
            repository: JsonCheckpointRepository::new(root.join("state")),
            installer,
        }
    }
}
