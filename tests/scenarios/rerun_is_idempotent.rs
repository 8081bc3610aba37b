//! Scenario: Re-running a Finished Bootstrap
//!
//! Journey: Operator runs deploy-concourse again on a healthy environment.
//!
//! Steps:
//! 1. A first run completes
//! 2. Operator runs the workflow again with the same credentials
//!
//! Success Criteria:
//! - No new key pair, certificate or credentials are generated
//! - The installer is handed its previous state
//! - The director record stays as first written

use bbl::domain::ports::CheckpointRepository;
use bbl::domain::value_objects::CloudCredentials;

use crate::common::*;

fn credentials() -> CloudCredentials {
    CloudCredentials::new("AKIATEST", "secret", "us-east-1")
}

/// SCENARIO: Second run reuses everything from the first
#[test]
fn scenario_rerun_reuses_saved_material() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = Workflow::new(dir.path());

    let first = workflow
        .use_case
        .execute_and_persist(&workflow.repository, &credentials())
        .unwrap();
    let second = workflow
        .use_case
        .execute_and_persist(&workflow.repository, &credentials())
        .unwrap();

    assert_eq!(first.key_pair, second.key_pair);
    assert_eq!(first.director, second.director);
    assert_eq!(workflow.repository.load().unwrap(), first);
}

/// SCENARIO: The installer converges from its previous state
#[test]
fn scenario_rerun_hands_prior_state_to_installer() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = Workflow::new(dir.path());

    let first = workflow
        .use_case
        .execute_and_persist(&workflow.repository, &credentials())
        .unwrap();
    workflow
        .use_case
        .execute_and_persist(&workflow.repository, &credentials())
        .unwrap();

    let calls = workflow.installer.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].prior_state, first.installer_state());
    assert_eq!(
        calls[0].manifest.jobs[0].properties.director.ssl,
        calls[1].manifest.jobs[0].properties.director.ssl
    );
    assert_eq!(
        calls[0].manifest.cloud_provider.mbus,
        calls[1].manifest.cloud_provider.mbus
    );
}

/// SCENARIO: Stored credentials are enough for a rerun
#[test]
fn scenario_rerun_without_credentials_uses_stored_ones() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = Workflow::new(dir.path());

    workflow
        .use_case
        .execute_and_persist(&workflow.repository, &credentials())
        .unwrap();
    let second = workflow
        .use_case
        .execute_and_persist(&workflow.repository, &CloudCredentials::default())
        .unwrap();

    assert_eq!(second.cloud, credentials());
}
