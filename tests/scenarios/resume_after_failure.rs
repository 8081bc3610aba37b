//! Scenario: Resuming After a Failed Deploy
//!
//! Journey: The installer fails on the first attempt; the operator fixes the
//! problem and runs bbl again.
//!
//! Steps:
//! 1. Key pair and stack are created, then the installer fails
//! 2. The partial checkpoint is saved
//! 3. A second run completes the bootstrap
//!
//! Success Criteria:
//! - The failure is reported as a deploy error
//! - The key pair survives the failure and is reused
//! - The second run records the director

use bbl::domain::ports::CheckpointRepository;
use bbl::domain::value_objects::CloudCredentials;
use bbl::BootstrapError;

use crate::common::*;

fn credentials() -> CloudCredentials {
    CloudCredentials::new("AKIATEST", "secret", "us-east-1")
}

/// SCENARIO: Partial progress is kept when the installer fails
#[test]
fn scenario_failed_deploy_keeps_key_pair() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = Workflow::new(dir.path());
    workflow.installer.fail_next(1);

    let err = workflow
        .use_case
        .execute_and_persist(&workflow.repository, &credentials())
        .unwrap_err();

    assert!(matches!(err, BootstrapError::Deploy(_)), "got {err:?}");
    assert!(err.to_string().contains("director VM did not respond"));

    let saved = workflow.repository.load().unwrap();
    assert!(saved.key_pair.as_ref().is_some_and(|kp| kp.is_complete()));
    assert!(!saved.has_director());
    assert_eq!(saved.cloud, credentials());
}

/// SCENARIO: The next run finishes with the same key pair
#[test]
fn scenario_rerun_after_failure_completes() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = Workflow::new(dir.path());
    workflow.installer.fail_next(1);

    let _ = workflow
        .use_case
        .execute_and_persist(&workflow.repository, &credentials());
    let partial = workflow.repository.load().unwrap();

    let finished = workflow
        .use_case
        .execute_and_persist(&workflow.repository, &credentials())
        .unwrap();

    assert_eq!(finished.key_pair, partial.key_pair);
    assert!(finished.has_director());

    let calls = workflow.installer.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[1].prior_state.is_empty());
    assert_eq!(calls[0].key_pair, calls[1].key_pair);
}

/// SCENARIO: Bad credentials stop the run before anything is created
#[test]
fn scenario_missing_credentials_fail_before_provisioning() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = Workflow::new(dir.path());

    let err = workflow
        .use_case
        .execute_and_persist(
            &workflow.repository,
            &CloudCredentials::new("", "", "us-east-1"),
        )
        .unwrap_err();

    assert_eq!(err.kind(), "client_init");
    assert!(workflow.installer.calls().is_empty());
    assert!(workflow.repository.load().unwrap().key_pair.is_none());
}

/// SCENARIO: A hand-truncated director record stops the run untouched
#[test]
fn scenario_partial_director_record_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = Workflow::new(dir.path());
    let content = r#"{"version":1,"director":{}}"#;
    let state_path = workflow.repository.path();
    std::fs::create_dir_all(state_path.parent().unwrap()).unwrap();
    std::fs::write(workflow.repository.path(), content).unwrap();

    let err = workflow
        .use_case
        .execute_and_persist(&workflow.repository, &credentials())
        .unwrap_err();

    assert_eq!(err.kind(), "checkpoint");
    assert!(workflow.installer.calls().is_empty());
    assert_eq!(
        std::fs::read_to_string(workflow.repository.path()).unwrap(),
        content
    );
}
