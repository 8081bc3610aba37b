//! Scenario: First Bootstrap
//!
//! Journey: Operator bootstraps a director into an empty cloud account.
//!
//! Steps:
//! 1. Operator supplies cloud credentials, nothing is saved yet
//! 2. bbl generates and registers a key pair
//! 3. bbl creates the stack and deploys the director
//! 4. Everything is recorded in state.json
//!
//! Success Criteria:
//! - The key pair is registered with the provider
//! - The director certificate covers the stack's elastic IP
//! - The checkpoint on disk matches the returned checkpoint

use bbl::domain::ports::{CheckpointRepository, ClientFactory, CloudConfig};
use bbl::domain::value_objects::{CloudCredentials, InternalCredentials};
use bbl::infrastructure::LocalCloudFactory;

use crate::common::*;

fn credentials() -> CloudCredentials {
    CloudCredentials::new("AKIATEST", "secret", "us-east-1")
}

/// SCENARIO: Empty account ends with a deployed director
#[test]
fn scenario_first_bootstrap_deploys_director() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = Workflow::new(dir.path());

    let checkpoint = workflow
        .use_case
        .execute_and_persist(&workflow.repository, &credentials())
        .unwrap();

    let key_pair = checkpoint.key_pair.clone().expect("key pair recorded");
    assert!(key_pair.is_complete());
    assert!(key_pair.name.starts_with("keypair-"));

    let director = checkpoint.director.clone().expect("director recorded");
    assert!(director.credentials.is_complete());
    assert_eq!(director.installer_state.as_map()["runs"], 1);

    let saved = workflow.repository.load().unwrap();
    assert_eq!(saved, checkpoint);
}

/// SCENARIO: The provider sees the same public key the checkpoint holds
#[test]
fn scenario_key_pair_is_registered_with_provider() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = Workflow::new(dir.path());

    let checkpoint = workflow
        .use_case
        .execute_and_persist(&workflow.repository, &credentials())
        .unwrap();
    let key_pair = checkpoint.key_pair.unwrap();

    let clients = LocalCloudFactory::new(dir.path().join("cloud"))
        .connect(&CloudConfig {
            access_key_id: "AKIATEST".to_string(),
            secret_access_key: "secret".to_string(),
            region: "us-east-1".to_string(),
            endpoint_override: None,
        })
        .unwrap();
    let registered = clients
        .compute
        .describe_key_pair(&key_pair.name)
        .unwrap()
        .expect("key pair registered");

    assert!(key_pair.public_key_matches(&registered));
}

/// SCENARIO: The installer receives a manifest wired to the stack outputs
#[test]
fn scenario_manifest_targets_stack_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = Workflow::new(dir.path());

    let checkpoint = workflow
        .use_case
        .execute_and_persist(&workflow.repository, &credentials())
        .unwrap();

    let calls = workflow.installer.calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert!(call.prior_state.is_empty(), "fresh install has no state");
    assert_eq!(Some(&call.key_pair), checkpoint.key_pair.as_ref());

    let manifest = &call.manifest;
    let elastic_ip = &manifest.cloud_provider.ssh_tunnel.host;
    assert!(elastic_ip.starts_with("52."));
    assert!(manifest.cloud_provider.mbus.ends_with(&format!("@{elastic_ip}:6868")));
    assert_eq!(
        manifest.cloud_provider.properties.aws.default_key_name,
        checkpoint.key_pair.as_ref().unwrap().name
    );
    assert_eq!(
        manifest.resource_pools[0].cloud_properties.availability_zone,
        "us-east-1a"
    );

    let director = checkpoint.director.unwrap();
    assert!(director.ssl_key_pair.is_valid_for_ip(elastic_ip));
    assert_ne!(director.credentials, InternalCredentials::default());
}
