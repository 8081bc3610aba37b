//! Property tests for checkpoint persistence.

use proptest::prelude::*;

use bbl::domain::entities::{Checkpoint, DirectorRecord};
use bbl::domain::ports::CheckpointRepository;
use bbl::domain::value_objects::{
    CloudCredentials, InstallerState, InternalCredentials, KeyPair, SslKeyPair,
};
use bbl::infrastructure::JsonCheckpointRepository;

fn text() -> impl Strategy<Value = String> {
    "\\PC{0,24}"
}

fn key_pair() -> impl Strategy<Value = Option<KeyPair>> {
    proptest::option::of((text(), text(), text()).prop_map(|(n, p, k)| KeyPair::new(n, p, k)))
}

fn installer_state() -> impl Strategy<Value = InstallerState> {
    proptest::collection::btree_map("[a-z_]{1,12}", text(), 0..4).prop_map(|entries| {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();
        InstallerState::from_map(map)
    })
}

fn secret() -> impl Strategy<Value = String> {
    "[a-f0-9]{1,32}"
}

fn credentials() -> impl Strategy<Value = InternalCredentials> {
    proptest::collection::vec(secret(), InternalCredentials::COUNT).prop_map(|s| {
        InternalCredentials {
            mbus: s[0].clone(),
            nats: s[1].clone(),
            redis: s[2].clone(),
            postgres: s[3].clone(),
            registry: s[4].clone(),
            blobstore_director: s[5].clone(),
            blobstore_agent: s[6].clone(),
            health_monitor: s[7].clone(),
        }
    })
}

/// Director records are only ever written whole
fn director() -> impl Strategy<Value = Option<DirectorRecord>> {
    proptest::option::of(
        ("\\PC{1,24}", "\\PC{1,24}", credentials(), installer_state())
            .prop_filter("certificate and key present", |(cert, key, _, _)| {
                !cert.trim().is_empty() && !key.trim().is_empty()
            })
            .prop_map(|(cert, key, credentials, state)| DirectorRecord {
                ssl_key_pair: SslKeyPair::new(cert, key),
                credentials,
                installer_state: state,
            }),
    )
}

fn checkpoint() -> impl Strategy<Value = Checkpoint> {
    ((text(), text(), text()), key_pair(), director()).prop_map(
        |((access, secret, region), key_pair, director)| Checkpoint {
            cloud: CloudCredentials::new(access, secret, region),
            key_pair,
            director,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Whatever is saved is exactly what is loaded back.
    #[test]
    fn property_checkpoint_survives_save_and_load(cp in checkpoint()) {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonCheckpointRepository::new(dir.path());

        repository.save(&cp).unwrap();
        let loaded = repository.load().unwrap();

        prop_assert_eq!(loaded, cp);
    }

    /// PROPERTY: Saving twice leaves only the latest checkpoint.
    #[test]
    fn property_later_save_wins(first in checkpoint(), second in checkpoint()) {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonCheckpointRepository::new(dir.path());

        repository.save(&first).unwrap();
        repository.save(&second).unwrap();

        prop_assert_eq!(repository.load().unwrap(), second);
    }
}
