//! Property tests for internal credential generation.

use proptest::prelude::*;

use bbl::domain::value_objects::InternalCredentials;

fn secret() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-f0-9]{8,32}"]
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

fn fields(c: &InternalCredentials) -> [&str; InternalCredentials::COUNT] {
    [
        &c.mbus,
        &c.nats,
        &c.redis,
        &c.postgres,
        &c.registry,
        &c.blobstore_director,
        &c.blobstore_agent,
        &c.health_monitor,
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Filling generates exactly the missing secrets and keeps the rest.
    #[test]
    fn property_fill_missing_only_touches_empty_slots(creds in credentials()) {
        let missing = creds.missing_count();
        let mut calls = 0usize;

        let (filled, generated) = creds
            .clone()
            .fill_missing(|| -> Result<String, ()> {
                calls += 1;
                Ok(format!("generated-{calls}"))
            })
            .unwrap();

        prop_assert_eq!(generated, missing);
        prop_assert_eq!(calls, missing);
        prop_assert!(filled.is_complete());
        for (before, after) in fields(&creds).iter().zip(fields(&filled).iter()) {
            if !before.is_empty() {
                prop_assert_eq!(before, after);
            }
        }
    }

    /// PROPERTY: A complete set is a fixed point.
    #[test]
    fn property_complete_set_is_never_regenerated(creds in credentials()) {
        let (filled, _) = creds
            .fill_missing(|| -> Result<String, ()> { Ok("x".to_string()) })
            .unwrap();

        let (again, generated) = filled
            .clone()
            .fill_missing(|| -> Result<String, ()> { Err(()) })
            .unwrap();

        prop_assert_eq!(generated, 0);
        prop_assert_eq!(again, filled);
    }
}
