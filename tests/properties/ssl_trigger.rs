//! Property tests for the director certificate check.

use proptest::prelude::*;

use bbl::domain::ports::SslKeyPairGenerator;
use bbl::domain::value_objects::SslKeyPair;
use bbl::infrastructure::RcgenSslGenerator;

fn ipv4() -> impl Strategy<Value = String> {
    (1u8..=223, any::<u8>(), any::<u8>(), 1u8..=254)
        .prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}"))
}

proptest! {
    // Certificate generation dominates the runtime; keep the case count low.
    #![proptest_config(ProptestConfig {
        cases: 16,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A certificate issued for an IP covers that IP and no other.
    #[test]
    fn property_certificate_covers_only_its_ip(ip in ipv4(), other in ipv4()) {
        prop_assume!(ip != other);
        let pair = RcgenSslGenerator::new().generate(&ip).unwrap();

        prop_assert!(pair.is_valid_for_ip(&ip));
        prop_assert!(!pair.is_valid_for_ip(&other));
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary text never passes as a certificate, and never panics.
    #[test]
    fn property_garbage_is_never_valid(
        cert in "\\PC{0,200}",
        key in "\\PC{0,64}",
        ip in ipv4(),
    ) {
        prop_assert!(!SslKeyPair::new(cert, key).is_valid_for_ip(&ip));
    }
}
