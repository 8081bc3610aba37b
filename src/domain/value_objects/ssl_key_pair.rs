//! SSL Key Pair Value Object
//!
//! PEM-encoded certificate and private key served by the director API.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use x509_parser::extensions::GeneralName;
use x509_parser::pem::parse_x509_pem;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslKeyPair {
    pub certificate: String,
    pub private_key: String,
}

impl SslKeyPair {
    pub fn new(certificate: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            certificate: certificate.into(),
            private_key: private_key.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.certificate.is_empty() && self.private_key.is_empty()
    }

    /// Check whether the certificate covers `ip`
    ///
    /// A certificate covers an address when one of its subject alternative
    /// names is that IP, or its common name is the literal address. Missing
    /// key material, unparsable PEM and non-IP input are never valid.
    pub fn is_valid_for_ip(&self, ip: &str) -> bool {
        if self.private_key.trim().is_empty() {
            return false;
        }
        let Ok(target) = ip.trim().parse::<IpAddr>() else {
            return false;
        };

        let Ok((_, pem)) = parse_x509_pem(self.certificate.as_bytes()) else {
            return false;
        };
        let Ok(cert) = pem.parse_x509() else {
            return false;
        };

        let san_match = match cert.subject_alternative_name() {
            Ok(Some(san)) => san.value.general_names.iter().any(|name| match name {
                GeneralName::IPAddress(bytes) => ip_bytes_match(bytes, &target),
                _ => false,
            }),
            _ => false,
        };
        if san_match {
            return true;
        }

        let cn_match = cert
            .subject()
            .iter_common_name()
            .filter_map(|cn| cn.as_str().ok())
            .any(|cn| cn.parse::<IpAddr>().is_ok_and(|addr| addr == target));
        cn_match
    }
}

fn ip_bytes_match(bytes: &[u8], target: &IpAddr) -> bool {
    match target {
        IpAddr::V4(v4) => bytes == v4.octets().as_slice(),
        IpAddr::V6(v6) => bytes == v6.octets().as_slice(),
    }
}
