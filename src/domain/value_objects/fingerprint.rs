//! Fingerprint Value Object
//!
//! SHA-256 over a rendered document. Stack templates are compared by
//! fingerprint, and its leading hex digits seed stable resource identifiers.

use std::fmt;

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 digest, displayed as `sha256:<hex>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of(content: &str) -> Self {
        Self::of_parts([content])
    }

    /// Digest of several parts, newline separated
    pub fn of_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut hasher = Sha256::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                hasher.update(b"\n");
            }
            hasher.update(part.as_bytes());
        }
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn hex(&self) -> &str {
        &self.0
    }

    /// First `n` hex characters
    pub fn short(&self, n: usize) -> &str {
        &self.0[..n.min(self.0.len())]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha256:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            Fingerprint::of("hello").hex(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn parts_are_joined_with_newlines() {
        assert_eq!(Fingerprint::of_parts(["a", "b"]), Fingerprint::of("a\nb"));
        assert_ne!(Fingerprint::of_parts(["ab"]), Fingerprint::of_parts(["a", "b"]));
    }

    #[test]
    fn display_carries_algorithm() {
        let fp = Fingerprint::of("template");
        assert_eq!(fp.to_string(), format!("sha256:{}", fp.hex()));
    }

    #[test]
    fn short_is_clamped() {
        let fp = Fingerprint::of("template");
        assert_eq!(fp.short(8).len(), 8);
        assert_eq!(fp.short(100), fp.hex());
    }
}
