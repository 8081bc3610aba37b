//! Access Key Pair Value Object
//!
//! The SSH key pair registered with the cloud provider and used by the
//! installer to reach the director VM.

use serde::{Deserialize, Serialize};

/// Named access key pair
///
/// A key pair is *complete* when name, public and private key are all set.
/// Anything less is treated as "not yet provisioned" by the synchronizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub name: String,
    pub public: String,
    pub private: String,
}

impl KeyPair {
    pub fn new(
        name: impl Into<String>,
        public: impl Into<String>,
        private: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            public: public.into(),
            private: private.into(),
        }
    }

    /// True when name and both halves of the key are present
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.public.is_empty() && !self.private.is_empty()
    }

    /// Compare public keys, ignoring surrounding whitespace
    pub fn public_key_matches(&self, other: &str) -> bool {
        self.public.trim() == other.trim()
    }
}
