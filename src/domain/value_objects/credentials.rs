//! Internal Credentials Value Object
//!
//! The eight secrets the director's internal subsystems authenticate with.
//! They are generated once and then carried forward for the lifetime of a
//! checkpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalCredentials {
    #[serde(default)]
    pub mbus: String,
    #[serde(default)]
    pub nats: String,
    #[serde(default)]
    pub redis: String,
    #[serde(default)]
    pub postgres: String,
    #[serde(default)]
    pub registry: String,
    #[serde(default)]
    pub blobstore_director: String,
    #[serde(default)]
    pub blobstore_agent: String,
    #[serde(default)]
    pub health_monitor: String,
}

impl InternalCredentials {
    /// Number of secrets in a complete set
    pub const COUNT: usize = 8;

    fn slots_mut(&mut self) -> [&mut String; Self::COUNT] {
        [
            &mut self.mbus,
            &mut self.nats,
            &mut self.redis,
            &mut self.postgres,
            &mut self.registry,
            &mut self.blobstore_director,
            &mut self.blobstore_agent,
            &mut self.health_monitor,
        ]
    }

    fn slots(&self) -> [&str; Self::COUNT] {
        [
            &self.mbus,
            &self.nats,
            &self.redis,
            &self.postgres,
            &self.registry,
            &self.blobstore_director,
            &self.blobstore_agent,
            &self.health_monitor,
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.slots().iter().all(|s| !s.is_empty())
    }

    pub fn missing_count(&self) -> usize {
        self.slots().iter().filter(|s| s.is_empty()).count()
    }

    /// Fill every empty secret from `generate`, leaving present ones untouched
    ///
    /// Returns the completed set and how many secrets were generated.
    pub fn fill_missing<E>(
        mut self,
        mut generate: impl FnMut() -> Result<String, E>,
    ) -> Result<(Self, usize), E> {
        let mut generated = 0;
        for slot in self.slots_mut() {
            if slot.is_empty() {
                *slot = generate()?;
                generated += 1;
            }
        }
        Ok((self, generated))
    }
}
