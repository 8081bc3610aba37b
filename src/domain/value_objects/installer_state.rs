//! Opaque installer state
//!
//! Whatever the director installer records about the VM it manages. bbl never
//! interprets it; it only stores the latest copy and hands it back on the next
//! run.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstallerState(Map<String, Value>);

impl InstallerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for InstallerState {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
