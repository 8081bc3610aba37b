//! Cloud Client Ports
//!
//! The slice of a cloud provider bbl talks to: a stack service (declarative
//! infrastructure templates) and a compute service (access key pairs).
//! Calls are blocking; retries and backoff belong to the implementation.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::value_objects::Fingerprint;

/// Errors raised by cloud clients
#[derive(Debug, Error)]
pub enum CloudError {
    /// Credentials, region or endpoint were rejected while building a client
    #[error("invalid cloud configuration: {0}")]
    InvalidConfig(String),

    /// A provider call failed
    #[error("{operation} failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },
}

impl CloudError {
    pub fn request(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Request {
            operation,
            message: message.into(),
        }
    }
}

/// Connection settings for the provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub endpoint_override: Option<String>,
}

/// Rendered stack template plus its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTemplate {
    pub body: String,
    pub parameters: BTreeMap<String, String>,
}

impl StackTemplate {
    /// Fingerprint over body and parameters
    ///
    /// Two templates with the same fingerprint describe the same stack.
    pub fn fingerprint(&self) -> Fingerprint {
        let assignments: Vec<String> = self
            .parameters
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        Fingerprint::of_parts(
            std::iter::once(self.body.as_str()).chain(assignments.iter().map(String::as_str)),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackStatus {
    /// Create or update finished successfully
    Complete,
    /// Still converging
    InProgress,
    /// Create/update failed or was rolled back; carries the provider's reason
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDescription {
    pub name: String,
    pub status: StackStatus,
    pub outputs: BTreeMap<String, String>,
}

/// Result of asking the provider to update a stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackUpdate {
    Updated,
    NoChanges,
}

pub trait StackClient {
    /// Look up a stack by name
    fn describe_stack(&self, name: &str) -> Result<Option<StackDescription>, CloudError>;

    /// Create a stack and block until the provider settles it
    fn create_stack(&self, name: &str, template: &StackTemplate) -> Result<(), CloudError>;

    /// Update a stack and block until the provider settles it
    fn update_stack(&self, name: &str, template: &StackTemplate)
        -> Result<StackUpdate, CloudError>;
}

pub trait ComputeClient {
    /// Public key registered under `name`, if any
    fn describe_key_pair(&self, name: &str) -> Result<Option<String>, CloudError>;

    /// Register a public key under `name`
    fn import_key_pair(&self, name: &str, public_key: &str) -> Result<(), CloudError>;
}

/// Clients built from one set of credentials
pub struct CloudClients {
    pub stacks: Box<dyn StackClient>,
    pub compute: Box<dyn ComputeClient>,
}

/// Builds cloud clients from credentials
pub trait ClientFactory {
    fn connect(&self, config: &CloudConfig) -> Result<CloudClients, CloudError>;
}
