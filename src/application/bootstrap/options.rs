//! Bootstrap Options

/// Stack name used when none is configured
pub const DEFAULT_STACK_NAME: &str = "concourse";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOptions {
    /// Name of the infrastructure stack to create or update
    pub stack_name: String,
    /// Alternate endpoint handed to the client factory
    pub endpoint_override: Option<String>,
}

impl BootstrapOptions {
    pub fn new(stack_name: impl Into<String>) -> Self {
        Self {
            stack_name: stack_name.into(),
            endpoint_override: None,
        }
    }

    pub fn with_endpoint_override(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint_override = (!endpoint.is_empty()).then_some(endpoint);
        self
    }
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self::new(DEFAULT_STACK_NAME)
    }
}
