//! Infrastructure provisioning service
//!
//! Creates or updates the director's stack from a fixed template and reads
//! back its outputs. Running it again against an unchanged template is a
//! no-op update that yields the same outputs.

pub mod template;

use std::sync::Arc;

use crate::domain::entities::{Stack, StackOutputs};
use crate::domain::ports::{
    BootstrapEvent, BootstrapEventSink, NoopEventSink, StackClient, StackStatus, StackUpdate,
};
use crate::error::ProvisioningError;

pub struct InfrastructureProvisioner {
    stack_name: String,
    events: Arc<dyn BootstrapEventSink>,
}

impl InfrastructureProvisioner {
    pub fn new(stack_name: impl Into<String>) -> Self {
        Self {
            stack_name: stack_name.into(),
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn BootstrapEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }

    /// Converge the stack for `key_pair_name` and return its outputs
    pub fn create(
        &self,
        key_pair_name: &str,
        client: &dyn StackClient,
    ) -> Result<Stack, ProvisioningError> {
        let name = self.stack_name.as_str();
        let template = template::render(key_pair_name)?;

        let operation = match client.describe_stack(name)? {
            None => {
                self.events.on_event(BootstrapEvent::StackCreating {
                    name: name.to_string(),
                });
                client.create_stack(name, &template)?;
                "create"
            }
            Some(_) => {
                self.events.on_event(BootstrapEvent::StackUpdating {
                    name: name.to_string(),
                });
                if client.update_stack(name, &template)? == StackUpdate::NoChanges {
                    self.events.on_event(BootstrapEvent::StackUnchanged {
                        name: name.to_string(),
                    });
                }
                "update"
            }
        };

        let description =
            client
                .describe_stack(name)?
                .ok_or_else(|| ProvisioningError::Vanished {
                    name: name.to_string(),
                    operation,
                })?;

        match description.status {
            StackStatus::Complete => {}
            StackStatus::InProgress => {
                return Err(ProvisioningError::NotSettled {
                    name: name.to_string(),
                    operation,
                })
            }
            StackStatus::Failed(reason) => {
                return Err(ProvisioningError::StackFailed {
                    name: name.to_string(),
                    reason,
                })
            }
        }

        let outputs = StackOutputs::from_map(&description.outputs).map_err(|output| {
            ProvisioningError::MissingOutput {
                name: name.to_string(),
                output,
            }
        })?;

        self.events.on_event(BootstrapEvent::StackReady {
            name: name.to_string(),
            elastic_ip: outputs.elastic_ip.clone(),
        });

        Ok(Stack {
            name: name.to_string(),
            outputs,
        })
    }
}
