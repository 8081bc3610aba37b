//! Manifest Director Deployer
//!
//! Implements the director deploy contract by assembling a manifest from the
//! deploy input and handing it to a `DirectorInstaller`.

use crate::domain::ports::{
    DeployError, DeployInput, DeployOutput, DirectorDeployer, DirectorInstaller,
};
use crate::domain::services::ManifestAssembler;
use crate::domain::value_objects::ManifestProperties;

/// Director login used when none is configured
pub const DEFAULT_DIRECTOR_USERNAME: &str = "admin";
pub const DEFAULT_DIRECTOR_PASSWORD: &str = "admin";

pub struct ManifestDirectorDeployer<I>
where
    I: DirectorInstaller,
{
    assembler: ManifestAssembler,
    installer: I,
    username: String,
    password: String,
}

impl<I> ManifestDirectorDeployer<I>
where
    I: DirectorInstaller,
{
    pub fn new(assembler: ManifestAssembler, installer: I) -> Self {
        Self {
            assembler,
            installer,
            username: DEFAULT_DIRECTOR_USERNAME.to_string(),
            password: DEFAULT_DIRECTOR_PASSWORD.to_string(),
        }
    }

    pub fn with_director_login(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    fn properties(&self, input: &DeployInput) -> ManifestProperties {
        let outputs = &input.stack.outputs;
        ManifestProperties {
            director_username: self.username.clone(),
            director_password: self.password.clone(),
            subnet_id: outputs.subnet_id.clone(),
            availability_zone: outputs.availability_zone.clone(),
            elastic_ip: outputs.elastic_ip.clone(),
            access_key_id: input.cloud.access_key.clone(),
            secret_access_key: input.cloud.secret_key.clone(),
            default_key_name: input.key_pair.name.clone(),
            region: input.cloud.region.clone(),
            security_group: outputs.security_group.clone(),
            ssl_key_pair: input.ssl_key_pair.clone(),
            credentials: input.credentials.clone().unwrap_or_default(),
        }
    }
}

impl<I> DirectorDeployer for ManifestDirectorDeployer<I>
where
    I: DirectorInstaller,
{
    fn deploy(&self, input: DeployInput) -> Result<DeployOutput, DeployError> {
        let (manifest, properties) = self.assembler.build(self.properties(&input))?;
        let installer_state =
            self.installer
                .install(&manifest, &input.key_pair, &input.installer_state)?;

        Ok(DeployOutput {
            ssl_key_pair: properties.ssl_key_pair,
            credentials: properties.credentials,
            installer_state,
        })
    }
}
