//! Manifest Entity
//!
//! The deployment descriptor consumed by the director installer. Field names
//! follow the installer's YAML schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub releases: Vec<Release>,
    pub resource_pools: Vec<ResourcePool>,
    pub disk_pools: Vec<DiskPool>,
    pub networks: Vec<Network>,
    pub jobs: Vec<Job>,
    pub cloud_provider: CloudProvider,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    pub name: String,
    pub network: String,
    pub stemcell: Stemcell,
    pub cloud_properties: ResourcePoolCloudProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stemcell {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePoolCloudProperties {
    pub instance_type: String,
    pub ephemeral_disk: EphemeralDisk,
    pub availability_zone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EphemeralDisk {
    pub size: u32,
    #[serde(rename = "type")]
    pub disk_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskPool {
    pub name: String,
    pub disk_size: u32,
    pub cloud_properties: DiskPoolCloudProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskPoolCloudProperties {
    #[serde(rename = "type")]
    pub disk_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    #[serde(rename = "type")]
    pub network_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<Subnet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    pub range: String,
    pub gateway: String,
    pub dns: Vec<String>,
    pub cloud_properties: SubnetCloudProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetCloudProperties {
    pub subnet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub instances: u32,
    pub templates: Vec<Template>,
    pub resource_pool: String,
    pub persistent_disk_pool: String,
    pub networks: Vec<JobNetwork>,
    pub properties: JobProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub release: String,
}

impl Template {
    pub fn new(name: &str, release: &str) -> Self {
        Self {
            name: name.to_string(),
            release: release.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobNetwork {
    pub name: String,
    pub static_ips: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProperties {
    pub nats: NatsProperties,
    pub redis: RedisProperties,
    pub postgres: PostgresProperties,
    pub registry: RegistryProperties,
    pub blobstore: BlobstoreProperties,
    pub director: DirectorProperties,
    pub hm: HealthMonitorProperties,
    pub aws: AwsProperties,
    pub agent: AgentProperties,
    pub ntp: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatsProperties {
    pub address: String,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedisProperties {
    pub listen_address: String,
    pub address: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresProperties {
    pub listen_address: String,
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub adapter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryProperties {
    pub address: String,
    pub host: String,
    pub db: PostgresProperties,
    pub http: HttpCredentials,
    pub username: String,
    pub password: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpCredentials {
    pub user: String,
    pub password: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentials {
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobstoreProperties {
    pub address: String,
    pub port: u16,
    pub provider: String,
    pub director: UserCredentials,
    pub agent: UserCredentials,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorProperties {
    pub address: String,
    pub name: String,
    pub db: PostgresProperties,
    pub cpi_job: String,
    pub max_threads: u32,
    pub user_management: UserManagement,
    pub ssl: DirectorSsl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserManagement {
    pub provider: String,
    pub local: LocalUsers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalUsers {
    pub users: Vec<LocalUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalUser {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorSsl {
    pub cert: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthMonitorProperties {
    pub director_account: UserCredentials,
    pub resurrector_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsProperties {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub default_key_name: String,
    pub default_security_groups: Vec<String>,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProperties {
    pub mbus: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudProvider {
    pub template: Template,
    pub ssh_tunnel: SshTunnel,
    pub mbus: String,
    pub properties: CloudProviderProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshTunnel {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub private_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudProviderProperties {
    pub aws: AwsProperties,
    pub agent: AgentProperties,
    pub blobstore: LocalBlobstore,
    pub ntp: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalBlobstore {
    pub provider: String,
    pub path: String,
}
