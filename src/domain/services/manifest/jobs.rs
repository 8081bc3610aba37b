//! Job builder
//!
//! Describes the single director job and owns the internal credentials: any
//! secret missing from the properties is generated here, exactly once, and
//! secrets already present are carried forward untouched.

use crate::domain::entities::manifest::{
    AgentProperties, BlobstoreProperties, DirectorProperties, DirectorSsl,
    HealthMonitorProperties, HttpCredentials, Job, JobNetwork, JobProperties, LocalUser,
    LocalUsers, NatsProperties, PostgresProperties, RedisProperties, RegistryProperties, Template,
    UserCredentials, UserManagement,
};
use crate::domain::ports::SecretGenerator;
use crate::domain::value_objects::ManifestProperties;
use crate::error::ManifestBuildError;

use super::cloud_provider::{aws_properties, ntp_servers, CPI_JOB};
use super::disk_pools::DISK_POOL;
use super::networks::{DIRECTOR_IP, PRIVATE_NETWORK, PUBLIC_NETWORK};
use super::releases::{CPI_RELEASE, DIRECTOR_RELEASE};
use super::resource_pools::RESOURCE_POOL;

pub const DIRECTOR_JOB: &str = "bosh";
pub const DIRECTOR_NAME: &str = "my-bosh";
/// Director user the health monitor logs in as
pub const HEALTH_MONITOR_USER: &str = "hm";

const LOCALHOST: &str = "127.0.0.1";
const REGISTRY_PORT: u16 = 25777;
const BLOBSTORE_PORT: u16 = 25250;

pub fn build(
    properties: ManifestProperties,
    secrets: &dyn SecretGenerator,
) -> Result<(Vec<Job>, ManifestProperties), ManifestBuildError> {
    let (credentials, _) = properties
        .credentials
        .clone()
        .fill_missing(|| secrets.generate())
        .map_err(ManifestBuildError::Credentials)?;
    let properties = properties.with_credentials(credentials);

    let job = Job {
        name: DIRECTOR_JOB.to_string(),
        instances: 1,
        templates: templates(),
        resource_pool: RESOURCE_POOL.to_string(),
        persistent_disk_pool: DISK_POOL.to_string(),
        networks: vec![
            JobNetwork {
                name: PRIVATE_NETWORK.to_string(),
                static_ips: vec![DIRECTOR_IP.to_string()],
                default: vec!["dns".to_string(), "gateway".to_string()],
            },
            JobNetwork {
                name: PUBLIC_NETWORK.to_string(),
                static_ips: vec![properties.elastic_ip.clone()],
                default: Vec::new(),
            },
        ],
        properties: job_properties(&properties),
    };

    Ok((vec![job], properties))
}

fn templates() -> Vec<Template> {
    [
        ("nats", DIRECTOR_RELEASE),
        ("redis", DIRECTOR_RELEASE),
        ("postgres", DIRECTOR_RELEASE),
        ("blobstore", DIRECTOR_RELEASE),
        ("director", DIRECTOR_RELEASE),
        ("health_monitor", DIRECTOR_RELEASE),
        ("registry", DIRECTOR_RELEASE),
        (CPI_JOB, CPI_RELEASE),
    ]
    .into_iter()
    .map(|(name, release)| Template::new(name, release))
    .collect()
}

fn job_properties(properties: &ManifestProperties) -> JobProperties {
    let creds = &properties.credentials;
    let postgres = PostgresProperties {
        listen_address: LOCALHOST.to_string(),
        host: LOCALHOST.to_string(),
        user: "postgres".to_string(),
        password: creds.postgres.clone(),
        database: "bosh".to_string(),
        adapter: "postgres".to_string(),
    };

    JobProperties {
        nats: NatsProperties {
            address: LOCALHOST.to_string(),
            user: "nats".to_string(),
            password: creds.nats.clone(),
        },
        redis: RedisProperties {
            listen_address: LOCALHOST.to_string(),
            address: LOCALHOST.to_string(),
            password: creds.redis.clone(),
        },
        postgres: postgres.clone(),
        registry: RegistryProperties {
            address: DIRECTOR_IP.to_string(),
            host: DIRECTOR_IP.to_string(),
            db: postgres.clone(),
            http: HttpCredentials {
                user: "admin".to_string(),
                password: creds.registry.clone(),
                port: REGISTRY_PORT,
            },
            username: "admin".to_string(),
            password: creds.registry.clone(),
            port: REGISTRY_PORT,
        },
        blobstore: BlobstoreProperties {
            address: DIRECTOR_IP.to_string(),
            port: BLOBSTORE_PORT,
            provider: "dav".to_string(),
            director: UserCredentials {
                user: "director".to_string(),
                password: creds.blobstore_director.clone(),
            },
            agent: UserCredentials {
                user: "agent".to_string(),
                password: creds.blobstore_agent.clone(),
            },
        },
        director: DirectorProperties {
            address: LOCALHOST.to_string(),
            name: DIRECTOR_NAME.to_string(),
            db: postgres,
            cpi_job: CPI_JOB.to_string(),
            max_threads: 10,
            user_management: UserManagement {
                provider: "local".to_string(),
                local: LocalUsers {
                    users: vec![
                        LocalUser {
                            name: properties.director_username.clone(),
                            password: properties.director_password.clone(),
                        },
                        LocalUser {
                            name: HEALTH_MONITOR_USER.to_string(),
                            password: creds.health_monitor.clone(),
                        },
                    ],
                },
            },
            ssl: DirectorSsl {
                cert: properties.ssl_key_pair.certificate.clone(),
                key: properties.ssl_key_pair.private_key.clone(),
            },
        },
        hm: HealthMonitorProperties {
            director_account: UserCredentials {
                user: HEALTH_MONITOR_USER.to_string(),
                password: creds.health_monitor.clone(),
            },
            resurrector_enabled: true,
        },
        aws: aws_properties(properties),
        agent: AgentProperties {
            mbus: format!("nats://nats:{}@{DIRECTOR_IP}:4222", creds.nats),
        },
        ntp: ntp_servers(),
    }
}
