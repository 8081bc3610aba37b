//! Local simulated cloud
//!
//! Keeps stacks and key pairs in a JSON document per region under a root
//! directory. Stack operations settle immediately; resource identifiers are
//! derived from the region and stack name so they stay stable across updates.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::entities::StackOutputs;
use crate::domain::ports::{
    ClientFactory, CloudClients, CloudConfig, CloudError, ComputeClient, StackClient,
    StackDescription, StackStatus, StackTemplate, StackUpdate,
};
use crate::domain::value_objects::Fingerprint;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RegionStore {
    #[serde(default)]
    stacks: BTreeMap<String, StoredStack>,
    #[serde(default)]
    key_pairs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredStack {
    fingerprint: String,
    parameters: BTreeMap<String, String>,
    outputs: BTreeMap<String, String>,
}

/// One region's store file
#[derive(Debug, Clone)]
struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    fn new(root: &Path, region: &str) -> Self {
        Self {
            path: root.join(format!("{region}.json")),
        }
    }

    fn load(&self, operation: &'static str) -> Result<RegionStore, CloudError> {
        if !self.path.exists() {
            return Ok(RegionStore::default());
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| CloudError::request(operation, e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| {
            CloudError::request(
                operation,
                format!("corrupted store {}: {e}", self.path.display()),
            )
        })
    }

    /// Read-modify-write under an exclusive lock
    fn update<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut RegionStore) -> Result<T, CloudError>,
    ) -> Result<T, CloudError> {
        let io = |e: std::io::Error| CloudError::request(operation, e.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io)?;
        }
        let lock_file = fs::File::create(self.path.with_extension("lock")).map_err(io)?;
        lock_file.lock_exclusive().map_err(io)?;

        let result = self.load(operation).and_then(|mut store| {
            let value = f(&mut store)?;
            let content = serde_json::to_string_pretty(&store)
                .map_err(|e| CloudError::request(operation, e.to_string()))?;
            fs::write(&self.path, content).map_err(io)?;
            Ok(value)
        });

        let _ = lock_file.unlock();
        result
    }
}

/// Builds local clients rooted at the endpoint override, or at a default root
pub struct LocalCloudFactory {
    default_root: PathBuf,
}

impl LocalCloudFactory {
    pub fn new(default_root: impl Into<PathBuf>) -> Self {
        Self {
            default_root: default_root.into(),
        }
    }

    fn root(&self, config: &CloudConfig) -> PathBuf {
        match config.endpoint_override.as_deref() {
            Some(endpoint) if !endpoint.is_empty() => PathBuf::from(endpoint),
            _ => self.default_root.clone(),
        }
    }
}

impl ClientFactory for LocalCloudFactory {
    fn connect(&self, config: &CloudConfig) -> Result<CloudClients, CloudError> {
        if config.access_key_id.trim().is_empty() {
            return Err(CloudError::InvalidConfig(
                "access key id is required".to_string(),
            ));
        }
        if config.secret_access_key.trim().is_empty() {
            return Err(CloudError::InvalidConfig(
                "secret access key is required".to_string(),
            ));
        }
        validate_region(&config.region)?;

        let root = self.root(config);
        if root.exists() && !root.is_dir() {
            return Err(CloudError::InvalidConfig(format!(
                "endpoint {} is not a directory",
                root.display()
            )));
        }

        let store = StoreFile::new(&root, &config.region);
        Ok(CloudClients {
            stacks: Box::new(LocalStackClient {
                store: store.clone(),
                region: config.region.clone(),
            }),
            compute: Box::new(LocalComputeClient { store }),
        })
    }
}

fn validate_region(region: &str) -> Result<(), CloudError> {
    if region.is_empty() {
        return Err(CloudError::InvalidConfig("region is required".to_string()));
    }
    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CloudError::InvalidConfig(format!(
            "invalid region '{region}'"
        )));
    }
    Ok(())
}

pub struct LocalStackClient {
    store: StoreFile,
    region: String,
}

impl LocalStackClient {
    fn outputs(&self, name: &str) -> BTreeMap<String, String> {
        let seed = format!("{}/{}", self.region, name);
        let eip = Sha256::digest(format!("{seed}/eip").as_bytes());

        [
            (
                StackOutputs::SUBNET,
                resource_id("subnet", &format!("{seed}/subnet")),
            ),
            (StackOutputs::AVAILABILITY_ZONE, format!("{}a", self.region)),
            (
                StackOutputs::ELASTIC_IP,
                format!("52.{}.{}.{}", eip[0], eip[1], eip[2] % 254 + 1),
            ),
            (
                StackOutputs::SECURITY_GROUP,
                resource_id("sg", &format!("{seed}/sg")),
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }
}

fn resource_id(prefix: &str, seed: &str) -> String {
    format!("{prefix}-{}", Fingerprint::of(seed).short(8))
}

/// Reject bodies that are not JSON objects or leave a declared parameter unset
fn validate_template(
    operation: &'static str,
    template: &StackTemplate,
) -> Result<(), CloudError> {
    let body: serde_json::Value = serde_json::from_str(&template.body)
        .map_err(|e| CloudError::request(operation, format!("template is not valid JSON: {e}")))?;
    let declared = body
        .get("Parameters")
        .and_then(|p| p.as_object())
        .map(|p| p.keys().cloned().collect::<Vec<_>>())
        .unwrap_or_default();

    for key in declared {
        if template
            .parameters
            .get(&key)
            .map_or(true, |v| v.is_empty())
        {
            return Err(CloudError::request(
                operation,
                format!("parameter '{key}' must have a value"),
            ));
        }
    }
    Ok(())
}

impl StackClient for LocalStackClient {
    fn describe_stack(&self, name: &str) -> Result<Option<StackDescription>, CloudError> {
        let store = self.store.load("DescribeStacks")?;
        Ok(store.stacks.get(name).map(|s| StackDescription {
            name: name.to_string(),
            status: StackStatus::Complete,
            outputs: s.outputs.clone(),
        }))
    }

    fn create_stack(&self, name: &str, template: &StackTemplate) -> Result<(), CloudError> {
        const OP: &str = "CreateStack";
        validate_template(OP, template)?;
        let outputs = self.outputs(name);

        self.store.update(OP, |store| {
            if store.stacks.contains_key(name) {
                return Err(CloudError::request(
                    OP,
                    format!("stack '{name}' already exists"),
                ));
            }
            store.stacks.insert(
                name.to_string(),
                StoredStack {
                    fingerprint: template.fingerprint().to_string(),
                    parameters: template.parameters.clone(),
                    outputs,
                },
            );
            Ok(())
        })
    }

    fn update_stack(
        &self,
        name: &str,
        template: &StackTemplate,
    ) -> Result<StackUpdate, CloudError> {
        const OP: &str = "UpdateStack";
        validate_template(OP, template)?;
        let fingerprint = template.fingerprint().to_string();

        self.store.update(OP, |store| {
            let stack = store.stacks.get_mut(name).ok_or_else(|| {
                CloudError::request(OP, format!("stack '{name}' does not exist"))
            })?;
            if stack.fingerprint == fingerprint {
                return Ok(StackUpdate::NoChanges);
            }
            stack.fingerprint = fingerprint;
            stack.parameters = template.parameters.clone();
            Ok(StackUpdate::Updated)
        })
    }
}

pub struct LocalComputeClient {
    store: StoreFile,
}

impl ComputeClient for LocalComputeClient {
    fn describe_key_pair(&self, name: &str) -> Result<Option<String>, CloudError> {
        let store = self.store.load("DescribeKeyPairs")?;
        Ok(store.key_pairs.get(name).cloned())
    }

    fn import_key_pair(&self, name: &str, public_key: &str) -> Result<(), CloudError> {
        const OP: &str = "ImportKeyPair";
        if public_key.trim().is_empty() {
            return Err(CloudError::request(OP, "public key material is empty"));
        }

        self.store.update(OP, |store| {
            if store.key_pairs.contains_key(name) {
                return Err(CloudError::request(
                    OP,
                    format!("key pair '{name}' already exists"),
                ));
            }
            store
                .key_pairs
                .insert(name.to_string(), public_key.to_string());
            Ok(())
        })
    }
}
