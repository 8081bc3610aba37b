//! Resource pool builder

use crate::domain::entities::manifest::{
    EphemeralDisk, ResourcePool, ResourcePoolCloudProperties, Stemcell,
};
use crate::domain::value_objects::ManifestProperties;

use super::networks::PRIVATE_NETWORK;

pub const RESOURCE_POOL: &str = "vms";

const STEMCELL_URL: &str =
    "https://bosh.io/d/stemcells/bosh-aws-xen-hvm-ubuntu-trusty-go_agent?v=3012";
const INSTANCE_TYPE: &str = "m3.xlarge";
const EPHEMERAL_DISK_MB: u32 = 25_000;

pub fn build(properties: &ManifestProperties) -> Vec<ResourcePool> {
    vec![ResourcePool {
        name: RESOURCE_POOL.to_string(),
        network: PRIVATE_NETWORK.to_string(),
        stemcell: Stemcell {
            url: STEMCELL_URL.to_string(),
            sha1: None,
        },
        cloud_properties: ResourcePoolCloudProperties {
            instance_type: INSTANCE_TYPE.to_string(),
            ephemeral_disk: EphemeralDisk {
                size: EPHEMERAL_DISK_MB,
                disk_type: "gp2".to_string(),
            },
            availability_zone: properties.availability_zone.clone(),
        },
    }]
}
