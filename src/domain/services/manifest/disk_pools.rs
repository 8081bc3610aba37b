//! Disk pool builder

use crate::domain::entities::manifest::{DiskPool, DiskPoolCloudProperties};

pub const DISK_POOL: &str = "disks";

const DISK_SIZE_MB: u32 = 80_000;

pub fn build() -> Vec<DiskPool> {
    vec![DiskPool {
        name: DISK_POOL.to_string(),
        disk_size: DISK_SIZE_MB,
        cloud_properties: DiskPoolCloudProperties {
            disk_type: "gp2".to_string(),
        },
    }]
}
