//! Network builder
//!
//! Also owns the addressing plan shared with the stack template.

use crate::domain::entities::manifest::{Network, Subnet, SubnetCloudProperties};
use crate::domain::value_objects::ManifestProperties;

pub const PRIVATE_NETWORK: &str = "private";
pub const PUBLIC_NETWORK: &str = "public";

pub const VPC_RANGE: &str = "10.0.0.0/16";
pub const SUBNET_RANGE: &str = "10.0.0.0/24";
pub const GATEWAY: &str = "10.0.0.1";
pub const DNS: &str = "10.0.0.2";
/// Static address of the director VM on the private network
pub const DIRECTOR_IP: &str = "10.0.0.6";

pub fn build(properties: &ManifestProperties) -> Vec<Network> {
    vec![
        Network {
            name: PRIVATE_NETWORK.to_string(),
            network_type: "manual".to_string(),
            subnets: vec![Subnet {
                range: SUBNET_RANGE.to_string(),
                gateway: GATEWAY.to_string(),
                dns: vec![DNS.to_string()],
                cloud_properties: SubnetCloudProperties {
                    subnet: properties.subnet_id.clone(),
                },
            }],
        },
        Network {
            name: PUBLIC_NETWORK.to_string(),
            network_type: "vip".to_string(),
            subnets: Vec::new(),
        },
    ]
}
