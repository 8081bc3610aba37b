//! Stack Entity
//!
//! The provisioned infrastructure stack, reduced to the outputs the director
//! deploy needs.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    pub name: String,
    pub outputs: StackOutputs,
}

/// Typed view of the stack outputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackOutputs {
    pub subnet_id: String,
    pub availability_zone: String,
    pub elastic_ip: String,
    pub security_group: String,
}

impl StackOutputs {
    pub const SUBNET: &'static str = "BOSHSubnet";
    pub const AVAILABILITY_ZONE: &'static str = "BOSHSubnetAZ";
    pub const ELASTIC_IP: &'static str = "BOSHEIP";
    pub const SECURITY_GROUP: &'static str = "BOSHSecurityGroup";

    /// Output keys every stack must expose
    pub const REQUIRED: [&'static str; 4] = [
        Self::SUBNET,
        Self::AVAILABILITY_ZONE,
        Self::ELASTIC_IP,
        Self::SECURITY_GROUP,
    ];

    /// Read the typed outputs, naming the first missing or blank key on failure
    pub fn from_map(outputs: &BTreeMap<String, String>) -> Result<Self, &'static str> {
        let get = |key: &'static str| {
            outputs
                .get(key)
                .filter(|v| !v.trim().is_empty())
                .cloned()
                .ok_or(key)
        };

        Ok(Self {
            subnet_id: get(Self::SUBNET)?,
            availability_zone: get(Self::AVAILABILITY_ZONE)?,
            elastic_ip: get(Self::ELASTIC_IP)?,
            security_group: get(Self::SECURITY_GROUP)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_outputs() -> BTreeMap<String, String> {
        [
            ("BOSHSubnet", "subnet-1"),
            ("BOSHSubnetAZ", "us-east-1a"),
            ("BOSHEIP", "1.2.3.4"),
            ("BOSHSecurityGroup", "sg-1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn from_map_reads_all_outputs() {
        let outputs = StackOutputs::from_map(&full_outputs()).unwrap();
        assert_eq!(outputs.elastic_ip, "1.2.3.4");
        assert_eq!(outputs.availability_zone, "us-east-1a");
    }

    #[test]
    fn from_map_names_missing_output() {
        let mut map = full_outputs();
        map.remove("BOSHEIP");
        assert_eq!(StackOutputs::from_map(&map), Err("BOSHEIP"));
    }

    #[test]
    fn blank_output_counts_as_missing() {
        let mut map = full_outputs();
        map.insert("BOSHSecurityGroup".into(), "  ".into());
        assert_eq!(StackOutputs::from_map(&map), Err("BOSHSecurityGroup"));
    }
}
