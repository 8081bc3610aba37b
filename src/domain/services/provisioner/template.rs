//! Stack template
//!
//! The fixed topology the director lives in: one VPC with a public subnet,
//! an internet gateway, a security group for SSH, the agent and the director
//! API, and an elastic IP for the director VM.

use serde_json::json;

use crate::domain::ports::StackTemplate;
use crate::domain::services::manifest::networks::{SUBNET_RANGE, VPC_RANGE};
use crate::error::ProvisioningError;

/// Template parameter carrying the access key pair name
pub const KEY_PAIR_PARAMETER: &str = "SSHKeyPairName";

/// Ports opened to the world: SSH, agent mbus, director API
pub const INGRESS_PORTS: [u16; 3] = [22, 6868, 25555];

pub fn render(key_pair_name: &str) -> Result<StackTemplate, ProvisioningError> {
    let ingress: Vec<_> = INGRESS_PORTS
        .iter()
        .map(|port| {
            json!({
                "IpProtocol": "tcp",
                "FromPort": port.to_string(),
                "ToPort": port.to_string(),
                "CidrIp": "0.0.0.0/0"
            })
        })
        .chain(std::iter::once(json!({
            "IpProtocol": "-1",
            "FromPort": "0",
            "ToPort": "65535",
            "CidrIp": VPC_RANGE
        })))
        .collect();

    let document = json!({
        "AWSTemplateFormatVersion": "2010-09-09",
        "Description": "Infrastructure for a BOSH director",
        "Parameters": {
            "SSHKeyPairName": {
                "Type": "AWS::EC2::KeyPair::KeyName",
                "Description": "SSH key pair used to reach the director VM"
            }
        },
        "Resources": {
            "VPC": {
                "Type": "AWS::EC2::VPC",
                "Properties": { "CidrBlock": VPC_RANGE }
            },
            "VPCGatewayInternetGateway": { "Type": "AWS::EC2::InternetGateway" },
            "VPCGatewayAttachment": {
                "Type": "AWS::EC2::VPCGatewayAttachment",
                "Properties": {
                    "VpcId": { "Ref": "VPC" },
                    "InternetGatewayId": { "Ref": "VPCGatewayInternetGateway" }
                }
            },
            "BOSHSubnet": {
                "Type": "AWS::EC2::Subnet",
                "Properties": {
                    "VpcId": { "Ref": "VPC" },
                    "CidrBlock": SUBNET_RANGE
                }
            },
            "BOSHRouteTable": {
                "Type": "AWS::EC2::RouteTable",
                "Properties": { "VpcId": { "Ref": "VPC" } }
            },
            "BOSHRoute": {
                "Type": "AWS::EC2::Route",
                "DependsOn": "VPCGatewayAttachment",
                "Properties": {
                    "DestinationCidrBlock": "0.0.0.0/0",
                    "GatewayId": { "Ref": "VPCGatewayInternetGateway" },
                    "RouteTableId": { "Ref": "BOSHRouteTable" }
                }
            },
            "BOSHSubnetRouteTableAssociation": {
                "Type": "AWS::EC2::SubnetRouteTableAssociation",
                "Properties": {
                    "RouteTableId": { "Ref": "BOSHRouteTable" },
                    "SubnetId": { "Ref": "BOSHSubnet" }
                }
            },
            "BOSHSecurityGroup": {
                "Type": "AWS::EC2::SecurityGroup",
                "Properties": {
                    "VpcId": { "Ref": "VPC" },
                    "GroupDescription": "BOSH director",
                    "SecurityGroupIngress": ingress
                }
            },
            "BOSHEIP": {
                "Type": "AWS::EC2::EIP",
                "DependsOn": "VPCGatewayAttachment",
                "Properties": { "Domain": "vpc" }
            }
        },
        "Outputs": {
            "BOSHSubnet": { "Value": { "Ref": "BOSHSubnet" } },
            "BOSHSubnetAZ": {
                "Value": { "Fn::GetAtt": ["BOSHSubnet", "AvailabilityZone"] }
            },
            "BOSHEIP": { "Value": { "Ref": "BOSHEIP" } },
            "BOSHSecurityGroup": { "Value": { "Ref": "BOSHSecurityGroup" } }
        }
    });

    let body = serde_json::to_string_pretty(&document)
        .map_err(|e| ProvisioningError::Template(e.to_string()))?;

    Ok(StackTemplate {
        body,
        parameters: [(KEY_PAIR_PARAMETER.to_string(), key_pair_name.to_string())]
            .into_iter()
            .collect(),
    })
}
