// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{InterfaceState, InterfaceType, IpConf};

/// A single network interface of the state document.
///
/// Only `name` is mandatory. Undefined properties mean "unspecified" and are
/// inherited from the current state during merge; properties this crate does
/// not interpret (e.g. `mtu`, `description`, apply-layer metadata) ride along
/// verbatim in the flattened remainder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct Iface {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub iface_type: Option<InterfaceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<InterfaceState>,
    /// MAC address in the format: hex string separated by `:` on every two
    /// characters. Case insensitive on input, canonical form is upper case.
    /// Serialize to `mac-address`, deserialize from `mac-address` or `mac`.
    #[serde(skip_serializing_if = "Option::is_none", alias = "mac")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<IpConf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<IpConf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethernet: Option<EthernetConf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_aggregation: Option<LinkAggConf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge: Option<BridgeConf>,
    /// Properties not interpreted by this crate, preserved verbatim.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Iface {
    /// Minimal interface entry holding only a name, the stub used to request
    /// re-application of an interface profile.
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn is_absent(&self) -> bool {
        self.state == Some(InterfaceState::Absent)
    }

    pub fn is_down(&self) -> bool {
        self.state == Some(InterfaceState::Down)
    }

    pub fn is_virtual(&self) -> bool {
        self.iface_type.as_ref().map(|t| t.is_virtual()) == Some(true)
    }

    /// Drop internal bookkeeping properties written by the apply layer,
    /// identified by their `_` prefix (e.g. `_master`, `_master_type`,
    /// `_brport_options`).
    pub(crate) fn remove_metadata(&mut self) {
        self.other.retain(|key, _| !key.starts_with('_'));
    }
}

/// Ethernet link settings.
///
/// Unset properties serialize as explicit `null` rather than being omitted:
/// the current state reports these from the device, not from configuration,
/// and an explicit `null` keeps the merge from inheriting them so that
/// "unspecified" remains distinguishable from "same as current".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct EthernetConf {
    /// Serialize and deserialize to/from `auto-negotiation`.
    #[serde(rename = "auto-negotiation", default)]
    pub auto_neg: Option<bool>,
    #[serde(default)]
    pub speed: Option<u32>,
    #[serde(default)]
    pub duplex: Option<EthernetDuplex>,
}

impl EthernetConf {
    pub(crate) fn is_unspecified(&self) -> bool {
        self.auto_neg.is_none()
            && self.speed.is_none()
            && self.duplex.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum EthernetDuplex {
    /// Deserialize and serialize from/to `full`.
    Full,
    /// Deserialize and serialize from/to `half`.
    Half,
}

/// Bond configuration, the `link-aggregation` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct LinkAggConf {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Port interface names. Canonical order is lexical.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slaves: Option<Vec<String>>,
    /// Bond options, preserved verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

/// Bridge configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct BridgeConf {
    /// Bridge ports. Canonical order is by port name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<Vec<BridgePortConf>>,
    /// Bridge options, preserved verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct BridgePortConf {
    pub name: String,
    /// Port properties not interpreted by this crate, preserved verbatim.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
