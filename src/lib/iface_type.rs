// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[non_exhaustive]
#[serde(rename_all = "kebab-case")]
/// Interface type
pub enum InterfaceType {
    /// Bond interface.
    /// Deserialize and serialize from/to 'bond'.
    Bond,
    /// Bridge provided by Linux kernel.
    /// Deserialize and serialize from/to 'linux-bridge'.
    LinuxBridge,
    /// Dummy interface.
    /// Deserialize and serialize from/to 'dummy'.
    Dummy,
    /// Ethernet interface.
    /// Deserialize and serialize from/to 'ethernet'.
    Ethernet,
    /// Loopback interface.
    /// Deserialize and serialize from/to 'loopback'.
    Loopback,
    /// OpenvSwitch bridge.
    /// Deserialize and serialize from/to 'ovs-bridge'.
    OvsBridge,
    /// OpenvSwitch system interface.
    /// Deserialize and serialize from/to 'ovs-interface'.
    OvsInterface,
    /// Virtual ethernet provided by Linux kernel.
    /// Deserialize and serialize from/to 'veth'.
    Veth,
    /// VLAN interface.
    /// Deserialize and serialize from/to 'vlan'.
    Vlan,
    /// VxLAN interface.
    /// Deserialize and serialize from/to 'vxlan'.
    Vxlan,
    /// Interface type unknown to this crate, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}

impl Default for InterfaceType {
    fn default() -> Self {
        Self::Unknown("unknown".to_string())
    }
}

impl std::fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bond => write!(f, "bond"),
            Self::LinuxBridge => write!(f, "linux-bridge"),
            Self::Dummy => write!(f, "dummy"),
            Self::Ethernet => write!(f, "ethernet"),
            Self::Loopback => write!(f, "loopback"),
            Self::OvsBridge => write!(f, "ovs-bridge"),
            Self::OvsInterface => write!(f, "ovs-interface"),
            Self::Veth => write!(f, "veth"),
            Self::Vlan => write!(f, "vlan"),
            Self::Vxlan => write!(f, "vxlan"),
            Self::Unknown(t) => write!(f, "{t}"),
        }
    }
}

impl InterfaceType {
    pub fn is_unknown(&self) -> bool {
        matches!(self, InterfaceType::Unknown(_))
    }

    /// Whether interface is created by kernel or userspace at runtime
    /// instead of representing a physical device.
    pub fn is_virtual(&self) -> bool {
        matches!(
            self,
            InterfaceType::Bond
                | InterfaceType::Dummy
                | InterfaceType::LinuxBridge
                | InterfaceType::OvsBridge
                | InterfaceType::OvsInterface
                | InterfaceType::Vlan
                | InterfaceType::Vxlan
        )
    }
}
