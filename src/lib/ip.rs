// SPDX-License-Identifier: Apache-2.0

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// IP configuration of a single address family.
/// The same layout serves both `ipv4` and `ipv6` sections, example YAML:
/// ```yaml
/// ipv4:
///   enabled: true
///   dhcp: false
///   address:
///   - ip: 192.0.2.251
///     prefix-length: 24
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct IpConf {
    /// Whether the IP stack of this family is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Whether DHCP is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp: Option<bool>,
    /// Whether IPv6 autoconf via router advertisement is enabled.
    /// Meaningless in a `ipv4` section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoconf: Option<bool>,
    /// Static IP addresses, ordered.
    /// Serialize and deserialize to/from `address`.
    #[serde(skip_serializing_if = "Option::is_none", rename = "address")]
    pub addresses: Option<Vec<IpAddrEntry>>,
    /// Whether routes from dynamic addressing apply. Only meaningful when
    /// dynamic IP is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_routes: Option<bool>,
    /// Whether the gateway from dynamic addressing applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_gateway: Option<bool>,
    /// Whether DNS from dynamic addressing applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_dns: Option<bool>,
}

impl IpConf {
    pub fn is_enabled(&self) -> bool {
        self.enabled == Some(true)
    }

    /// Whether dynamic addressing (DHCP or autoconf) is requested.
    pub fn is_dynamic(&self) -> bool {
        self.is_enabled()
            && (self.dhcp == Some(true) || self.autoconf == Some(true))
    }
}

/// IP address with prefix length.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct IpAddrEntry {
    /// IP address.
    pub ip: IpAddr,
    /// Prefix length.
    /// Serialize and deserialize to/from `prefix-length`.
    pub prefix_length: u8,
}

impl IpAddrEntry {
    pub fn new(ip: IpAddr, prefix_length: u8) -> Self {
        Self { ip, prefix_length }
    }

    /// Whether this is a kernel assigned IPv6 link-local address
    /// (fe80::/10).
    pub(crate) fn is_ipv6_link_local(&self) -> bool {
        if let IpAddr::V6(ip) = self.ip {
            (ip.segments()[0] & 0xffc0) == 0xfe80
        } else {
            false
        }
    }
}

impl std::fmt::Display for IpAddrEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.ip, self.prefix_length)
    }
}

pub(crate) fn is_ipv6_addr(addr: &str) -> bool {
    addr.contains(':')
}
