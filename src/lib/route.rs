// SPDX-License-Identifier: Apache-2.0

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// IP routing status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct Routes {
    /// Static route configuration.
    /// This property is not overriding but adding specified routes to
    /// existing routes. To delete a route entry, set [RouteEntry::state] to
    /// [RouteState::Absent]; any property of an absent route left undefined
    /// acts as a wildcard. For example, this state removes every route next
    /// hopping to interface eth1:
    /// ```yaml
    /// routes:
    ///   config:
    ///   - next-hop-interface: eth1
    ///     state: absent
    /// ```
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Vec<RouteEntry>>,
}

impl Routes {
    /// Whether configured routes are empty or undefined.
    pub fn is_empty(&self) -> bool {
        if let Some(rts) = self.config.as_ref() {
            rts.is_empty()
        } else {
            true
        }
    }

    pub fn config(&self) -> &[RouteEntry] {
        self.config.as_deref().unwrap_or_default()
    }

    pub fn config_mut(&mut self) -> &mut Vec<RouteEntry> {
        self.config.get_or_insert_with(Vec::new)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum RouteState {
    /// Mark a route entry as absent to remove it.
    Absent,
    /// A regular route entry, same as leaving the state undefined.
    Normal,
}

/// Route entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct RouteEntry {
    /// Only used to delete routes when applying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<RouteState>,
    /// Route destination address or network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Route next hop interface name.
    /// Serialize and deserialize to/from `next-hop-interface`.
    /// Required for every concrete route handed to route reconciliation.
    #[serde(
        skip_serializing_if = "Option::is_none",
        rename = "next-hop-interface"
    )]
    pub next_hop_iface: Option<String>,
    /// Route next hop IP address, defaulted to `""`.
    /// Serialize and deserialize to/from `next-hop-address`.
    #[serde(
        skip_serializing_if = "Option::is_none",
        rename = "next-hop-address"
    )]
    pub next_hop_addr: Option<String>,
    /// Route metric. [RouteEntry::USE_DEFAULT_METRIC] means the default
    /// metric of the network backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<i64>,
    /// Route table id. [RouteEntry::USE_DEFAULT_ROUTE_TABLE] means the
    /// default table of the network backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<u32>,
}

impl RouteEntry {
    pub const USE_DEFAULT_METRIC: i64 = -1;
    pub const USE_DEFAULT_ROUTE_TABLE: u32 = 0;

    pub fn is_absent(&self) -> bool {
        self.state == Some(RouteState::Absent)
    }

    /// Fill undefined properties with their defaults. Absent routes keep
    /// their undefined properties as wildcards. Idempotent.
    pub(crate) fn sanitize(&mut self) {
        if !self.is_absent() {
            if self.table_id.is_none() {
                self.table_id = Some(Self::USE_DEFAULT_ROUTE_TABLE);
            }
            if self.metric.is_none() {
                self.metric = Some(Self::USE_DEFAULT_METRIC);
            }
            if self.next_hop_addr.is_none() {
                self.next_hop_addr = Some(String::new());
            }
        }
    }

    /// Whether the reference route (self) matches the other route: every
    /// property the reference defines must hold the same value, undefined
    /// properties match anything. The other route is always a concrete
    /// current route, hence the asymmetry.
    pub(crate) fn is_match(&self, other: &Self) -> bool {
        if self.destination.is_some() && self.destination != other.destination
        {
            return false;
        }
        if self.next_hop_iface.is_some()
            && self.next_hop_iface != other.next_hop_iface
        {
            return false;
        }
        if self.next_hop_addr.is_some()
            && self.next_hop_addr != other.next_hop_addr
        {
            return false;
        }
        if self.metric.is_some() && self.metric != other.metric {
            return false;
        }
        if self.table_id.is_some() && self.table_id != other.table_id {
            return false;
        }
        true
    }

    /// Ordering key for route verification: missing table id sorts first.
    pub(crate) fn sort_key(&self) -> (i64, &str, &str) {
        (
            self.table_id.map(i64::from).unwrap_or(-1),
            self.next_hop_iface.as_deref().unwrap_or(""),
            self.destination.as_deref().unwrap_or(""),
        )
    }
}

// Set membership is keyed by the identity tuple. The record holds exactly
// these properties, keeping Hash consistent with the derived Eq.
impl Hash for RouteEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (
            self.state,
            self.table_id,
            self.destination.as_deref(),
            self.next_hop_iface.as_deref(),
            self.next_hop_addr.as_deref(),
            self.metric,
        )
            .hash(state);
    }
}

impl std::fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => write!(f, "{self:?}"),
        }
    }
}
