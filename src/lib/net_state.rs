// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, Interfaces, NetstateError, RouteEntry, Routes};

/// The state of a network node: interfaces indexed by name, routes, and the
/// remaining document sections (route rules, DNS, capabilities) preserved
/// verbatim.
///
/// Every instance owns its data: construction deep copies the input
/// document, and no sub-tree is shared between instances. Instances move
/// through an implicit pipeline raw -> sanitized -> merged -> normalized ->
/// verified; callers apply the stages in that order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct NetworkState {
    /// Network interfaces.
    /// Serialized as a list sorted by interface name.
    #[serde(default, rename = "interfaces")]
    pub ifaces: Interfaces,
    /// Routes.
    #[serde(default, skip_serializing_if = "Routes::is_empty")]
    pub routes: Routes,
    /// Routing rules, preserved verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_rules: Option<serde_json::Value>,
    /// DNS client configuration, preserved verbatim.
    #[serde(skip_serializing_if = "Option::is_none", rename = "dns-resolver")]
    pub dns: Option<serde_json::Value>,
    /// Backend capabilities, only present when status data was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
}

impl NetworkState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from a raw document. The document is deep copied; a
    /// malformed document (e.g. an interface entry without `name`) fails
    /// with [ErrorKind::InvalidArgument].
    pub fn new_from_value(
        doc: serde_json::Value,
    ) -> Result<Self, NetstateError> {
        match serde_json::from_value(doc) {
            Ok(s) => Ok(s),
            Err(e) => Err(NetstateError::new(
                ErrorKind::InvalidArgument,
                format!("Invalid state document: {e}"),
            )),
        }
    }

    /// Wrapping function of [serde_yaml::from_str()] with error mapped to
    /// [NetstateError].
    pub fn new_from_yaml(net_state_yaml: &str) -> Result<Self, NetstateError> {
        match serde_yaml::from_str(net_state_yaml) {
            Ok(s) => Ok(s),
            Err(e) => Err(NetstateError::new(
                ErrorKind::InvalidArgument,
                format!("Invalid YAML string: {e}"),
            )),
        }
    }

    /// Render the document form, interfaces sorted by name.
    pub fn to_value(&self) -> Result<serde_json::Value, NetstateError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Routes grouped by their next hop interface. Routes without
    /// `next-hop-interface` are excluded from the index and thereby from
    /// every interface-indexed operation.
    pub fn iface_routes(&self) -> HashMap<&str, Vec<&RouteEntry>> {
        let mut ret: HashMap<&str, Vec<&RouteEntry>> = HashMap::new();
        for rt in self.routes.config() {
            if let Some(via) = rt.next_hop_iface.as_deref() {
                ret.entry(via).or_default().push(rt);
            }
        }
        ret
    }

    /// New state holding only the named interfaces of this one.
    pub fn filtered_state(&self, iface_names: &[&str]) -> Self {
        let mut ret = Self::new();
        for name in iface_names {
            if let Some(iface) = self.ifaces.get(name) {
                ret.ifaces.push(iface.clone());
            }
        }
        ret
    }
}

impl NetworkState {
    pub(crate) fn remove_absent_ifaces(&mut self) {
        self.ifaces.retain(|iface| !iface.is_absent());
    }

    pub(crate) fn remove_down_virt_ifaces(&mut self) {
        self.ifaces
            .retain(|iface| !(iface.is_down() && iface.is_virtual()));
    }

    pub(crate) fn remove_ifaces_metadata(&mut self) {
        for iface in self.ifaces.iter_mut() {
            iface.remove_metadata();
        }
    }
}

impl std::fmt::Display for NetworkState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => write!(f, "{self:?}"),
        }
    }
}
