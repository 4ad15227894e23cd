// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use crate::{
    ip::is_ipv6_addr, prettystate::format_desired_current_state_diff,
    value::get_json_value_difference, ErrorKind, NetstateError, NetworkState,
    RouteEntry,
};

impl NetworkState {
    /// Verify that this (desired) state is a subset of the other (current)
    /// state: every interface the desired state mentions must exist in the
    /// current state and, after filling the unspecified properties from the
    /// current state and normalizing both sides, must be structurally equal
    /// to it.
    ///
    /// Both states are mutated in place: absent interfaces and down virtual
    /// interfaces are not expected to show up in the current state and are
    /// removed from the desired side first.
    pub fn verify_interfaces(
        &mut self,
        other: &mut Self,
    ) -> Result<(), NetstateError> {
        self.remove_absent_ifaces();
        self.remove_down_virt_ifaces();

        self.assert_ifaces_included_in(other)?;

        self.remove_ifaces_metadata();
        other.sanitize_dynamic_ip();

        self.merge_interfaces(other)?;

        self.normalize_for_verification();
        other.normalize_for_verification();

        self.assert_ifaces_equal(other)
    }

    /// Verify that this (desired) state and the other (current) state hold
    /// identical routes for every interface the desired state routes
    /// through.
    pub fn verify_routes(
        &mut self,
        other: &mut Self,
    ) -> Result<(), NetstateError> {
        self.clean_routes();
        other.clean_routes();

        let other_iface_routes = other.iface_routes();
        let iface_routes = self.iface_routes();
        let mut iface_names: Vec<&&str> = iface_routes.keys().collect();
        iface_names.sort_unstable();
        for iface_name in iface_names {
            let mut routes: Vec<&RouteEntry> =
                iface_routes[iface_name].clone();
            routes.sort_unstable_by(|a, b| a.sort_key().cmp(&b.sort_key()));
            let mut other_routes: Vec<&RouteEntry> = other_iface_routes
                .get(iface_name)
                .cloned()
                .unwrap_or_default();
            other_routes
                .sort_unstable_by(|a, b| a.sort_key().cmp(&b.sort_key()));
            if routes != other_routes {
                return Err(NetstateError::new(
                    ErrorKind::VerificationError,
                    format!(
                        "Routes of interface {iface_name} do not match: {}",
                        format_desired_current_state_diff(
                            &routes,
                            &other_routes
                        )
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Remove route entries that cannot be valid in this state:
    ///  * routes next hopping to a down or absent interface
    ///  * routes next hopping to an interface the state does not hold
    ///  * routes whose destination IP family is disabled on the interface
    pub(crate) fn clean_routes(&mut self) {
        let mut down_ifaces: HashSet<&str> = HashSet::new();
        let mut iface_names: HashSet<&str> = HashSet::new();
        let mut ipv4_off_ifaces: HashSet<&str> = HashSet::new();
        let mut ipv6_off_ifaces: HashSet<&str> = HashSet::new();
        for iface in self.ifaces.iter() {
            let name = iface.name.as_str();
            iface_names.insert(name);
            if iface.is_down() || iface.is_absent() {
                down_ifaces.insert(name);
            }
            if iface.ipv4.as_ref().map(|ip| ip.is_enabled()) != Some(true) {
                ipv4_off_ifaces.insert(name);
            }
            if iface.ipv6.as_ref().map(|ip| ip.is_enabled()) != Some(true) {
                ipv6_off_ifaces.insert(name);
            }
        }

        let Some(routes) = self.routes.config.as_mut() else {
            return;
        };
        routes.retain(|rt| {
            // Routes without a next hop interface are not reachable through
            // the interface index and are left as is.
            let via = match rt.next_hop_iface.as_deref() {
                Some(v) => v,
                None => return true,
            };
            if down_ifaces.contains(via) {
                log::info!(
                    "Removing route {rt} next hop to interface {via} which \
                     is in down or absent state"
                );
                return false;
            }
            if !iface_names.contains(via) {
                log::info!(
                    "Removing route {rt} next hop to interface {via} which \
                     does not exist"
                );
                return false;
            }
            if let Some(dst) = rt.destination.as_deref() {
                if is_ipv6_addr(dst) {
                    if ipv6_off_ifaces.contains(via) {
                        log::info!(
                            "Removing route {rt} next hop to interface \
                             {via} which has IPv6 disabled"
                        );
                        return false;
                    }
                } else if ipv4_off_ifaces.contains(via) {
                    log::info!(
                        "Removing route {rt} next hop to interface {via} \
                         which has IPv4 disabled"
                    );
                    return false;
                }
            }
            true
        });
    }

    fn assert_ifaces_included_in(
        &self,
        current: &Self,
    ) -> Result<(), NetstateError> {
        let desired_names: HashSet<&str> =
            self.ifaces.iter().map(|i| i.name.as_str()).collect();
        let current_names: HashSet<&str> =
            current.ifaces.iter().map(|i| i.name.as_str()).collect();
        if !desired_names.is_subset(&current_names) {
            return Err(NetstateError::new(
                ErrorKind::VerificationError,
                format!(
                    "Desired state contains interfaces missing from the \
                     current state: {}",
                    format_desired_current_state_diff(
                        &self.ifaces,
                        &current.ifaces
                    )
                ),
            ));
        }
        Ok(())
    }

    fn assert_ifaces_equal(
        &self,
        current: &Self,
    ) -> Result<(), NetstateError> {
        for iface_name in self.ifaces.names() {
            let Some(des_iface) = self.ifaces.get(iface_name) else {
                continue;
            };
            let Some(cur_iface) = current.ifaces.get(iface_name) else {
                continue;
            };
            if des_iface == cur_iface {
                continue;
            }
            let des_value = serde_json::to_value(des_iface)?;
            let cur_value = serde_json::to_value(cur_iface)?;
            let difference = get_json_value_difference(
                format!("{iface_name}.interface"),
                &des_value,
                &cur_value,
            )
            .map(|(reference, desire, current)| {
                format!("{reference} desire '{desire}', current '{current}'")
            })
            .unwrap_or_else(|| "structural mismatch".to_string());
            return Err(NetstateError::new(
                ErrorKind::VerificationError,
                format!(
                    "Verification failure: {difference}{}",
                    format_desired_current_state_diff(des_iface, cur_iface)
                ),
            ));
        }
        Ok(())
    }
}
