// SPDX-License-Identifier: Apache-2.0

use crate::{EthernetConf, InterfaceType, NetworkState};

impl NetworkState {
    /// Update the ethernet interfaces of this (desired) state based on the
    /// current state. Auto-negotiation, speed and duplex settings the user
    /// did not provide must stay explicitly unset instead of inheriting the
    /// values read back from the device, so that a later merge can still
    /// distinguish "unspecified" from "explicitly same as current".
    pub fn sanitize_ethernet(&mut self, current: &Self) {
        for iface in self.ifaces.iter_mut() {
            let cur_type = current
                .ifaces
                .get(iface.name.as_str())
                .and_then(|c| c.iface_type.as_ref());
            if cur_type == Some(&InterfaceType::Ethernet)
                && iface.ethernet.is_none()
            {
                iface.ethernet = Some(EthernetConf::default());
            }
        }
    }

    /// If dynamic IP is enabled and the address list is missing, set an
    /// empty one, so the desired state is not complemented with the current
    /// address values. If dynamic IP is disabled, remove the dynamic-only
    /// options.
    pub fn sanitize_dynamic_ip(&mut self) {
        for iface in self.ifaces.iter_mut() {
            for ip_conf in [iface.ipv4.as_mut(), iface.ipv6.as_mut()]
                .into_iter()
                .flatten()
            {
                if ip_conf.is_dynamic() {
                    ip_conf.addresses = Some(Vec::new());
                } else {
                    ip_conf.auto_routes = None;
                    ip_conf.auto_gateway = None;
                    ip_conf.auto_dns = None;
                }
            }
        }
    }
}
