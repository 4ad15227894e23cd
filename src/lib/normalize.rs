// SPDX-License-Identifier: Apache-2.0

use crate::NetworkState;

impl NetworkState {
    /// Bring the state to its canonical form so that two states describing
    /// the same configuration compare equal. Idempotent.
    pub fn normalize_for_verification(&mut self) {
        self.clean_sanitize_ethernet();
        self.sort_lag_slaves();
        self.sort_bridge_ports();
        self.canonicalize_ipv6();
        self.remove_iface_ipv6_link_local_addr();
        self.sort_ip_addresses();
        self.capitalize_mac();
    }

    // Drop ethernet sections still fully unset after sanitization, so
    // absent-and-unspecified link settings do not show up as mismatches.
    fn clean_sanitize_ethernet(&mut self) {
        for iface in self.ifaces.iter_mut() {
            if iface.ethernet.as_ref().map(|e| e.is_unspecified())
                == Some(true)
            {
                iface.ethernet = None;
            }
        }
    }

    fn sort_lag_slaves(&mut self) {
        for iface in self.ifaces.iter_mut() {
            if let Some(slaves) = iface
                .link_aggregation
                .as_mut()
                .and_then(|lag| lag.slaves.as_mut())
            {
                slaves.sort_unstable();
            }
        }
    }

    fn sort_bridge_ports(&mut self) {
        for iface in self.ifaces.iter_mut() {
            if let Some(ports) =
                iface.bridge.as_mut().and_then(|br| br.port.as_mut())
            {
                ports.sort_unstable_by(|a, b| a.name.cmp(&b.name));
            }
        }
    }

    // Ensure every interface holds an ipv6 section with `enabled` and
    // `address` defined, defaults `false` and `[]`.
    fn canonicalize_ipv6(&mut self) {
        for iface in self.ifaces.iter_mut() {
            let ipv6 = iface.ipv6.get_or_insert_with(Default::default);
            if ipv6.enabled.is_none() {
                ipv6.enabled = Some(false);
            }
            if ipv6.addresses.is_none() {
                ipv6.addresses = Some(Vec::new());
            }
        }
    }

    // Link-local addresses are kernel assigned, not user configuration.
    fn remove_iface_ipv6_link_local_addr(&mut self) {
        for iface in self.ifaces.iter_mut() {
            if let Some(addrs) =
                iface.ipv6.as_mut().and_then(|ip| ip.addresses.as_mut())
            {
                addrs.retain(|addr| !addr.is_ipv6_link_local());
            }
        }
    }

    fn sort_ip_addresses(&mut self) {
        for iface in self.ifaces.iter_mut() {
            for ip_conf in [iface.ipv4.as_mut(), iface.ipv6.as_mut()]
                .into_iter()
                .flatten()
            {
                if let Some(addrs) = ip_conf.addresses.as_mut() {
                    addrs.sort_by_key(|addr| addr.ip.to_string());
                }
            }
        }
    }

    fn capitalize_mac(&mut self) {
        for iface in self.ifaces.iter_mut() {
            if let Some(mac) = iface.mac_address.as_mut() {
                *mac = mac.to_uppercase();
            }
        }
    }
}
