// SPDX-License-Identifier: Apache-2.0

use crate::unit_tests::state_from_yaml;
use crate::EthernetConf;

#[test]
fn test_sanitize_dynamic_ip_empties_address_list() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: eth0
  ipv4:
    enabled: true
    dhcp: true
"#,
    );
    let mut current = state_from_yaml(
        r#"
interfaces:
- name: eth0
  ipv4:
    enabled: true
    dhcp: true
    address:
    - ip: 192.0.2.10
      prefix-length: 24
"#,
    );
    // The runtime addresses of a dynamic interface are not configuration,
    // the desired state must not inherit them.
    current.sanitize_dynamic_ip();
    desired.merge_interfaces(&current).unwrap();

    let ipv4 = desired.ifaces.get("eth0").unwrap().ipv4.as_ref().unwrap();
    assert_eq!(ipv4.addresses.as_deref(), Some(&[][..]));
}

#[test]
fn test_sanitize_static_ip_drops_auto_options() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: eth0
  ipv4:
    enabled: true
    dhcp: false
    auto-routes: true
    auto-gateway: true
    auto-dns: true
"#,
    );
    desired.sanitize_dynamic_ip();

    let ipv4 = desired.ifaces.get("eth0").unwrap().ipv4.as_ref().unwrap();
    assert_eq!(ipv4.auto_routes, None);
    assert_eq!(ipv4.auto_gateway, None);
    assert_eq!(ipv4.auto_dns, None);
}

#[test]
fn test_sanitize_ethernet_pins_unspecified_link_settings() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: eth0
  state: up
"#,
    );
    let current = state_from_yaml(
        r#"
interfaces:
- name: eth0
  type: ethernet
  state: up
  ethernet:
    auto-negotiation: true
    speed: 1000
    duplex: full
"#,
    );
    desired.sanitize_ethernet(&current);
    assert_eq!(
        desired.ifaces.get("eth0").unwrap().ethernet,
        Some(EthernetConf::default())
    );

    // The inserted defaults serialize as explicit nulls so the merge does
    // not inherit the current link settings.
    desired.merge_interfaces(&current).unwrap();
    let eth = desired
        .ifaces
        .get("eth0")
        .unwrap()
        .ethernet
        .as_ref()
        .unwrap();
    assert_eq!(eth.auto_neg, None);
    assert_eq!(eth.speed, None);
    assert_eq!(eth.duplex, None);
}

#[test]
fn test_sanitize_ethernet_leaves_non_ethernet_alone() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: br0
  state: up
"#,
    );
    let current = state_from_yaml(
        r#"
interfaces:
- name: br0
  type: linux-bridge
  state: up
"#,
    );
    desired.sanitize_ethernet(&current);
    assert_eq!(desired.ifaces.get("br0").unwrap().ethernet, None);
}
