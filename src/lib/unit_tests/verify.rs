// SPDX-License-Identifier: Apache-2.0

use crate::unit_tests::state_from_yaml;
use crate::ErrorKind;

#[test]
fn test_verify_ifaces_subset_passes() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: eth0
  state: up
"#,
    );
    let mut current = state_from_yaml(
        r#"
interfaces:
- name: eth0
  type: ethernet
  state: up
  mac-address: 00:23:45:67:89:ab
  mtu: 1500
  ipv4:
    enabled: true
    address:
    - ip: 192.0.2.10
      prefix-length: 24
- name: lo
  type: loopback
  state: up
"#,
    );
    desired.verify_interfaces(&mut current).unwrap();
}

#[test]
fn test_verify_ifaces_missing_from_current_fails() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: eth7
  state: up
"#,
    );
    let mut current = state_from_yaml(
        r#"
interfaces:
- name: eth0
  state: up
"#,
    );
    let e = desired.verify_interfaces(&mut current).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::VerificationError);
}

#[test]
fn test_verify_ifaces_property_mismatch_fails_with_path() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: eth0
  state: up
  mtu: 9000
"#,
    );
    let mut current = state_from_yaml(
        r#"
interfaces:
- name: eth0
  state: up
  mtu: 1500
"#,
    );
    let e = desired.verify_interfaces(&mut current).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::VerificationError);
    assert!(e.msg().contains("eth0.interface.mtu"));
}

#[test]
fn test_verify_ifaces_skips_absent_and_down_virtual() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: eth0
  state: absent
- name: br0
  type: linux-bridge
  state: down
"#,
    );
    let mut current = state_from_yaml(
        r#"
interfaces:
- name: eth1
  state: up
"#,
    );
    // Neither interface is expected in the current state.
    desired.verify_interfaces(&mut current).unwrap();
}

#[test]
fn test_verify_ifaces_ignores_metadata_keys() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: eth0
  state: up
  _master: br0
"#,
    );
    let mut current = state_from_yaml(
        r#"
interfaces:
- name: eth0
  state: up
"#,
    );
    desired.verify_interfaces(&mut current).unwrap();
}

#[test]
fn test_verify_ifaces_dynamic_ip_ignores_runtime_addresses() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: eth0
  state: up
  ipv4:
    enabled: true
    dhcp: true
"#,
    );
    let mut current = state_from_yaml(
        r#"
interfaces:
- name: eth0
  state: up
  ipv4:
    enabled: true
    dhcp: true
    address:
    - ip: 192.0.2.10
      prefix-length: 24
"#,
    );
    desired.sanitize_dynamic_ip();
    desired.verify_interfaces(&mut current).unwrap();
}

#[test]
fn test_verify_routes_passes_on_identical_routes() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: eth1
  state: up
  ipv4:
    enabled: true
routes:
  config:
  - destination: 198.51.100.0/24
    next-hop-interface: eth1
    next-hop-address: 192.0.2.1
    metric: 103
    table-id: 254
"#,
    );
    let mut current = desired.clone();
    desired.verify_routes(&mut current).unwrap();
}

#[test]
fn test_verify_routes_mismatch_fails() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: eth1
  state: up
  ipv4:
    enabled: true
routes:
  config:
  - destination: 198.51.100.0/24
    next-hop-interface: eth1
"#,
    );
    let mut current = state_from_yaml(
        r#"
interfaces:
- name: eth1
  state: up
  ipv4:
    enabled: true
"#,
    );
    let e = desired.verify_routes(&mut current).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::VerificationError);
    assert!(e.msg().contains("eth1"));
}

#[test]
fn test_clean_routes_removes_invalid_next_hops() {
    let mut state = state_from_yaml(
        r#"
interfaces:
- name: eth0
  state: down
  ipv4:
    enabled: true
- name: eth1
  state: up
  ipv4:
    enabled: false
  ipv6:
    enabled: true
- name: eth2
  state: up
  ipv4:
    enabled: true
routes:
  config:
  - destination: 198.51.100.0/24
    next-hop-interface: eth0
  - destination: 203.0.113.0/24
    next-hop-interface: eth1
  - destination: 2001:db8::/64
    next-hop-interface: eth1
  - destination: 192.0.2.0/24
    next-hop-interface: eth9
  - destination: 198.18.0.0/15
    next-hop-interface: eth2
"#,
    );
    state.clean_routes();

    let routes = state.routes.config.as_deref().unwrap();
    let kept: Vec<&str> = routes
        .iter()
        .filter_map(|rt| rt.destination.as_deref())
        .collect();
    // Down interface, IPv4 disabled interface and unknown interface lose
    // their routes; the IPv6 route over eth1 and the eth2 route survive.
    assert_eq!(kept, vec!["2001:db8::/64", "198.18.0.0/15"]);
}

#[test]
fn test_verify_routes_ignores_unindexed_route() {
    let mut desired = state_from_yaml(
        r#"
interfaces:
- name: eth1
  state: up
  ipv4:
    enabled: true
routes:
  config:
  - destination: 203.0.113.0/24
"#,
    );
    let mut current = state_from_yaml(
        r#"
interfaces:
- name: eth1
  state: up
  ipv4:
    enabled: true
"#,
    );
    // Routes without a next hop interface are not indexed per interface
    // and do not take part in verification.
    desired.verify_routes(&mut current).unwrap();
}
