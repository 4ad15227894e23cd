// SPDX-License-Identifier: Apache-2.0

use crate::{ErrorKind, NetworkState};

#[test]
fn test_new_from_yaml_missing_iface_name_is_construction_error() {
    let result = NetworkState::new_from_yaml(
        r#"
interfaces:
- type: ethernet
  state: up
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_duplicate_iface_name_last_entry_wins() {
    let state = NetworkState::new_from_yaml(
        r#"
interfaces:
- name: eth0
  state: down
- name: eth0
  state: up
  mtu: 1500
"#,
    )
    .unwrap();
    assert_eq!(state.ifaces.len(), 1);
    let iface = state.ifaces.get("eth0").unwrap();
    assert_eq!(iface.state, Some(crate::InterfaceState::Up));
    assert_eq!(
        iface.other.get("mtu"),
        Some(&serde_json::json!(1500))
    );
}

#[test]
fn test_ifaces_render_sorted_by_name() {
    let state = NetworkState::new_from_yaml(
        r#"
interfaces:
- name: eth1
- name: br0
- name: eth0
"#,
    )
    .unwrap();
    let doc = state.to_value().unwrap();
    let names: Vec<&str> = doc["interfaces"]
        .as_array()
        .unwrap()
        .iter()
        .map(|iface| iface["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["br0", "eth0", "eth1"]);
}

#[test]
fn test_iface_routes_excludes_routes_without_next_hop_iface() {
    let state = NetworkState::new_from_yaml(
        r#"
routes:
  config:
  - destination: 198.51.100.0/24
    next-hop-interface: eth1
  - destination: 203.0.113.0/24
"#,
    )
    .unwrap();
    let iface_routes = state.iface_routes();
    assert_eq!(iface_routes.len(), 1);
    assert_eq!(iface_routes["eth1"].len(), 1);
}

#[test]
fn test_filtered_state_keeps_only_named_ifaces() {
    let state = NetworkState::new_from_yaml(
        r#"
interfaces:
- name: eth0
- name: eth1
- name: br0
"#,
    )
    .unwrap();
    let filtered = state.filtered_state(&["eth1", "missing"]);
    assert_eq!(filtered.ifaces.names(), vec!["eth1"]);
}

#[test]
fn test_route_rules_and_dns_preserved_verbatim() {
    let state = NetworkState::new_from_yaml(
        r#"
route-rules:
  config:
  - ip-from: 192.0.2.0/24
    route-table: 100
dns-resolver:
  config:
    server:
    - 192.0.2.53
"#,
    )
    .unwrap();
    assert_eq!(
        state.route_rules.as_ref().unwrap()["config"][0]["route-table"],
        serde_json::json!(100)
    );
    assert_eq!(
        state.dns.as_ref().unwrap()["config"]["server"][0],
        serde_json::json!("192.0.2.53")
    );
}
