// SPDX-License-Identifier: Apache-2.0

use std::collections::{HashMap, HashSet};

use crate::{
    value::copy_undefined_value, Iface, NetstateError, NetworkState,
    RouteEntry,
};

impl NetworkState {
    /// Complete this (desired) state by merging the missing parts from the
    /// other (current) state. The operation is performed on interfaces that
    /// exist in both states, interfaces that appear only on one side are
    /// untouched. Self wins on every conflicting property, at every nesting
    /// level; an explicit `null` in self keeps the property unset.
    pub fn merge_interfaces(
        &mut self,
        other: &Self,
    ) -> Result<(), NetstateError> {
        let shared_names: Vec<String> = self
            .ifaces
            .iter()
            .filter(|iface| other.ifaces.contains(iface.name.as_str()))
            .map(|iface| iface.name.clone())
            .collect();

        for name in shared_names {
            let (Some(des_iface), Some(cur_iface)) =
                (self.ifaces.get(name.as_str()), other.ifaces.get(name.as_str()))
            else {
                continue;
            };
            let mut merged_value = serde_json::to_value(des_iface)?;
            let cur_value = serde_json::to_value(cur_iface)?;
            copy_undefined_value(&mut merged_value, &cur_value);
            let merged: Iface = serde_json::from_value(merged_value)?;
            self.ifaces.push(merged);
        }
        Ok(())
    }

    /// Merge the route configuration of the current state into this
    /// (desired) state:
    ///  * Desired routes marked `state: absent` delete every matching route
    ///    that exists in the current state, undefined properties acting as
    ///    wildcards.
    ///  * Interfaces whose final route set equals their current one are not
    ///    re-stated.
    ///  * Any interface left with route changes that the desired state does
    ///    not mention gets a name-only interface stub, so the apply layer
    ///    recreates its profile. Routes cannot be applied separately from
    ///    the interface owning them.
    ///
    /// A concrete desired route without a next hop interface is dropped
    /// with a warning, it cannot be attached to any interface profile.
    pub fn merge_route_config(&mut self, current: &Self) {
        let mut iface_route_sets: HashMap<String, HashSet<RouteEntry>> =
            HashMap::new();
        let mut absent_routes: Vec<RouteEntry> = Vec::new();
        let mut current_route_sets: HashMap<String, HashSet<RouteEntry>> =
            HashMap::new();

        for rt in self.routes.config() {
            let mut rt = rt.clone();
            rt.sanitize();
            if rt.is_absent() {
                absent_routes.push(rt);
            } else if let Some(via) = rt.next_hop_iface.clone() {
                iface_route_sets.entry(via).or_default().insert(rt);
            } else {
                log::warn!(
                    "Ignoring the route entry with no next hop interface \
                     defined: {rt}"
                );
            }
        }

        for rt in current.routes.config() {
            let mut rt = rt.clone();
            rt.sanitize();
            if let Some(via) = rt.next_hop_iface.clone() {
                iface_route_sets
                    .entry(via.clone())
                    .or_default()
                    .insert(rt.clone());
                current_route_sets.entry(via).or_default().insert(rt);
            } else {
                // Current state routes carry a next hop interface by
                // construction, treat a violation as a data quality issue.
                log::warn!(
                    "Ignoring current route entry with no next hop interface \
                     defined: {rt}"
                );
            }
        }

        let changed_ifaces = remove_absent_routes(
            &absent_routes,
            &mut iface_route_sets,
            &current_route_sets,
        );

        // Remove interfaces whose routes never change.
        iface_route_sets.retain(|iface_name, route_set| {
            current_route_sets.get(iface_name) != Some(&*route_set)
        });

        let mut touched_ifaces: HashSet<&str> =
            iface_route_sets.keys().map(|n| n.as_str()).collect();
        touched_ifaces.extend(changed_ifaces.iter().map(|n| n.as_str()));

        // Create basic interface information for changed routes.
        let stub_names: Vec<String> = touched_ifaces
            .into_iter()
            .filter(|name| {
                !self.ifaces.contains(name) && current.ifaces.contains(name)
            })
            .map(|name| name.to_string())
            .collect();
        for name in stub_names {
            self.ifaces.push(Iface::new(name));
        }

        let mut merged_routes: Vec<RouteEntry> =
            iface_route_sets.into_values().flatten().collect();
        merged_routes.sort_unstable_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        self.routes.config = Some(merged_routes);
    }
}

/// Remove routes matched by absent routes:
///  * Undefined properties of an absent route are wildcards.
///  * Only routes that exist in the current state can be deleted, a
///    desired-only route never matches.
///
/// Returns the names of interfaces that got routes deleted.
fn remove_absent_routes(
    absent_routes: &[RouteEntry],
    iface_route_sets: &mut HashMap<String, HashSet<RouteEntry>>,
    current_route_sets: &HashMap<String, HashSet<RouteEntry>>,
) -> HashSet<String> {
    let mut changed_ifaces: HashSet<String> = HashSet::new();
    for absent_rt in absent_routes {
        for (iface_name, route_set) in iface_route_sets.iter_mut() {
            if let Some(via) = absent_rt.next_hop_iface.as_deref() {
                if via != iface_name.as_str() {
                    continue;
                }
            }
            let cur_set = current_route_sets.get(iface_name);
            let matched: Vec<RouteEntry> = route_set
                .iter()
                .filter(|rt| {
                    absent_rt.is_match(rt)
                        && cur_set.map(|c| c.contains(*rt)) == Some(true)
                })
                .cloned()
                .collect();
            for rt in matched {
                route_set.remove(&rt);
                changed_ifaces.insert(iface_name.clone());
            }
        }
    }
    changed_ifaces
}
