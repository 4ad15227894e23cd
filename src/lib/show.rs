// SPDX-License-Identifier: Apache-2.0

use crate::{Iface, NetstateError, NetworkState, RouteEntry};

/// The network configuration backend this crate reconciles against. The
/// backend observes the live network stack; applying changes stays on the
/// backend side as well, this crate only computes and verifies state.
pub trait NetworkBackend {
    fn get_interfaces(&self) -> Result<Vec<Iface>, NetstateError>;

    fn get_routes(&self) -> Result<Vec<RouteEntry>, NetstateError>;

    fn get_route_rules(&self) -> Result<serde_json::Value, NetstateError>;

    fn get_dns_client_config(
        &self,
    ) -> Result<serde_json::Value, NetstateError>;

    fn capabilities(&self) -> Vec<String>;
}

/// Aggregate the current network state from the specified backend.
/// Capabilities are only included when status data is requested.
pub fn show_with_backend<B: NetworkBackend>(
    backend: &B,
    include_status_data: bool,
) -> Result<NetworkState, NetstateError> {
    let mut state = NetworkState::new();
    if include_status_data {
        state.capabilities = Some(backend.capabilities());
    }
    for iface in backend.get_interfaces()? {
        state.ifaces.push(iface);
    }
    state.routes.config = Some(backend.get_routes()?);
    state.route_rules = Some(backend.get_route_rules()?);
    state.dns = Some(backend.get_dns_client_config()?);
    Ok(state)
}
