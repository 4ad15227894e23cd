// SPDX-License-Identifier: Apache-2.0

mod error;
mod iface;
mod iface_state;
mod iface_type;
mod ifaces;
mod ip;
mod merge;
mod net_state;
mod normalize;
mod prettystate;
mod route;
mod sanitize;
mod show;
mod value;
mod verify;

pub use self::error::{ErrorKind, NetstateError};
pub use self::iface::{
    BridgeConf, BridgePortConf, EthernetConf, EthernetDuplex, Iface,
    LinkAggConf,
};
pub use self::iface_state::InterfaceState;
pub use self::iface_type::InterfaceType;
pub use self::ifaces::Interfaces;
pub use self::ip::{IpAddrEntry, IpConf};
pub use self::net_state::NetworkState;
pub use self::route::{RouteEntry, RouteState, Routes};
pub use self::show::{show_with_backend, NetworkBackend};

#[cfg(test)]
mod unit_tests;
