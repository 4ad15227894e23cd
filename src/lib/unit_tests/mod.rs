// SPDX-License-Identifier: Apache-2.0

mod net_state;
mod sanitize;
mod verify;

use crate::NetworkState;

pub(crate) fn state_from_yaml(yaml: &str) -> NetworkState {
    NetworkState::new_from_yaml(yaml).unwrap()
}
