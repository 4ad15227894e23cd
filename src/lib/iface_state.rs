// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
/// The state of interface
pub enum InterfaceState {
    /// Interface is up and carrying configuration.
    /// Deserialize and serialize from/to 'up'.
    #[default]
    Up,
    /// Interface is deactivated, configuration preserved.
    /// Deserialize and serialize from/to 'down'.
    Down,
    /// Only for apply action, remove the configuration and the interface
    /// profile.
    /// Deserialize and serialize from/to 'absent'.
    Absent,
}

impl InterfaceState {
    pub fn is_up(&self) -> bool {
        self == &Self::Up
    }

    pub fn is_down(&self) -> bool {
        self == &Self::Down
    }

    pub fn is_absent(&self) -> bool {
        self == &Self::Absent
    }
}
