// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

/// Render the desired and current sub-trees as YAML blocks for embedding
/// into verification failures.
pub(crate) fn format_desired_current_state_diff<T, U>(
    desired: &T,
    current: &U,
) -> String
where
    T: Serialize,
    U: Serialize,
{
    format!(
        "\ndesired\n=======\n{}\ncurrent\n=======\n{}",
        to_yaml_string(desired),
        to_yaml_string(current)
    )
}

fn to_yaml_string<T: Serialize>(state: &T) -> String {
    serde_yaml::to_string(state)
        .unwrap_or_else(|e| format!("<failed to render state: {e}>"))
}
