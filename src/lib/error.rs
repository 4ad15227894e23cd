// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Please report this as bug to upstream
    Bug,
    /// Malformed input document or argument
    InvalidArgument,
    /// Network backend collaborator failure
    PluginFailure,
    /// Post applied state does not match with desired state
    VerificationError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bug => write!(f, "bug"),
            Self::InvalidArgument => write!(f, "invalid-argument"),
            Self::PluginFailure => write!(f, "plugin-failure"),
            Self::VerificationError => write!(f, "verification-error"),
        }
    }
}

// Try not implement From for NetstateError here unless you are sure this
// error should always convert to certain type of ErrorKind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NetstateError {
    pub kind: ErrorKind,
    pub msg: String,
}

impl std::fmt::Display for NetstateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl NetstateError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }
}

impl std::error::Error for NetstateError {}

impl From<serde_json::Error> for NetstateError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::Bug, format!("serde_json::Error: {e}"))
    }
}

impl From<serde_yaml::Error> for NetstateError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::new(ErrorKind::Bug, format!("serde_yaml::Error: {e}"))
    }
}

impl From<std::net::AddrParseError> for NetstateError {
    fn from(e: std::net::AddrParseError) -> Self {
        Self::new(
            ErrorKind::InvalidArgument,
            format!("Invalid IP address: {e}"),
        )
    }
}
