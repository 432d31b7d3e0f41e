// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Webprobe engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported instead of silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level Webprobe configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WebprobeConfig {
    /// Connection settings applied to every probe.
    #[serde(default)]
    pub probe: ProbeConfig,
}

/// Connection settings applied to every probe.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    /// Bound on TCP connect plus TLS handshake, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Bound on the whole request/response exchange, in seconds.
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,

    /// Maximum redirects followed by checks that follow redirects.
    #[serde(default = "default_max_redirect_hops")]
    pub max_redirect_hops: usize,

    /// `User-Agent` header sent with every probe.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
            max_redirect_hops: default_max_redirect_hops(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_connect_timeout_secs() -> u64 {
    2
}

fn default_read_timeout_secs() -> u64 {
    5
}

fn default_max_redirect_hops() -> usize {
    4
}

pub fn default_user_agent() -> String {
    format!("webprobe/{}", env!("CARGO_PKG_VERSION"))
}
