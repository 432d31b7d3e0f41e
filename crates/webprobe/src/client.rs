// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connection factory for probe clients.
//!
//! Every probe gets a freshly built `reqwest::Client` from an immutable
//! [`ConnectionConfig`], so redirect behavior never leaks between probes.

use std::time::Duration;

use reqwest::redirect::Policy;
use tracing::error;
use webprobe_config::ProbeConfig;
use webprobe_config::model::default_user_agent;
use webprobe_core::ProbeError;

/// Bound on TCP connect plus TLS handshake.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Bound on the full request/response exchange.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Redirects followed before a probe fails with too many redirects.
pub const DEFAULT_MAX_REDIRECT_HOPS: usize = 4;

/// Settings for one probe's HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    connect_timeout: Duration,
    read_timeout: Duration,
    follow_redirects: bool,
    max_redirect_hops: usize,
    user_agent: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            follow_redirects: false,
            max_redirect_hops: DEFAULT_MAX_REDIRECT_HOPS,
            user_agent: default_user_agent(),
        }
    }
}

impl ConnectionConfig {
    pub fn from_probe_config(config: &ProbeConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            read_timeout: Duration::from_secs(config.read_timeout_secs),
            follow_redirects: false,
            max_redirect_hops: config.max_redirect_hops,
            user_agent: config.user_agent.clone(),
        }
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    pub fn with_max_redirect_hops(mut self, hops: usize) -> Self {
        self.max_redirect_hops = hops;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// A copy of this config with redirect following switched on or off.
    pub fn following(&self, follow_redirects: bool) -> Self {
        Self {
            follow_redirects,
            ..self.clone()
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    pub fn follow_redirects(&self) -> bool {
        self.follow_redirects
    }

    pub fn max_redirect_hops(&self) -> usize {
        self.max_redirect_hops
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn redirect_policy(&self) -> Policy {
        if self.follow_redirects {
            Policy::limited(self.max_redirect_hops)
        } else {
            Policy::none()
        }
    }
}

/// Build a client for a single probe.
///
/// - TLS 1.2 minimum, verified against the platform trust store.
/// - Connect and overall timeouts from the config.
/// - Bounded redirect following, or none at all.
pub fn build_client(config: &ConnectionConfig) -> Result<reqwest::Client, ProbeError> {
    reqwest::Client::builder()
        .min_tls_version(reqwest::tls::Version::TLS_1_2)
        .connect_timeout(config.connect_timeout)
        .timeout(config.read_timeout)
        .redirect(config.redirect_policy())
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| {
            error!("failed to build probe HTTP client: {e}");
            ProbeError::ClientBuild {
                reason: e.to_string(),
            }
        })
}
