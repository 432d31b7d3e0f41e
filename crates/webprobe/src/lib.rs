// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP(S) probing engine.
//!
//! A [`Prober`] issues HEAD requests against remote endpoints and answers
//! questions about them: is it up, does it return a given status, does it
//! redirect where it should, does it present a valid certificate, and does it
//! enforce HTTPS. Checks return structured outcomes carrying every failing
//! clause rather than a bare boolean.
//!
//! ```no_run
//! # async fn example() {
//! let prober = webprobe::Prober::default();
//! let outcome = prober.enforce_https_everywhere("example.org").await;
//! if !outcome.passed() {
//!     eprintln!("{}", outcome.message());
//! }
//! # }
//! ```

pub mod client;
pub mod enforce;
pub mod matchers;
pub mod request;
pub mod tls;
pub mod url;

pub use client::{ConnectionConfig, build_client};
pub use url::normalize;
pub use webprobe_core::{CheckOutcome, Diagnostic, EnforcementOutcome, ProbeError, ProbeResponse};

use webprobe_config::ProbeConfig;

/// Entry point for all probe operations.
///
/// Holds only the base connection settings; each request derives its own
/// config and client from them.
#[derive(Debug, Clone, Default)]
pub struct Prober {
    connection: ConnectionConfig,
}

impl Prober {
    pub fn new(connection: ConnectionConfig) -> Self {
        Self { connection }
    }

    /// Build a prober from loaded configuration.
    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(ConnectionConfig::from_probe_config(config))
    }

    pub fn connection(&self) -> &ConnectionConfig {
        &self.connection
    }

    /// Issue a single HEAD request, optionally following redirects up to the
    /// configured hop limit.
    ///
    /// This is the only operation that surfaces the failure cause as an error;
    /// the checks fold failures into their outcomes.
    pub async fn head(
        &self,
        url: &str,
        follow_redirects: bool,
    ) -> Result<ProbeResponse, ProbeError> {
        request::head(&self.connection.following(follow_redirects), url).await
    }
}
