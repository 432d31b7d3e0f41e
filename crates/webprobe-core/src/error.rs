// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for probe operations.

use serde::Serialize;
use thiserror::Error;

/// Why a single probe failed to produce a response.
///
/// Every variant carries owned strings only, so an error can be cloned into
/// an outcome's diagnostics and still be handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbeError {
    /// DNS resolution failed, the connection was refused, or the URL could
    /// not be parsed at all.
    #[error("{url} is unreachable: {reason}")]
    NetworkUnreachable { url: String, reason: String },

    /// The connect or overall request timeout elapsed.
    #[error("request to {url} timed out: {reason}")]
    Timeout { url: String, reason: String },

    /// More redirects were returned than the configured hop limit allows.
    #[error("too many redirects from {url} (limit {limit})")]
    TooManyRedirects { url: String, limit: usize },

    /// The TLS handshake failed: expired, mismatched or untrusted
    /// certificate, or no TLS listener on the port.
    #[error("tls handshake with {url} failed: {reason}")]
    TlsHandshake { url: String, reason: String },

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },
}

impl ProbeError {
    /// The URL the failed probe targeted, if the error is tied to one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::NetworkUnreachable { url, .. }
            | Self::Timeout { url, .. }
            | Self::TooManyRedirects { url, .. }
            | Self::TlsHandshake { url, .. } => Some(url),
            Self::ClientBuild { .. } => None,
        }
    }
}
