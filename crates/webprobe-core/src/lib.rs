// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core types for the Webprobe engine.
//!
//! This crate holds the error taxonomy shared by every probe and the
//! structured outcome types that checks hand back to the assertion layer.

pub mod error;
pub mod types;

pub use error::ProbeError;
pub use types::{CheckOutcome, Diagnostic, EnforcementOutcome, ProbeResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_error_has_all_variants() {
        let _unreachable = ProbeError::NetworkUnreachable {
            url: "http://example.invalid".into(),
            reason: "dns error".into(),
        };
        let _timeout = ProbeError::Timeout {
            url: "http://example.org".into(),
            reason: "operation timed out".into(),
        };
        let _redirects = ProbeError::TooManyRedirects {
            url: "http://example.org".into(),
            limit: 4,
        };
        let _tls = ProbeError::TlsHandshake {
            url: "https://example.org".into(),
            reason: "invalid peer certificate".into(),
        };
        let _build = ProbeError::ClientBuild {
            reason: "no tls backend".into(),
        };
    }
}
