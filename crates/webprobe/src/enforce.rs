// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The composite "HTTPS is enforced" check.

use tracing::info;
use webprobe_core::EnforcementOutcome;

use crate::Prober;
use crate::url::strip_http_scheme;

impl Prober {
    /// Check that plain HTTP on `domain` answers with a 301 to an `https`
    /// URL whose certificate is valid.
    ///
    /// The certificate check targets the `Location` the origin sent, whatever
    /// scheme it carries. All three conditions are evaluated so the outcome
    /// can report each one that failed.
    pub async fn enforce_https_everywhere(&self, domain: &str) -> EnforcementOutcome {
        let url = format!("http://{}", strip_http_scheme(domain));

        let response = match self.head(&url, false).await {
            Ok(response) => response,
            Err(err) => return EnforcementOutcome::unreachable(err),
        };

        let cert_is_valid = match response.location.as_deref() {
            Some(location) => self.has_valid_certificate(location).await,
            None => false,
        };

        let outcome =
            EnforcementOutcome::evaluate(Some(response.status), response.location, cert_is_valid);
        if !outcome.passed() {
            info!(url = %url, failures = %outcome.message(), "https is not enforced");
        }
        outcome
    }
}
