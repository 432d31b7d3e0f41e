// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Certificate validity as seen by a client using the platform trust store.

use tracing::debug;

use crate::Prober;
use crate::url::strip_http_scheme;

impl Prober {
    /// Whether `domain_or_url` answers an HTTPS HEAD with a trusted,
    /// unexpired certificate for its own hostname.
    ///
    /// Any `http://` or `https://` prefix is dropped and HTTPS is always
    /// used. Every failure yields `false`: bad certificates, refused
    /// connections and ports without a TLS listener alike. Use
    /// [`Prober::head`] to learn the cause.
    pub async fn has_valid_certificate(&self, domain_or_url: &str) -> bool {
        let url = format!("https://{}", strip_http_scheme(domain_or_url));

        match self.head(&url, false).await {
            Ok(response) => {
                debug!(url = %url, status = response.status, "certificate accepted");
                true
            }
            Err(err) => {
                debug!(url = %url, error = %err, "no valid certificate");
                false
            }
        }
    }
}
