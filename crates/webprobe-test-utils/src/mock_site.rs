// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A mock web site answering HEAD requests.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wiremock server with helpers for the responses probes care about.
pub struct MockSite {
    server: MockServer,
}

impl MockSite {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// `127.0.0.1:<port>`, without a scheme.
    pub fn host(&self) -> String {
        self.server.address().to_string()
    }

    /// Absolute `http://` URL for `path` on this site.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.server.uri())
    }

    /// Answer HEAD `at` with `status` and no headers.
    pub async fn respond(&self, at: &str, status: u16) {
        self.mount(at, ResponseTemplate::new(status)).await;
    }

    /// Answer HEAD `at` with `status` and a `Location` header.
    pub async fn redirect(&self, at: &str, status: u16, location: &str) {
        self.mount(
            at,
            ResponseTemplate::new(status).insert_header("Location", location),
        )
        .await;
    }

    /// Answer HEAD `at` with 200 only after `delay`.
    pub async fn respond_after(&self, at: &str, delay: Duration) {
        self.mount(at, ResponseTemplate::new(200).set_delay(delay))
            .await;
    }

    /// Number of requests the site has received so far.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }

    async fn mount(&self, at: &str, template: ResponseTemplate) {
        Mock::given(method("HEAD"))
            .and(path(at))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }
}
