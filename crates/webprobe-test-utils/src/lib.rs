// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test fixtures for Webprobe integration tests.
//!
//! Everything binds to `127.0.0.1` on an ephemeral port, so tests run
//! without external services.
//!
//! - [`MockSite`] - wiremock server answering HEAD probes with canned statuses
//! - [`NonTlsListener`] - TCP listener that answers TLS handshakes with plain HTTP
//! - [`closed_port_host`] - a `host:port` nothing is listening on

pub mod listeners;
pub mod mock_site;

pub use listeners::{NonTlsListener, closed_port_host};
pub use mock_site::MockSite;
