// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HEAD requests and classification of their failures.

use std::error::Error as StdError;
use std::io;

use reqwest::header::LOCATION;
use tracing::{debug, warn};
use webprobe_core::{ProbeError, ProbeResponse};

use crate::client::{ConnectionConfig, build_client};

/// Issue one HEAD request to `url` with a client built from `config`.
///
/// Redirects are followed only when `config` says so. The returned
/// `final_url` is `url` itself unless a redirect was followed.
pub async fn head(config: &ConnectionConfig, url: &str) -> Result<ProbeResponse, ProbeError> {
    let client = build_client(config)?;
    debug!(url = %url, follow = config.follow_redirects(), "sending HEAD probe");

    let response = client.head(url).send().await.map_err(|e| {
        let err = classify(&e, url, config);
        warn!(url = %url, error = %err, "probe failed");
        err
    })?;

    let status = response.status().as_u16();
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let redirected = reqwest::Url::parse(url).map_or(true, |requested| requested != *response.url());
    let final_url = if redirected {
        response.url().to_string()
    } else {
        url.to_string()
    };

    debug!(url = %url, status, location = ?location, final_url = %final_url, "probe answered");

    Ok(ProbeResponse {
        status,
        location,
        final_url,
    })
}

/// Map a transport error onto the probe error taxonomy.
///
/// Checked in order: redirect limit, timeout, TLS failure. Anything else
/// (DNS, refused connection, unparseable URL) is reported as unreachable.
pub fn classify(err: &reqwest::Error, url: &str, config: &ConnectionConfig) -> ProbeError {
    let url = url.to_string();

    if err.is_redirect() {
        return ProbeError::TooManyRedirects {
            url,
            limit: config.max_redirect_hops(),
        };
    }

    let reason = root_cause(err);

    if err.is_timeout() {
        ProbeError::Timeout { url, reason }
    } else if is_tls_failure(err, url.starts_with("https")) {
        ProbeError::TlsHandshake { url, reason }
    } else {
        ProbeError::NetworkUnreachable { url, reason }
    }
}

fn causes<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |&e| next_cause(e))
}

/// `io::Error::source` skips the error it wraps, so wrapped I/O errors are
/// unpacked with `get_ref` instead. hyper nests them more than one level deep.
fn next_cause<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    match err.downcast_ref::<io::Error>().and_then(io::Error::get_ref) {
        Some(inner) => Some(inner as &(dyn StdError + 'static)),
        None => err.source(),
    }
}

fn root_cause(err: &reqwest::Error) -> String {
    causes(err)
        .last()
        .map(ToString::to_string)
        .unwrap_or_else(|| err.to_string())
}

/// Whether the error chain carries a rustls error.
///
/// TLS streams surface protocol failures as `InvalidData`, which is only
/// trusted for `https` targets.
fn is_tls_failure(err: &(dyn StdError + 'static), https: bool) -> bool {
    causes(err).any(|cause| {
        cause.downcast_ref::<rustls::Error>().is_some()
            || (https
                && cause
                    .downcast_ref::<io::Error>()
                    .is_some_and(|io_err| io_err.kind() == io::ErrorKind::InvalidData))
    })
}
