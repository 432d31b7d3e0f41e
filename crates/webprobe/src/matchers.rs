// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Status and redirect checks.

use webprobe_core::{CheckOutcome, Diagnostic, ProbeResponse};

use crate::Prober;
use crate::url::normalize;

/// Status codes accepted as a permanent redirect.
pub const PERMANENT_REDIRECT_CODES: &[u16] = &[301];

/// Status codes accepted as a temporary redirect.
pub const TEMPORARY_REDIRECT_CODES: &[u16] = &[302, 307];

const UP_STATUS: u16 = 200;

impl Prober {
    /// Passes iff a non-following HEAD returns exactly `expected`.
    pub async fn status_equals(&self, url: &str, expected: u16) -> CheckOutcome {
        match self.head(&normalize(url), false).await {
            Ok(response) => check_status(&response, &[expected]),
            Err(err) => CheckOutcome::probe_failed(err),
        }
    }

    /// Passes iff the status after following redirects is exactly 200.
    ///
    /// Exceeding the hop limit fails the check.
    pub async fn is_up(&self, url: &str) -> CheckOutcome {
        match self.head(&normalize(url), true).await {
            Ok(response) => check_status(&response, &[UP_STATUS]),
            Err(err) => CheckOutcome::probe_failed(err),
        }
    }

    /// Passes iff a non-following HEAD returns one of `acceptable_codes` and a
    /// `Location` pointing at `destination`, trailing slash optional.
    pub async fn redirects_to(
        &self,
        url: &str,
        destination: &str,
        acceptable_codes: &[u16],
    ) -> CheckOutcome {
        match self.head(&normalize(url), false).await {
            Ok(response) => check_redirect(&response, &normalize(destination), acceptable_codes),
            Err(err) => CheckOutcome::probe_failed(err),
        }
    }

    pub async fn redirects_permanently_to(&self, url: &str, destination: &str) -> CheckOutcome {
        self.redirects_to(url, destination, PERMANENT_REDIRECT_CODES)
            .await
    }

    pub async fn redirects_temporarily_to(&self, url: &str, destination: &str) -> CheckOutcome {
        self.redirects_to(url, destination, TEMPORARY_REDIRECT_CODES)
            .await
    }
}

fn check_status(response: &ProbeResponse, expected: &[u16]) -> CheckOutcome {
    CheckOutcome::from_diagnostics(status_mismatch(response, expected).into_iter().collect())
}

fn status_mismatch(response: &ProbeResponse, expected: &[u16]) -> Option<Diagnostic> {
    (!expected.contains(&response.status)).then(|| Diagnostic::StatusMismatch {
        expected: expected.to_vec(),
        observed: Some(response.status),
    })
}

/// Judge a redirect response. Status and location are checked independently
/// and both reported when both fail.
pub fn check_redirect(
    response: &ProbeResponse,
    destination: &str,
    acceptable_codes: &[u16],
) -> CheckOutcome {
    let mut diagnostics: Vec<Diagnostic> =
        status_mismatch(response, acceptable_codes).into_iter().collect();

    let location_ok = response
        .location
        .as_deref()
        .is_some_and(|location| location_matches(location, destination));
    if !location_ok {
        diagnostics.push(Diagnostic::LocationMismatch {
            expected: destination.to_string(),
            observed: response.location.clone(),
        });
    }

    CheckOutcome::from_diagnostics(diagnostics)
}

/// Exact comparison after dropping one trailing slash from each side.
pub fn location_matches(location: &str, expected: &str) -> bool {
    trim_trailing_slash(location) == trim_trailing_slash(expected)
}

fn trim_trailing_slash(s: &str) -> &str {
    s.strip_suffix('/').unwrap_or(s)
}
