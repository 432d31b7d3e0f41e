// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turning bare domains and partial URLs into probe targets.

pub use webprobe_core::types::scheme_of;

/// Default scheme prepended to inputs that carry none.
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Normalize a probe target into a URL with an explicit scheme.
///
/// Inputs that already carry a scheme are returned unchanged, including
/// non-HTTP ones like `ftp://`: an explicit scheme is the caller's choice.
/// Anything else gets `http://` prepended.
pub fn normalize(input: &str) -> String {
    if scheme_of(input).is_some() {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{input}")
    }
}

/// Remove a leading `http://` or `https://` (any case), leaving the host and
/// whatever follows it.
pub fn strip_http_scheme(input: &str) -> &str {
    ["https://", "http://"]
        .iter()
        .find_map(|prefix| {
            input
                .get(..prefix.len())
                .filter(|head| head.eq_ignore_ascii_case(prefix))
                .map(|_| &input[prefix.len()..])
        })
        .unwrap_or(input)
}
