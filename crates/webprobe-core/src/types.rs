// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Probe responses and the structured outcomes returned by checks.

use std::fmt;

use serde::Serialize;

use crate::error::ProbeError;

/// Status code an HTTPS-enforcing origin must answer plain HTTP with.
pub const PERMANENT_REDIRECT: u16 = 301;

/// What a single HEAD probe observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResponse {
    /// Status code of the last response received.
    pub status: u16,
    /// Raw `Location` header of the last response, if present.
    pub location: Option<String>,
    /// URL of the last response. Equal to the requested URL when no
    /// redirect was followed.
    pub final_url: String,
}

/// One failing sub-condition of a check, rendered as a single clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The probe produced no response at all.
    ProbeFailed { error: ProbeError },
    /// The status code was not one of the expected codes.
    StatusMismatch {
        expected: Vec<u16>,
        observed: Option<u16>,
    },
    /// The `Location` header did not point where it should.
    LocationMismatch {
        expected: String,
        observed: Option<String>,
    },
    /// The redirect target does not use `https`.
    WrongProtocol { observed: Option<String> },
    /// No valid certificate was presented by the redirect target.
    InvalidCertificate { target: Option<String> },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProbeFailed { error } => write!(f, "{error}"),
            Self::StatusMismatch { expected, observed } => {
                let expected = expected
                    .iter()
                    .map(u16::to_string)
                    .collect::<Vec<_>>()
                    .join(" or ");
                match observed {
                    Some(status) => write!(f, "received status {status} instead of {expected}"),
                    None => write!(f, "received no response instead of status {expected}"),
                }
            }
            Self::LocationMismatch { expected, observed } => match observed {
                Some(location) => write!(f, "received location {location} instead of {expected}"),
                None => write!(f, "received no location header instead of {expected}"),
            },
            Self::WrongProtocol { observed } => match observed {
                Some(protocol) => {
                    write!(f, "destination uses protocol {}", protocol.to_uppercase())
                }
                None => write!(f, "destination has no protocol"),
            },
            Self::InvalidCertificate { target } => match target {
                Some(target) => write!(f, "there's no valid SSL certificate at {target}"),
                None => write!(f, "there's no valid SSL certificate"),
            },
        }
    }
}

/// Result of a check: a verdict plus every clause that explains a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckOutcome {
    /// A passing outcome with no diagnostics.
    pub fn pass() -> Self {
        Self {
            passed: true,
            diagnostics: Vec::new(),
        }
    }

    /// Build an outcome from collected diagnostics. Passes iff there are none.
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            passed: diagnostics.is_empty(),
            diagnostics,
        }
    }

    /// A failing outcome for a probe that produced no response.
    pub fn probe_failed(error: ProbeError) -> Self {
        Self::from_diagnostics(vec![Diagnostic::ProbeFailed { error }])
    }

    /// Clauses joined with `"; "`, first letter capitalized. Empty on a pass.
    pub fn message(&self) -> String {
        render_clauses(&self.diagnostics)
    }
}

/// Composite result of an HTTPS enforcement check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnforcementOutcome {
    /// The plain-HTTP probe returned a permanent redirect.
    pub status_matches: bool,
    /// The redirect target uses `https`.
    pub protocol_is_https: bool,
    /// The redirect target presented a valid certificate.
    pub cert_is_valid: bool,
    /// Status of the plain-HTTP probe; `None` when no response arrived.
    pub observed_status: Option<u16>,
    /// Lowercase scheme of the redirect target, when it has one.
    pub observed_protocol: Option<String>,
    /// Raw `Location` header of the plain-HTTP probe.
    pub location: Option<String>,
    /// Why the plain-HTTP probe failed, if it did.
    pub probe_error: Option<ProbeError>,
}

impl EnforcementOutcome {
    /// Decide the outcome from what the plain-HTTP probe and the certificate
    /// check observed.
    pub fn evaluate(
        observed_status: Option<u16>,
        location: Option<String>,
        cert_is_valid: bool,
    ) -> Self {
        let observed_protocol = location.as_deref().and_then(scheme_of);
        Self {
            status_matches: observed_status == Some(PERMANENT_REDIRECT),
            protocol_is_https: observed_protocol.as_deref() == Some("https"),
            cert_is_valid,
            observed_status,
            observed_protocol,
            location,
            probe_error: None,
        }
    }

    /// Outcome for a plain-HTTP probe that never got a response.
    pub fn unreachable(error: ProbeError) -> Self {
        Self {
            probe_error: Some(error),
            ..Self::evaluate(None, None, false)
        }
    }

    /// True iff all three sub-conditions hold.
    pub fn passed(&self) -> bool {
        self.status_matches && self.protocol_is_https && self.cert_is_valid
    }

    /// Every failing sub-condition, evaluated independently of the others.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if let Some(error) = &self.probe_error {
            diagnostics.push(Diagnostic::ProbeFailed {
                error: error.clone(),
            });
        }
        if !self.status_matches {
            diagnostics.push(Diagnostic::StatusMismatch {
                expected: vec![PERMANENT_REDIRECT],
                observed: self.observed_status,
            });
        }
        if !self.protocol_is_https {
            diagnostics.push(Diagnostic::WrongProtocol {
                observed: self.observed_protocol.clone(),
            });
        }
        if !self.cert_is_valid {
            diagnostics.push(Diagnostic::InvalidCertificate {
                target: self.location.clone(),
            });
        }

        diagnostics
    }

    /// Multi-clause failure text. Empty when the check passed.
    pub fn message(&self) -> String {
        render_clauses(&self.diagnostics())
    }

    pub fn into_check_outcome(self) -> CheckOutcome {
        CheckOutcome::from_diagnostics(self.diagnostics())
    }
}

/// Lowercase scheme of an absolute URL, e.g. `https` for `HTTPS://a.example/`.
///
/// Returns `None` for relative references and strings without `://`.
pub fn scheme_of(url: &str) -> Option<String> {
    let (scheme, _) = url.split_once("://")?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then(|| scheme.to_ascii_lowercase())
}

fn render_clauses(diagnostics: &[Diagnostic]) -> String {
    let joined = diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enforcement_passes_with_no_clauses() {
        let outcome =
            EnforcementOutcome::evaluate(Some(301), Some("https://example.org/".into()), true);
        assert!(outcome.passed());
        assert!(outcome.diagnostics().is_empty());
        assert_eq!(outcome.message(), "");
        assert_eq!(outcome.observed_protocol.as_deref(), Some("https"));
    }

    #[test]
    fn temporary_redirect_reports_status_mismatch() {
        let outcome =
            EnforcementOutcome::evaluate(Some(302), Some("https://example.org/".into()), true);
        assert!(!outcome.passed());
        assert_eq!(
            outcome.diagnostics(),
            vec![Diagnostic::StatusMismatch {
                expected: vec![301],
                observed: Some(302),
            }]
        );
        assert_eq!(outcome.message(), "Received status 302 instead of 301");
    }

    #[test]
    fn every_failing_condition_is_reported() {
        let outcome =
            EnforcementOutcome::evaluate(Some(200), Some("http://example.org/".into()), false);
        let diagnostics = outcome.diagnostics();
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(
            outcome.message(),
            "Received status 200 instead of 301; destination uses protocol HTTP; \
             there's no valid SSL certificate at http://example.org/"
        );
    }

    #[test]
    fn unreachable_lists_probe_error_first() {
        let error = ProbeError::NetworkUnreachable {
            url: "http://nowhere.invalid".into(),
            reason: "dns error".into(),
        };
        let outcome = EnforcementOutcome::unreachable(error.clone());
        assert!(!outcome.passed());
        let diagnostics = outcome.diagnostics();
        assert_eq!(diagnostics[0], Diagnostic::ProbeFailed { error });
        assert_eq!(diagnostics.len(), 4);
    }

    #[test]
    fn https_scheme_is_case_insensitive() {
        let outcome =
            EnforcementOutcome::evaluate(Some(301), Some("HTTPS://example.org/".into()), true);
        assert!(outcome.protocol_is_https);
    }

    #[test]
    fn relative_location_has_no_protocol() {
        let outcome = EnforcementOutcome::evaluate(Some(301), Some("/secure".into()), false);
        assert_eq!(outcome.observed_protocol, None);
        assert!(outcome
            .diagnostics()
            .contains(&Diagnostic::WrongProtocol { observed: None }));
    }

    #[test]
    fn scheme_of_rejects_non_schemes() {
        assert_eq!(scheme_of("ftp://files.example"), Some("ftp".to_string()));
        assert_eq!(scheme_of("example.org/path"), None);
        assert_eq!(scheme_of("1http://x"), None);
        assert_eq!(scheme_of("://x"), None);
    }

    #[test]
    fn status_mismatch_lists_alternatives() {
        let diagnostic = Diagnostic::StatusMismatch {
            expected: vec![302, 307],
            observed: Some(301),
        };
        assert_eq!(
            diagnostic.to_string(),
            "received status 301 instead of 302 or 307"
        );
    }

    #[test]
    fn check_outcome_passes_only_without_diagnostics() {
        assert!(CheckOutcome::pass().passed);
        let failed = CheckOutcome::from_diagnostics(vec![Diagnostic::LocationMismatch {
            expected: "https://www.example.org".into(),
            observed: None,
        }]);
        assert!(!failed.passed);
        assert_eq!(
            failed.message(),
            "Received no location header instead of https://www.example.org"
        );
    }
}
