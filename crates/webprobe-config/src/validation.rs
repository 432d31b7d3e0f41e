// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::WebprobeConfig;

/// Upper bound on `probe.max_redirect_hops`.
pub const MAX_REDIRECT_HOPS_LIMIT: usize = 20;

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every violation instead of stopping at the first.
pub fn validate_config(config: &WebprobeConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let probe = &config.probe;

    if probe.connect_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "probe.connect_timeout_secs must be at least 1".to_string(),
        });
    }

    if probe.read_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "probe.read_timeout_secs must be at least 1".to_string(),
        });
    }

    if probe.read_timeout_secs < probe.connect_timeout_secs {
        errors.push(ConfigError::Validation {
            message: format!(
                "probe.read_timeout_secs ({}) must not be shorter than probe.connect_timeout_secs ({})",
                probe.read_timeout_secs, probe.connect_timeout_secs
            ),
        });
    }

    if probe.max_redirect_hops == 0 || probe.max_redirect_hops > MAX_REDIRECT_HOPS_LIMIT {
        errors.push(ConfigError::Validation {
            message: format!(
                "probe.max_redirect_hops must be between 1 and {MAX_REDIRECT_HOPS_LIMIT}, got {}",
                probe.max_redirect_hops
            ),
        });
    }

    if probe.user_agent.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "probe.user_agent must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProbeConfig;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&WebprobeConfig::default()).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let config = WebprobeConfig {
            probe: ProbeConfig {
                connect_timeout_secs: 0,
                read_timeout_secs: 0,
                max_redirect_hops: 0,
                user_agent: "  ".to_string(),
            },
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn read_timeout_shorter_than_connect_is_rejected() {
        let config = WebprobeConfig {
            probe: ProbeConfig {
                connect_timeout_secs: 10,
                read_timeout_secs: 5,
                ..ProbeConfig::default()
            },
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("read_timeout_secs"));
    }
}
