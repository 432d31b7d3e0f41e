// SPDX-FileCopyrightText: 2026 Webprobe Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./webprobe.toml` > `~/.config/webprobe/webprobe.toml`
//! > `/etc/webprobe/webprobe.toml`, with environment variable overrides via the
//! `WEBPROBE_` prefix.
//!
//! Nothing in the probing engine calls these loaders; a `Prober` built with
//! defaults reads no files. Callers opt in and hand the result to
//! `Prober::from_config`.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use tracing::debug;

use crate::model::WebprobeConfig;

pub(crate) const LOCAL_CONFIG_FILE: &str = "webprobe.toml";
pub(crate) const SYSTEM_CONFIG_FILE: &str = "/etc/webprobe/webprobe.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/webprobe/webprobe.toml`
/// 3. `~/.config/webprobe/webprobe.toml`
/// 4. `./webprobe.toml`
/// 5. `WEBPROBE_*` environment variables
pub fn load_config() -> Result<WebprobeConfig, figment::Error> {
    let config: WebprobeConfig = build_figment().extract()?;
    debug!(probe = ?config.probe, "loaded webprobe configuration");
    Ok(config)
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<WebprobeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WebprobeConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<WebprobeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WebprobeConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(WebprobeConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_FILE))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

pub(crate) fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("webprobe").join(LOCAL_CONFIG_FILE))
}

/// Environment provider mapping `WEBPROBE_PROBE_READ_TIMEOUT_SECS` to
/// `probe.read_timeout_secs`.
///
/// Uses `Env::map()` rather than `Env::split("_")`: key names contain
/// underscores themselves. Keys reach the closure in their original case.
fn env_provider() -> Env {
    Env::prefixed("WEBPROBE_").map(|key| {
        key.as_str()
            .to_ascii_lowercase()
            .replacen("probe_", "probe.", 1)
            .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_file_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                "[probe]\nconnect_timeout_secs = 3\nread_timeout_secs = 8\n",
            )?;
            jail.set_env("WEBPROBE_PROBE_READ_TIMEOUT_SECS", "9");

            let config = load_config_from_path(Path::new("custom.toml"))?;
            assert_eq!(config.probe.connect_timeout_secs, 3);
            assert_eq!(config.probe.read_timeout_secs, 9);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_apply_without_any_file() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("WEBPROBE_PROBE_MAX_REDIRECT_HOPS", "6");
            jail.set_env("WEBPROBE_PROBE_USER_AGENT", "audit/9");

            let config = load_config()?;
            assert_eq!(config.probe.max_redirect_hops, 6);
            assert_eq!(config.probe.user_agent, "audit/9");
            assert_eq!(config.probe.connect_timeout_secs, 2);
            Ok(())
        });
    }

    #[test]
    fn local_file_is_picked_up() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(LOCAL_CONFIG_FILE, "[probe]\nmax_redirect_hops = 7\n")?;

            let config = load_config()?;
            assert_eq!(config.probe.max_redirect_hops, 7);
            Ok(())
        });
    }
}
