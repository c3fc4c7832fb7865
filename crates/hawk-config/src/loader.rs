// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./hawk.toml` > `~/.config/hawk/hawk.toml` > `/etc/hawk/hawk.toml`
//! with environment variable overrides via the `HAWK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::HawkConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/hawk/hawk.toml` (system-wide)
/// 3. `~/.config/hawk/hawk.toml` (user XDG config)
/// 4. `./hawk.toml` (local directory)
/// 5. `HAWK_*` environment variables
pub fn load_config() -> Result<HawkConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<HawkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HawkConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<HawkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HawkConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Config files in merge order, lowest precedence first.
pub fn config_file_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/hawk/hawk.toml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("hawk/hawk.toml"));
    }
    paths.push(PathBuf::from("hawk.toml"));
    paths
}

/// Build the Figment used for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    let files = config_file_paths()
        .into_iter()
        .fold(Figment::new().merge(Serialized::defaults(HawkConfig::default())), |fig, path| {
            fig.merge(Toml::file(path))
        });
    files.merge(env_provider())
}

/// Environment provider with explicit section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `HAWK_ROUTING_FALLBACK_CATEGORY` must map to
/// `routing.fallback_category`, not `routing.fallback.category`.
pub fn env_provider() -> Env {
    Env::prefixed("HAWK_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to a dotted config path.
pub fn map_env_key(key: &str) -> String {
    // Nested specialist sections first: `specialists_safety_model`.
    for section in ["safety", "analytics", "alerting"] {
        let prefix = format!("specialists_{section}_");
        if let Some(rest) = key.strip_prefix(&prefix) {
            return format!("specialists.{section}.{rest}");
        }
    }

    for section in ["agent", "routing", "coordinator"] {
        let prefix = format!("{section}_");
        if let Some(rest) = key.strip_prefix(&prefix) {
            return format!("{section}.{rest}");
        }
    }

    key.to_string()
}
