// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Hawk request router.
//!
//! Layered TOML + environment configuration. Unknown keys are rejected,
//! values are validated after loading, and failures are reported as miette
//! diagnostics with "did you mean" hints.
//!
//! # Usage
//!
//! ```no_run
//! use hawk_config::load_and_validate;
//!
//! let Ok(config) = load_and_validate() else { return };
//! println!("fallback category: {}", config.routing.fallback_category);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::HawkConfig;

/// Load from `/etc/hawk`, the user config dir, `./hawk.toml` and `HAWK_*`
/// env vars, then validate.
pub fn load_and_validate() -> Result<HawkConfig, Vec<ConfigError>> {
    checked(loader::load_config(), || {
        loader::config_file_paths()
            .iter()
            .filter_map(|path| read_source(path))
            .collect()
    })
}

/// Load an explicit file (plus env overrides) and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<HawkConfig, Vec<ConfigError>> {
    checked(loader::load_config_from_path(path), || {
        read_source(path).into_iter().collect()
    })
}

/// Load a TOML string and validate it. No files or env vars are consulted.
pub fn load_and_validate_str(toml_content: &str) -> Result<HawkConfig, Vec<ConfigError>> {
    checked(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// Validate a loaded config, or turn the figment error into diagnostics.
/// `sources` is only read on failure, for span labels.
fn checked(
    loaded: Result<HawkConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<HawkConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => validation::validate_config(&config).map(|()| config),
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

fn read_source(path: &Path) -> Option<(String, String)> {
    let content = std::fs::read_to_string(path).ok()?;
    let name = std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string();
    Some((name, content))
}
