// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks the semantic constraints serde cannot express: keyword lists the
//! classifier can actually score against, and sane coordinator limits.

use std::collections::HashSet;

use hawk_core::Category;

use crate::diagnostic::ConfigError;
use crate::model::{HawkConfig, RoutingConfig};

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or every collected error
/// (does not fail fast).
pub fn validate_config(config: &HawkConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    validate_routing(&config.routing, &mut errors);

    if config.coordinator.model.trim().is_empty() {
        errors.push(ConfigError::validation("coordinator.model must not be empty"));
    }

    if config.coordinator.specialist_timeout_secs == 0 {
        errors.push(ConfigError::validation(
            "coordinator.specialist_timeout_secs must be at least 1",
        ));
    }

    for category in Category::PRIORITY {
        let specialist = config.specialists.get(category);
        let section = format!("specialists.{category}");

        if specialist.model.trim().is_empty() {
            errors.push(ConfigError::validation(format!(
                "{section}.model must not be empty"
            )));
        }

        if !(1..=5).contains(&specialist.priority_level) {
            errors.push(ConfigError::validation(format!(
                "{section}.priority_level must be between 1 and 5, got {}",
                specialist.priority_level
            )));
        }

        let target = specialist.response_time_target_secs;
        if target.is_nan() || target <= 0.0 {
            errors.push(ConfigError::validation(format!(
                "{section}.response_time_target_secs must be positive, got {target}"
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_routing(routing: &RoutingConfig, errors: &mut Vec<ConfigError>) {
    for category in Category::PRIORITY {
        let key = RoutingConfig::key_for(category);
        let terms = routing.keywords_for(category);

        if terms.is_empty() {
            errors.push(ConfigError::validation(format!("{key} must not be empty")));
            continue;
        }

        let mut seen = HashSet::new();
        for (i, term) in terms.iter().enumerate() {
            // A blank term is a substring of every request.
            if term.trim().is_empty() {
                errors.push(ConfigError::validation(format!(
                    "{key}[{i}] must not be blank"
                )));
                continue;
            }

            if term.to_lowercase() != *term {
                errors.push(ConfigError::validation(format!(
                    "{key}[{i}] `{term}` must be lowercase"
                )));
            }

            if !seen.insert(term.as_str()) {
                errors.push(ConfigError::validation(format!(
                    "duplicate term `{term}` in {key}"
                )));
            }
        }
    }
}
