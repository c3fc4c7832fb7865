// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Unknown keys and unknown enum values (a misspelled `fallback_category`,
//! for instance) get a "did you mean?" hint based on Jaro-Winkler
//! similarity, plus a source span when the offending file can be found.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with diagnostic information for miette.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(hawk::config::unknown_key),
        help("{}", format_suggestion_help(suggestion.as_deref(), "valid keys", valid_keys))
    )]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        valid_keys: String,
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A value is not one of the accepted variants (e.g. an unknown category).
    #[error("unknown value `{value}` for key `{key}`")]
    #[diagnostic(
        code(hawk::config::unknown_value),
        help("{}", format_suggestion_help(suggestion.as_deref(), "expected one of", valid_values))
    )]
    UnknownValue {
        key: String,
        value: String,
        suggestion: Option<String>,
        valid_values: String,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(hawk::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
    },

    /// A required configuration key is missing.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(hawk::config::missing_key),
        help("add `{key} = <value>` to your hawk.toml")
    )]
    MissingKey { key: String },

    /// A semantic validation failure (bad keyword list, out-of-range value).
    #[error("validation error: {message}")]
    #[diagnostic(code(hawk::config::validation))]
    Validation { message: String },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(hawk::config::other))]
    Other(String),
}

impl ConfigError {
    /// Shorthand for a [`ConfigError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        ConfigError::Validation {
            message: message.into(),
        }
    }
}

fn format_suggestion_help(suggestion: Option<&str>, label: &str, choices: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? {label}: {choices}"),
        None => format!("{label}: {choices}"),
    }
}

/// Convert a `figment::Error` into a list of `ConfigError` diagnostics.
///
/// A single figment error may carry several underlying errors; each one is
/// converted independently.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| {
            let dotted = error
                .path
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(".");

            match &error.kind {
                Kind::UnknownField(field, expected) => {
                    let valid_keys: Vec<&str> = expected.to_vec();
                    let (span, src) = find_source_span(&error, field, toml_sources);
                    ConfigError::UnknownKey {
                        key: field.clone(),
                        suggestion: suggest_key(field, &valid_keys),
                        valid_keys: valid_keys.join(", "),
                        span,
                        src,
                    }
                }
                Kind::UnknownVariant(value, expected) => {
                    let valid: Vec<&str> = expected.to_vec();
                    ConfigError::UnknownValue {
                        key: dotted,
                        value: value.clone(),
                        suggestion: suggest_key(value, &valid),
                        valid_values: valid.join(", "),
                    }
                }
                Kind::MissingField(field) => ConfigError::MissingKey {
                    key: if dotted.is_empty() {
                        field.to_string()
                    } else {
                        format!("{dotted}.{field}")
                    },
                },
                Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                    key: dotted,
                    detail: format!("found {actual}, expected {expected}"),
                    expected: expected.to_string(),
                },
                _ => ConfigError::Other(error.to_string()),
            }
        })
        .collect()
}

/// Locate the offending key in whichever TOML file the error came from.
fn find_source_span(
    error: &figment::error::Error,
    field: &str,
    toml_sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let source_path = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|s| match s {
            figment::Source::File(path) => Some(path.display().to_string()),
            _ => None,
        });

    // Inline strings carry no file metadata; fall back to a lone source.
    let source = match source_path {
        Some(path) => toml_sources.iter().find(|(p, _)| *p == path),
        None if toml_sources.len() == 1 => toml_sources.first(),
        None => None,
    };

    let Some((path, content)) = source else {
        return (None, None);
    };

    let section: Vec<String> = error.path.iter().map(|s| s.to_string()).collect();
    match find_key_offset(content, &section, field) {
        Some(offset) => (
            Some(SourceSpan::new(offset.into(), field.len())),
            Some(NamedSource::new(path, content.clone())),
        ),
        None => (None, None),
    }
}

/// Find the byte offset of a key in TOML content, relative to its table.
///
/// `path = ["specialists", "safety"]` searches after a `[specialists.safety]`
/// header. An empty path searches from the start of the document.
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let search_start = if path.is_empty() {
        0
    } else {
        let header = format!("[{}]", path.join("."));
        content.find(&header).map(|pos| pos + header.len())?
    };

    let mut byte_offset = search_start;
    for line in content[search_start..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        // Stop at the next table header.
        if !path.is_empty() && trimmed.starts_with('[') {
            return None;
        }
        if let Some(after) = trimmed.strip_prefix(field) {
            let after = after.trim_start_matches([' ', '\t']);
            if after.starts_with('=') {
                return Some(byte_offset + (line.len() - trimmed.len()));
            }
        }
        byte_offset += line.len();
    }

    None
}

/// Suggest the closest valid key using Jaro-Winkler string similarity.
///
/// Returns `None` when nothing scores above the similarity threshold.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|&key| (key, strsim::jaro_winkler(unknown, key)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(key, _)| key.to_string())
}

/// Render a list of `ConfigError`s to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}
