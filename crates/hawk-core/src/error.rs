// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Hawk request router.

use thiserror::Error;

/// The primary error type used across the Hawk workspace.
#[derive(Debug, Error)]
pub enum HawkError {
    /// Input rejected before any work was done (e.g. a null request text).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors (invalid TOML, bad keyword lists, unknown categories).
    #[error("configuration error: {0}")]
    Config(String),

    /// Generative-text service errors (network failure, bad status, empty output).
    #[error("service error: {message}")]
    Service {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
