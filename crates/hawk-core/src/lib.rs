// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Hawk request router.
//!
//! This crate provides the foundational types shared across the workspace:
//! the [`Category`] a request can be routed to, the [`HawkError`] type, and
//! the [`GenerativeTextService`] contract that coordinates with an external
//! language model.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::HawkError;
pub use traits::GenerativeTextService;
pub use types::{Category, GenerationRequest, GenerationResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hawk_error_has_all_variants() {
        let _invalid = HawkError::InvalidArgument("test".into());
        let _config = HawkError::Config("test".into());
        let _service = HawkError::Service {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _timeout = HawkError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _internal = HawkError::Internal("test".into());
    }

    #[test]
    fn error_messages_are_prefixed() {
        let err = HawkError::InvalidArgument("text must not be null".into());
        assert_eq!(err.to_string(), "invalid argument: text must not be null");

        let err = HawkError::Timeout {
            duration: std::time::Duration::from_secs(2),
        };
        assert_eq!(err.to_string(), "operation timed out after 2s");
    }

    #[test]
    fn service_trait_is_object_safe() {
        fn _assert_dyn(_: &dyn GenerativeTextService) {}
    }
}
