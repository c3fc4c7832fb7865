// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generative-text service contract (hosted LLM behind an opaque API).

use async_trait::async_trait;

use crate::error::HawkError;
use crate::types::{GenerationRequest, GenerationResponse};

/// A hosted model that turns a prompt plus system instruction into text.
///
/// Implementations are fallible and their output is untrusted: callers must
/// not assume the text is well-formed JSON or even non-empty.
#[async_trait]
pub trait GenerativeTextService: Send + Sync + 'static {
    /// Returns the human-readable name of this service instance.
    fn name(&self) -> &str;

    /// Sends a single generation request and returns the full completion.
    async fn generate(&self, request: GenerationRequest)
    -> Result<GenerationResponse, HawkError>;
}
