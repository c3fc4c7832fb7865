// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request classification and routing for the Hawk coordinator.
//!
//! This crate provides:
//! - [`RequestClassifier`]: deterministic keyword scoring of free text into a
//!   [`Category`](hawk_core::Category) (no network, no state)
//! - [`RoutingOutcome`]: the result of reading a language model's routing
//!   analysis, falling back to keyword classification when it is unusable

pub mod analysis;
pub mod classifier;

pub use analysis::{
    extract_json, parse_analysis, resolve_analysis, AnalysisError, RequestAnalysis,
    RoutingOutcome,
};
pub use classifier::{ClassificationResult, KeywordSet, RequestClassifier};
