// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contracts for external collaborators.
//!
//! Collaborators use `#[async_trait]` so they can be held as
//! `Arc<dyn Trait>` and swapped for mocks in tests.

pub mod generation;

pub use generation::GenerativeTextService;
