// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Hawk integration tests.
//!
//! Provides a mock generative-text service and a harness that wires it into
//! a [`hawk_agent::Coordinator`], so coordinator tests run without a model.
//!
//! # Components
//!
//! - [`MockTextService`] - scripted responses, injected errors, request capture
//! - [`TestHarness`] - coordinator plus mock, built from a config

pub mod harness;
pub mod mock_service;

pub use harness::TestHarness;
pub use mock_service::MockTextService;
