// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request coordination for Hawk.
//!
//! The [`Coordinator`] decides which specialists handle a request (model
//! analysis first, keyword classification as the fallback), runs them
//! concurrently against the generative-text service, and asks the
//! coordinator model to synthesize one answer.

pub mod coordinator;
pub mod specialist;

pub use coordinator::{Coordinator, CoordinatorReport};
pub use specialist::{SpecialistOutcome, SpecialistResponse, SpecialistTask};
