// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end coordinator tests.
//!
//! `TestHarness` wires a [`MockTextService`] into a [`Coordinator`] built from
//! a [`HawkConfig`]. Tests script the mock, call `process()`, then inspect the
//! report and the captured requests.

use std::sync::Arc;
use std::time::Duration;

use hawk_agent::{Coordinator, CoordinatorReport};
use hawk_config::HawkConfig;
use hawk_core::{GenerativeTextService, HawkError};

use crate::mock_service::MockTextService;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    responses: Vec<String>,
    config: HawkConfig,
    delay: Option<Duration>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            responses: Vec::new(),
            config: HawkConfig::default(),
            delay: None,
        }
    }

    /// Set mock service replies, consumed in call order.
    pub fn with_mock_responses(mut self, responses: Vec<String>) -> Self {
        self.responses = responses;
        self
    }

    /// Replace the default configuration.
    pub fn with_config(mut self, config: HawkConfig) -> Self {
        self.config = config;
        self
    }

    /// Bound every specialist call to `secs` seconds.
    pub fn with_specialist_timeout(mut self, secs: u64) -> Self {
        self.config.coordinator.specialist_timeout_secs = secs;
        self
    }

    /// Skip the model analysis call and route by keywords only.
    pub fn keyword_routing_only(mut self) -> Self {
        self.config.coordinator.keyword_routing_only = true;
        self
    }

    /// Make every mock call sleep before replying.
    pub fn with_service_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn build(self) -> TestHarness {
        let mut service = MockTextService::with_responses(self.responses);
        if let Some(delay) = self.delay {
            service = service.with_delay(delay);
        }
        let service = Arc::new(service);
        let coordinator = Coordinator::new(
            &self.config,
            Arc::clone(&service) as Arc<dyn GenerativeTextService>,
        );

        TestHarness {
            service,
            coordinator,
            config: self.config,
        }
    }
}

/// A coordinator backed by a mock service.
pub struct TestHarness {
    /// The mock service shared with the coordinator.
    pub service: Arc<MockTextService>,
    pub coordinator: Coordinator,
    pub config: HawkConfig,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Run one request through the full coordinator pipeline.
    pub async fn process(&self, request: &str) -> Result<CoordinatorReport, HawkError> {
        self.coordinator.process_request(request).await
    }
}
