// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The coordinator pipeline: analyze, plan, dispatch, synthesize.
//!
//! Routing prefers the coordinator model's JSON analysis. When the model
//! call fails or its output is unusable, keyword classification decides.
//! Specialists run concurrently, each bounded by
//! `coordinator.specialist_timeout_secs`; a failing specialist becomes a
//! [`SpecialistOutcome::Failed`] entry rather than failing the request.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use hawk_config::model::{CoordinatorConfig, HawkConfig, SpecialistsConfig};
use hawk_core::{Category, GenerationRequest, GenerativeTextService, HawkError};
use hawk_router::{RequestClassifier, RoutingOutcome, resolve_analysis};

use crate::specialist::{SpecialistOutcome, SpecialistResponse, SpecialistTask};

/// Everything produced while handling one request.
#[derive(Debug, Clone, Serialize)]
pub struct CoordinatorReport {
    pub request_id: Uuid,
    pub request: String,
    pub routing: RoutingOutcome,
    pub specialist_responses: Vec<SpecialistResponse>,
    pub final_response: String,
    /// Agent ids in dispatch order.
    pub agents_used: Vec<&'static str>,
    pub processing_time_ms: u64,
    pub completed_at: DateTime<Utc>,
}

/// Routes requests to specialists and combines their answers.
pub struct Coordinator {
    classifier: RequestClassifier,
    service: Arc<dyn GenerativeTextService>,
    config: CoordinatorConfig,
    specialists: SpecialistsConfig,
}

impl Coordinator {
    pub fn new(config: &HawkConfig, service: Arc<dyn GenerativeTextService>) -> Self {
        info!(
            service = service.name(),
            model = config.coordinator.model.as_str(),
            timeout_secs = config.coordinator.specialist_timeout_secs,
            keyword_only = config.coordinator.keyword_routing_only,
            "coordinator initialized"
        );
        Self {
            classifier: RequestClassifier::from_config(&config.routing),
            service,
            config: config.coordinator.clone(),
            specialists: config.specialists.clone(),
        }
    }

    pub fn classifier(&self) -> &RequestClassifier {
        &self.classifier
    }

    fn specialist_timeout(&self) -> Duration {
        Duration::from_secs(self.config.specialist_timeout_secs)
    }

    /// Decide how to route `request`.
    ///
    /// Never fails: a service error or unusable analysis yields
    /// [`RoutingOutcome::Fallback`].
    pub async fn analyze_request(&self, request: &str) -> RoutingOutcome {
        if self.config.keyword_routing_only {
            let result = self.classifier.classify(request);
            debug!(
                primary = %result.primary_category(),
                "keyword-only routing"
            );
            return RoutingOutcome::Fallback(result);
        }

        let generation = GenerationRequest {
            model: self.config.model.clone(),
            system_instruction: self.config.system_instruction.clone(),
            prompt: analysis_prompt(request),
        };

        match self.service.generate(generation).await {
            Ok(response) => resolve_analysis(&response.text, &self.classifier, request),
            Err(e) => {
                let result = self.classifier.classify(request);
                warn!(
                    error = %e,
                    primary = %result.primary_category(),
                    "routing analysis call failed, falling back to keyword routing"
                );
                RoutingOutcome::Fallback(result)
            }
        }
    }

    /// Categories to dispatch for `outcome`.
    ///
    /// A structured analysis naming no known specialist is replaced by the
    /// keyword primary category, so the plan is never empty.
    pub fn plan(&self, request: &str, outcome: &RoutingOutcome) -> Vec<Category> {
        let categories = outcome.categories();
        if !categories.is_empty() {
            return categories;
        }
        let primary = self.classifier.classify(request).primary_category();
        warn!(
            primary = %primary,
            "model analysis named no known specialist, using keyword primary"
        );
        vec![primary]
    }

    /// Run the specialists for `categories` concurrently.
    ///
    /// Responses come back in the order of `categories`.
    pub async fn route_to_specialists(
        &self,
        request: &str,
        categories: &[Category],
    ) -> Vec<SpecialistResponse> {
        join_all(
            categories
                .iter()
                .map(|&category| self.run_specialist(request, category)),
        )
        .await
    }

    async fn run_specialist(&self, request: &str, category: Category) -> SpecialistResponse {
        let task = SpecialistTask::select(category, request);
        let agent = category.agent_id();
        let started = Instant::now();

        let outcome = if task.needs_model() {
            let profile = self.specialists.get(category);
            let generation = GenerationRequest {
                model: profile.model.clone(),
                system_instruction: profile.system_instruction.clone(),
                prompt: task.prompt(request),
            };
            let timeout = self.specialist_timeout();

            match tokio::time::timeout(timeout, self.service.generate(generation)).await {
                Ok(Ok(response)) => SpecialistOutcome::Completed(response.text),
                Ok(Err(e)) => {
                    warn!(agent, error = %e, "specialist execution failed");
                    SpecialistOutcome::Failed(format!("specialist execution failed: {e}"))
                }
                Err(_) => {
                    let error = HawkError::Timeout { duration: timeout };
                    warn!(agent, timeout_secs = timeout.as_secs(), "specialist timed out");
                    SpecialistOutcome::Failed(error.to_string())
                }
            }
        } else {
            SpecialistOutcome::Completed(task.local_answer(request))
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        debug!(agent, ?task, elapsed_ms, ok = outcome.is_completed(), "specialist finished");

        SpecialistResponse {
            category,
            agent,
            task,
            outcome,
            elapsed_ms,
        }
    }

    /// Ask the coordinator model to merge the specialist responses.
    pub async fn synthesize(
        &self,
        request: &str,
        routing: &RoutingOutcome,
        responses: &[SpecialistResponse],
    ) -> Result<String, HawkError> {
        let generation = GenerationRequest {
            model: self.config.model.clone(),
            system_instruction: self.config.system_instruction.clone(),
            prompt: synthesis_prompt(request, routing, responses)?,
        };
        let response = self.service.generate(generation).await?;
        if response.text.trim().is_empty() {
            return Err(HawkError::Service {
                message: "coordinator model returned an empty synthesis".to_string(),
                source: None,
            });
        }
        Ok(response.text)
    }

    /// Handle one request end to end.
    ///
    /// Only synthesis errors propagate; routing and specialist failures are
    /// absorbed into the report.
    pub async fn process_request(&self, request: &str) -> Result<CoordinatorReport, HawkError> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();

        let routing = self.analyze_request(request).await;
        let categories = self.plan(request, &routing);
        info!(
            %request_id,
            path = routing.path(),
            agents = ?categories,
            "dispatching request"
        );

        let specialist_responses = self.route_to_specialists(request, &categories).await;
        let final_response = self
            .synthesize(request, &routing, &specialist_responses)
            .await?;

        let processing_time_ms = started.elapsed().as_millis() as u64;
        info!(%request_id, processing_time_ms, "request processed");

        Ok(CoordinatorReport {
            request_id,
            request: request.to_string(),
            routing,
            agents_used: categories.iter().map(|c| c.agent_id()).collect(),
            specialist_responses,
            final_response,
            processing_time_ms,
            completed_at: Utc::now(),
        })
    }
}

fn analysis_prompt(request: &str) -> String {
    format!(
        "Analyze this event-operations request and decide which specialists should handle it.\n\
         \n\
         Request: {request}\n\
         \n\
         Available specialists:\n\
         - safety_monitoring: crowd density, exits, weather, incidents\n\
         - data_analytics: historical patterns, trends, anomalies, metrics\n\
         - alert_management: alert prioritization, response plans, escalation\n\
         \n\
         Reply with one JSON object:\n\
         {{\n  \"request_type\": \"safety_assessment|data_analysis|alert_management|general_query\",\n  \
         \"complexity\": \"simple|moderate|complex\",\n  \
         \"required_agents\": [\"safety_monitoring\"],\n  \
         \"priority\": \"low|medium|high|critical\",\n  \
         \"expected_response_time\": 5,\n  \
         \"reasoning\": \"...\"\n}}"
    )
}

fn synthesis_prompt(
    request: &str,
    routing: &RoutingOutcome,
    responses: &[SpecialistResponse],
) -> Result<String, HawkError> {
    let routing_json = serde_json::to_string_pretty(routing)
        .map_err(|e| HawkError::Internal(format!("serialize routing: {e}")))?;
    let responses_json = serde_json::to_string_pretty(responses)
        .map_err(|e| HawkError::Internal(format!("serialize specialist responses: {e}")))?;

    Ok(format!(
        "Combine the specialist findings into one actionable answer for event staff.\n\
         \n\
         Original request: {request}\n\
         \n\
         Routing:\n{routing_json}\n\
         \n\
         Specialist responses:\n{responses_json}\n\
         \n\
         Give a summary, the immediate actions, the risk level and any follow-up. \
         Mention specialists that failed."
    ))
}
