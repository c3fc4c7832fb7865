// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Specialist tasks and their results.

use hawk_core::Category;
use serde::Serialize;

/// The concrete job a specialist is given for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialistTask {
    CrowdDensity,
    WeatherRisk,
    /// Answered locally; no model call.
    GeneralSafety,
    HistoricalPatterns,
    AnomalyDetection,
    AlertPrioritization,
    ResponsePlan,
}

impl SpecialistTask {
    /// Pick the task for a category from cue words in the request.
    pub fn select(category: Category, request: &str) -> Self {
        let lower = request.to_lowercase();
        let has = |cue: &str| lower.contains(cue);

        match category {
            Category::Safety if has("crowd") => SpecialistTask::CrowdDensity,
            Category::Safety if has("weather") => SpecialistTask::WeatherRisk,
            Category::Safety => SpecialistTask::GeneralSafety,
            Category::Analytics if has("historical") || has("pattern") => {
                SpecialistTask::HistoricalPatterns
            }
            Category::Analytics => SpecialistTask::AnomalyDetection,
            Category::Alerting if has("prioritize") || has("alerts") => {
                SpecialistTask::AlertPrioritization
            }
            Category::Alerting => SpecialistTask::ResponsePlan,
        }
    }

    pub fn category(self) -> Category {
        match self {
            SpecialistTask::CrowdDensity
            | SpecialistTask::WeatherRisk
            | SpecialistTask::GeneralSafety => Category::Safety,
            SpecialistTask::HistoricalPatterns | SpecialistTask::AnomalyDetection => {
                Category::Analytics
            }
            SpecialistTask::AlertPrioritization | SpecialistTask::ResponsePlan => {
                Category::Alerting
            }
        }
    }

    /// Whether this task calls the generative-text service.
    pub fn needs_model(self) -> bool {
        self != SpecialistTask::GeneralSafety
    }

    /// Prompt sent to the specialist model.
    pub fn prompt(self, request: &str) -> String {
        let ask = match self {
            SpecialistTask::CrowdDensity => {
                "Assess crowd safety: size against venue capacity, available exits, time of day. \
                 Reply in JSON with risk_level, recommendations, monitoring_priority."
            }
            SpecialistTask::WeatherRisk => {
                "Assess weather risk for an outdoor event: heat, cold, wind, lightning. \
                 Reply in JSON with risk_level and precautions."
            }
            SpecialistTask::GeneralSafety => "Give a general safety assessment.",
            SpecialistTask::HistoricalPatterns => {
                "Analyze historical incident patterns: frequency, peak times, hotspots. \
                 Reply in JSON with patterns, risk_factors, predictions."
            }
            SpecialistTask::AnomalyDetection => {
                "Compare current metrics against normal baselines and flag anomalies. \
                 Reply in JSON with anomalies, severity, investigation_steps."
            }
            SpecialistTask::AlertPrioritization => {
                "Rank the alerts by urgency and impact, P1 to P4, with response times. \
                 Reply in JSON."
            }
            SpecialistTask::ResponsePlan => {
                "Produce a response plan: immediate actions, resources, communication, \
                 escalation criteria. Reply in JSON."
            }
        };
        format!("{ask}\n\nRequest: {request}")
    }

    /// Local answer for tasks that do not call a model.
    pub fn local_answer(self, request: &str) -> String {
        format!("General safety analysis for: {request}")
    }
}

/// What came back from one specialist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum SpecialistOutcome {
    Completed(String),
    /// Failure or timeout; the message is surfaced to synthesis.
    Failed(String),
}

impl SpecialistOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SpecialistOutcome::Completed(_))
    }
}

/// One specialist's contribution to a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialistResponse {
    pub category: Category,
    /// Specialist agent id, e.g. `safety_monitoring`.
    pub agent: &'static str,
    pub task: SpecialistTask,
    pub outcome: SpecialistOutcome,
    pub elapsed_ms: u64,
}
