// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Hawk request router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use hawk_core::Category;
use serde::{Deserialize, Serialize};

/// Top-level Hawk configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to the values
/// the router ships with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HawkConfig {
    /// Process identity and logging.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Keyword routing rules.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Coordinator model and dispatch settings.
    #[serde(default)]
    pub coordinator: CoordinatorConfig,

    /// Specialist agent profiles, one per category.
    #[serde(default)]
    pub specialists: SpecialistsConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name used in logs.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "hawk".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Keyword routing rules used by the request classifier.
///
/// Terms are matched as substrings of the lowercased request. A term may
/// appear in more than one list; the default lists share `emergency`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Category chosen when no keyword matches at all.
    #[serde(default = "default_fallback_category")]
    pub fallback_category: Category,

    /// Trigger terms for the safety category.
    #[serde(default = "default_safety_keywords")]
    pub safety_keywords: Vec<String>,

    /// Trigger terms for the analytics category.
    #[serde(default = "default_analytics_keywords")]
    pub analytics_keywords: Vec<String>,

    /// Trigger terms for the alerting category.
    #[serde(default = "default_alert_keywords")]
    pub alert_keywords: Vec<String>,
}

impl RoutingConfig {
    /// The configured keyword list for a category.
    pub fn keywords_for(&self, category: Category) -> &[String] {
        match category {
            Category::Safety => &self.safety_keywords,
            Category::Analytics => &self.analytics_keywords,
            Category::Alerting => &self.alert_keywords,
        }
    }

    /// Config key holding a category's keyword list (for error messages).
    pub fn key_for(category: Category) -> &'static str {
        match category {
            Category::Safety => "routing.safety_keywords",
            Category::Analytics => "routing.analytics_keywords",
            Category::Alerting => "routing.alert_keywords",
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            fallback_category: default_fallback_category(),
            safety_keywords: default_safety_keywords(),
            analytics_keywords: default_analytics_keywords(),
            alert_keywords: default_alert_keywords(),
        }
    }
}

fn default_fallback_category() -> Category {
    Category::Safety
}

fn strings(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

fn default_safety_keywords() -> Vec<String> {
    strings(&[
        "crowd",
        "density",
        "exit",
        "emergency",
        "evacuation",
        "weather",
        "risk",
        "hazard",
        "incident",
        "safety",
        "danger",
        "capacity",
    ])
}

fn default_analytics_keywords() -> Vec<String> {
    strings(&[
        "pattern",
        "trend",
        "historical",
        "predict",
        "anomaly",
        "analysis",
        "statistics",
        "data",
        "metrics",
        "performance",
    ])
}

fn default_alert_keywords() -> Vec<String> {
    strings(&[
        "alert",
        "priority",
        "response",
        "escalate",
        "urgent",
        "critical",
        "emergency",
        "notification",
        "protocol",
    ])
}

/// Coordinator settings: the model that analyzes and synthesizes, and how
/// specialists are dispatched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CoordinatorConfig {
    /// Model used for request analysis and response synthesis.
    #[serde(default = "default_coordinator_model")]
    pub model: String,

    /// System instruction for the coordinator model.
    #[serde(default = "default_coordinator_instruction")]
    pub system_instruction: String,

    /// Upper bound on a single specialist call, in seconds.
    #[serde(default = "default_specialist_timeout_secs")]
    pub specialist_timeout_secs: u64,

    /// Skip the model analysis step and route on keywords alone.
    #[serde(default)]
    pub keyword_routing_only: bool,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            model: default_coordinator_model(),
            system_instruction: default_coordinator_instruction(),
            specialist_timeout_secs: default_specialist_timeout_secs(),
            keyword_routing_only: false,
        }
    }
}

fn default_coordinator_model() -> String {
    "gemini-1.5-pro".to_string()
}

fn default_coordinator_instruction() -> String {
    "You are the Hawk coordinator for event safety monitoring. Route requests to the \
     safety_monitoring, data_analytics and alert_management specialists and combine \
     their answers into one actionable response."
        .to_string()
}

fn default_specialist_timeout_secs() -> u64 {
    30
}

/// One profile per category.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SpecialistsConfig {
    #[serde(default = "SpecialistConfig::safety")]
    pub safety: SpecialistConfig,

    #[serde(default = "SpecialistConfig::analytics")]
    pub analytics: SpecialistConfig,

    #[serde(default = "SpecialistConfig::alerting")]
    pub alerting: SpecialistConfig,
}

impl SpecialistsConfig {
    /// The profile for a category.
    pub fn get(&self, category: Category) -> &SpecialistConfig {
        match category {
            Category::Safety => &self.safety,
            Category::Analytics => &self.analytics,
            Category::Alerting => &self.alerting,
        }
    }
}

impl Default for SpecialistsConfig {
    fn default() -> Self {
        Self {
            safety: SpecialistConfig::safety(),
            analytics: SpecialistConfig::analytics(),
            alerting: SpecialistConfig::alerting(),
        }
    }
}

/// Profile of a specialist agent.
///
/// Through the Figment loaders a partial `[specialists.*]` table is merged
/// over the built-in profile. Deserializing with `toml::from_str` directly
/// requires `name` and `system_instruction`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SpecialistConfig {
    /// Display name.
    pub name: String,

    /// One-line description of the specialist's remit.
    #[serde(default)]
    pub description: String,

    /// Capability tags, informational only.
    #[serde(default)]
    pub capabilities: Vec<String>,

    /// Model identifier used for this specialist's calls.
    #[serde(default = "default_specialist_model")]
    pub model: String,

    /// System instruction sent with every call.
    pub system_instruction: String,

    /// Expected latency in seconds. Informational; the hard bound is
    /// `coordinator.specialist_timeout_secs`.
    #[serde(default = "default_response_time_target")]
    pub response_time_target_secs: f64,

    /// 1 (highest) to 5 (lowest).
    #[serde(default = "default_priority_level")]
    pub priority_level: u8,
}

fn default_specialist_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_response_time_target() -> f64 {
    5.0
}

fn default_priority_level() -> u8 {
    3
}

impl SpecialistConfig {
    fn safety() -> Self {
        Self {
            name: "Safety Monitoring Agent".to_string(),
            description: "Real-time safety assessment and risk monitoring".to_string(),
            capabilities: strings(&[
                "crowd_density_analysis",
                "weather_risk_assessment",
                "infrastructure_safety_check",
                "emergency_exit_evaluation",
            ]),
            model: default_specialist_model(),
            system_instruction: "You are a safety monitoring specialist for live events. \
                                 Report risk levels as LOW, MEDIUM, HIGH or CRITICAL."
                .to_string(),
            response_time_target_secs: 2.0,
            priority_level: 1,
        }
    }

    fn analytics() -> Self {
        Self {
            name: "Data Analytics Agent".to_string(),
            description: "Pattern analysis and predictive modeling".to_string(),
            capabilities: strings(&[
                "historical_pattern_analysis",
                "anomaly_detection",
                "trend_prediction",
                "statistical_analysis",
            ]),
            model: default_specialist_model(),
            system_instruction: "You are a data analytics specialist for live events. \
                                 Identify patterns and anomalies and state your confidence."
                .to_string(),
            response_time_target_secs: 5.0,
            priority_level: 2,
        }
    }

    fn alerting() -> Self {
        Self {
            name: "Alert Management Agent".to_string(),
            description: "Emergency response and alert coordination".to_string(),
            capabilities: strings(&[
                "alert_prioritization",
                "response_plan_generation",
                "escalation_management",
                "resource_coordination",
            ]),
            model: default_specialist_model(),
            system_instruction: "You are an alert management specialist for live events. \
                                 Assign priorities P1 to P4 and say whether to escalate."
                .to_string(),
            response_time_target_secs: 1.0,
            priority_level: 1,
        }
    }
}
