// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the Hawk workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Specialist category a request can be routed to.
///
/// Declaration order is the tie-break priority: when two categories share
/// the highest keyword score, the one declared first wins.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Crowd density, exits, weather and infrastructure risk.
    Safety,
    /// Historical patterns, anomalies and trend prediction.
    Analytics,
    /// Alert prioritisation, escalation and response plans.
    Alerting,
}

impl Category {
    /// All categories in tie-break priority order.
    pub const PRIORITY: [Category; 3] = [Category::Safety, Category::Analytics, Category::Alerting];

    /// Identifier of the specialist agent that handles this category.
    ///
    /// These are the names a language model is asked to emit in its
    /// `required_agents` list.
    pub fn agent_id(self) -> &'static str {
        match self {
            Category::Safety => "safety_monitoring",
            Category::Analytics => "data_analytics",
            Category::Alerting => "alert_management",
        }
    }

    /// Resolve a specialist agent identifier back to its category.
    pub fn from_agent_id(id: &str) -> Option<Category> {
        Self::PRIORITY
            .into_iter()
            .find(|c| c.agent_id().eq_ignore_ascii_case(id.trim()))
    }
}

/// A request to the generative-text service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier (e.g. "gemini-2.5-flash").
    pub model: String,
    /// System instruction framing the model's role.
    pub system_instruction: String,
    /// The user-facing prompt text.
    pub prompt: String,
}

/// A completion returned by the generative-text service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Raw completion text. Untrusted.
    pub text: String,
    /// Model that actually served the request.
    pub model: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn category_display_and_parse_round_trip() {
        for category in Category::iter() {
            let s = category.to_string();
            assert_eq!(Category::from_str(&s).unwrap(), category);
        }
        assert_eq!(Category::Safety.to_string(), "safety");
        assert_eq!(Category::Alerting.to_string(), "alerting");
    }

    #[test]
    fn iteration_order_matches_priority() {
        let iterated: Vec<Category> = Category::iter().collect();
        assert_eq!(iterated, Category::PRIORITY.to_vec());
        assert!(Category::Safety < Category::Analytics);
        assert!(Category::Analytics < Category::Alerting);
    }

    #[test]
    fn agent_ids_resolve_back() {
        for category in Category::iter() {
            assert_eq!(Category::from_agent_id(category.agent_id()), Some(category));
        }
        assert_eq!(
            Category::from_agent_id(" DATA_ANALYTICS "),
            Some(Category::Analytics)
        );
        assert_eq!(Category::from_agent_id("weather_bot"), None);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Analytics).unwrap();
        assert_eq!(json, "\"analytics\"");
        let parsed: Category = serde_json::from_str("\"alerting\"").unwrap();
        assert_eq!(parsed, Category::Alerting);
    }
}
