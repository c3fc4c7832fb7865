// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reading a language model's routing analysis.
//!
//! The coordinator asks the model for a JSON routing decision. Model output
//! is untrusted: it may be fenced in Markdown, wrapped in prose, or not JSON
//! at all. [`resolve_analysis`] turns it into a [`RoutingOutcome`] that says
//! which path was taken, so callers match on it instead of catching errors.

use hawk_core::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::classifier::{ClassificationResult, RequestClassifier};

/// Routing decision as emitted by the coordinator model.
///
/// Only `required_agents` is mandatory; the descriptive fields default to
/// empty when the model leaves them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestAnalysis {
    /// e.g. `safety_assessment`, `data_analysis`, `alert_management`, `general_query`.
    #[serde(default)]
    pub request_type: String,

    /// `simple`, `moderate` or `complex`.
    #[serde(default)]
    pub complexity: String,

    /// Specialist agent ids (`safety_monitoring`, `data_analytics`, `alert_management`).
    pub required_agents: Vec<String>,

    /// `low`, `medium`, `high` or `critical`.
    #[serde(default)]
    pub priority: String,

    /// Expected response time in seconds.
    #[serde(default)]
    pub expected_response_time: f64,

    #[serde(default)]
    pub reasoning: String,
}

impl RequestAnalysis {
    /// Categories named in `required_agents`, in order, without duplicates.
    /// Unknown agent ids are skipped.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for id in &self.required_agents {
            match Category::from_agent_id(id) {
                Some(c) if !categories.contains(&c) => categories.push(c),
                Some(_) => {}
                None => warn!(agent = id.as_str(), "ignoring unknown specialist agent id"),
            }
        }
        categories
    }
}

/// Which routing path produced the decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "path", content = "detail", rename_all = "lowercase")]
pub enum RoutingOutcome {
    /// The model's JSON analysis parsed.
    Structured(RequestAnalysis),
    /// The analysis was unusable; keyword classification decided instead.
    Fallback(ClassificationResult),
}

impl RoutingOutcome {
    /// Categories to dispatch, in order.
    ///
    /// For a structured analysis this can be empty if the model named no
    /// known specialist.
    pub fn categories(&self) -> Vec<Category> {
        match self {
            RoutingOutcome::Structured(analysis) => analysis.categories(),
            RoutingOutcome::Fallback(result) => vec![result.primary_category()],
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RoutingOutcome::Fallback(_))
    }

    /// Short label for logs and reports.
    pub fn path(&self) -> &'static str {
        match self {
            RoutingOutcome::Structured(_) => "structured",
            RoutingOutcome::Fallback(_) => "fallback",
        }
    }
}

/// Why a model analysis could not be used.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no JSON object found in model output")]
    NoJsonObject,

    #[error("malformed routing analysis: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Locate the JSON object in model output.
///
/// Strips surrounding whitespace and a Markdown code fence (```` ```json ````
/// or bare ```` ``` ````), then takes the span from the first `{` to the
/// last `}`.
pub fn extract_json(text: &str) -> Option<&str> {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```") {
        let rest = rest
            .strip_prefix("json")
            .or_else(|| rest.strip_prefix("JSON"))
            .unwrap_or(rest);
        body = rest.trim_end().strip_suffix("```").unwrap_or(rest).trim();
    }

    let start = body.find('{')?;
    let end = body.rfind('}')?;
    (start < end).then(|| &body[start..=end])
}

/// Parse a routing analysis out of raw model output.
pub fn parse_analysis(text: &str) -> Result<RequestAnalysis, AnalysisError> {
    let json = extract_json(text).ok_or(AnalysisError::NoJsonObject)?;
    Ok(serde_json::from_str(json)?)
}

/// Turn model output into a routing outcome, classifying `request` by
/// keywords when the output cannot be parsed.
pub fn resolve_analysis(
    model_output: &str,
    classifier: &RequestClassifier,
    request: &str,
) -> RoutingOutcome {
    match parse_analysis(model_output) {
        Ok(analysis) => {
            info!(
                request_type = analysis.request_type.as_str(),
                agents = ?analysis.required_agents,
                "using model routing analysis"
            );
            RoutingOutcome::Structured(analysis)
        }
        Err(e) => {
            let result = classifier.classify(request);
            warn!(
                error = %e,
                primary = %result.primary_category(),
                "model analysis unusable, falling back to keyword routing"
            );
            RoutingOutcome::Fallback(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    const ANALYSIS: &str = r#"{
        "request_type": "safety_assessment",
        "complexity": "moderate",
        "required_agents": ["safety_monitoring", "alert_management"],
        "priority": "high",
        "expected_response_time": 3,
        "reasoning": "crowd at capacity near an exit"
    }"#;

    #[test]
    fn extract_plain_object() {
        assert_eq!(extract_json(r#"{"a":1}"#), Some(r#"{"a":1}"#));
    }

    #[test]
    fn extract_from_json_fence() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn extract_from_bare_fence_and_prose() {
        let text = "Here you go:\n```\n{\"a\": {\"b\": 2}}\n```\nHope this helps.";
        assert_eq!(extract_json(text), Some("{\"a\": {\"b\": 2}}"));
    }

    #[test]
    fn extract_none_without_braces() {
        assert_eq!(extract_json("I cannot route this."), None);
        assert_eq!(extract_json("} backwards {"), None);
        assert_eq!(extract_json(""), None);
    }

    #[test]
    fn parse_full_analysis() {
        let analysis = parse_analysis(ANALYSIS).unwrap();
        assert_eq!(analysis.request_type, "safety_assessment");
        assert_eq!(analysis.expected_response_time, 3.0);
        assert_eq!(
            analysis.categories(),
            vec![Category::Safety, Category::Alerting]
        );
    }

    #[test]
    fn parse_minimal_analysis_defaults_fields() {
        let analysis = parse_analysis(r#"{"required_agents": ["data_analytics"]}"#).unwrap();
        assert!(analysis.request_type.is_empty());
        assert_eq!(analysis.expected_response_time, 0.0);
        assert_eq!(analysis.categories(), vec![Category::Analytics]);
    }

    #[test]
    fn parse_rejects_missing_agents() {
        let err = parse_analysis(r#"{"request_type": "general_query"}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Malformed(_)));
    }

    #[test]
    fn categories_skip_unknown_and_duplicates() {
        let analysis = RequestAnalysis {
            request_type: String::new(),
            complexity: String::new(),
            required_agents: vec![
                "weather_bot".into(),
                "data_analytics".into(),
                "DATA_ANALYTICS".into(),
                "safety_monitoring".into(),
            ],
            priority: String::new(),
            expected_response_time: 0.0,
            reasoning: String::new(),
        };
        assert_eq!(
            analysis.categories(),
            vec![Category::Analytics, Category::Safety]
        );
    }

    #[test]
    fn resolve_structured_when_json_parses() {
        let classifier = RequestClassifier::default();
        let outcome = resolve_analysis(
            &format!("```json\n{ANALYSIS}\n```"),
            &classifier,
            "crowd capacity exceeded at main exit",
        );
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.path(), "structured");
        assert_eq!(
            outcome.categories(),
            vec![Category::Safety, Category::Alerting]
        );
    }

    #[traced_test]
    #[test]
    fn resolve_falls_back_to_keywords() {
        let classifier = RequestClassifier::default();
        let outcome = resolve_analysis(
            "Sure! The analytics agent should handle this.",
            &classifier,
            "unusual pattern in historical data this week",
        );
        match &outcome {
            RoutingOutcome::Fallback(result) => {
                assert_eq!(result.primary_category(), Category::Analytics);
            }
            other => panic!("expected fallback, got {other:?}"),
        }
        assert_eq!(outcome.categories(), vec![Category::Analytics]);
        assert!(logs_contain("falling back to keyword routing"));
    }

    #[test]
    fn outcome_serializes_with_path_tag() {
        let classifier = RequestClassifier::default();
        let outcome = resolve_analysis("not json", &classifier, "");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["path"], "fallback");
        assert_eq!(json["detail"]["primary_category"], "safety");
    }
}
