// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hawk route` - resolve a saved model analysis against a request.

use std::io::Read;
use std::path::Path;

use hawk_core::HawkError;
use hawk_router::{RequestClassifier, RoutingOutcome, resolve_analysis};

/// Read model output from `source`, where `-` means stdin.
pub fn read_analysis(source: &str, mut stdin: impl Read) -> Result<String, HawkError> {
    if source == "-" {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .map_err(|e| HawkError::InvalidArgument(format!("failed to read analysis from stdin: {e}")))?;
        return Ok(text);
    }
    std::fs::read_to_string(Path::new(source))
        .map_err(|e| HawkError::InvalidArgument(format!("failed to read analysis {source}: {e}")))
}

pub fn render(outcome: &RoutingOutcome) -> String {
    let agents: Vec<&str> = outcome.categories().iter().map(|c| c.agent_id()).collect();
    let mut out = format!("path:   {}\n", outcome.path());
    match outcome {
        RoutingOutcome::Structured(analysis) => {
            if !analysis.request_type.is_empty() {
                out.push_str(&format!("type:   {}\n", analysis.request_type));
            }
            if !analysis.priority.is_empty() {
                out.push_str(&format!("priority: {}\n", analysis.priority));
            }
        }
        RoutingOutcome::Fallback(result) => {
            out.push_str(&format!(
                "primary: {} (confidence {:.2})\n",
                result.primary_category(),
                result.confidence()
            ));
        }
    }
    if agents.is_empty() {
        out.push_str("agents: none recognised\n");
    } else {
        out.push_str(&format!("agents: {}\n", agents.join(", ")));
    }
    out
}

pub fn run(classifier: &RequestClassifier, request: &str, model_output: &str) -> String {
    render(&resolve_analysis(model_output, classifier, request))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn structured_output_lists_agents() {
        let classifier = RequestClassifier::default();
        let out = run(
            &classifier,
            "crowd at exit",
            r#"{"request_type": "safety_assessment", "priority": "high",
                "required_agents": ["safety_monitoring", "alert_management"]}"#,
        );
        assert!(out.starts_with("path:   structured\n"));
        assert!(out.contains("priority: high"));
        assert!(out.contains("agents: safety_monitoring, alert_management"));
    }

    #[test]
    fn unusable_output_falls_back() {
        let classifier = RequestClassifier::default();
        let out = run(&classifier, "fire alarm, urgent evacuation needed", "no idea");
        assert!(out.starts_with("path:   fallback\n"));
        assert!(out.contains("primary: safety (confidence 0.20)"));
        assert!(out.contains("agents: safety_monitoring"));
    }

    #[test]
    fn structured_without_known_agents() {
        let classifier = RequestClassifier::default();
        let out = run(&classifier, "x", r#"{"required_agents": ["pager"]}"#);
        assert!(out.contains("agents: none recognised"));
    }

    #[test]
    fn analysis_read_from_stdin_or_file() {
        assert_eq!(read_analysis("-", "{}".as_bytes()).unwrap(), "{}");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"required_agents\": []}}").unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(
            read_analysis(&path, std::io::empty()).unwrap(),
            "{\"required_agents\": []}"
        );
    }

    #[test]
    fn missing_file_is_invalid_argument() {
        let err = read_analysis("/nonexistent/analysis.json", std::io::empty()).unwrap_err();
        assert!(matches!(err, HawkError::InvalidArgument(_)));
    }
}
