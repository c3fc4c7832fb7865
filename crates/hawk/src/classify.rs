// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hawk classify` - keyword classification from the command line.

use std::fmt::Write as _;
use std::io::Read;

use hawk_core::{Category, HawkError};
use hawk_router::{ClassificationResult, RequestClassifier};

/// Join positional arguments, or read all of `stdin` when there are none.
pub fn request_text(args: &[String], mut stdin: impl Read) -> Result<String, HawkError> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .map_err(|e| HawkError::InvalidArgument(format!("failed to read request from stdin: {e}")))?;
    Ok(text.trim_end().to_string())
}

/// Human-readable summary, one line per category.
pub fn render(result: &ClassificationResult) -> String {
    let mut out = String::new();
    let marker = if result.is_fallback() { " (fallback)" } else { "" };
    let _ = writeln!(out, "primary:    {}{marker}", result.primary_category());
    let _ = writeln!(out, "confidence: {:.2}", result.confidence());
    for category in Category::PRIORITY {
        let terms = result.matched_terms(category);
        let _ = write!(out, "{:<10}  {}", category.to_string(), result.score(category));
        if !terms.is_empty() {
            let _ = write!(out, "  {}", terms.join(", "));
        }
        out.push('\n');
    }
    out
}

pub fn run(classifier: &RequestClassifier, text: &str, json: bool) -> Result<String, HawkError> {
    let result = classifier.classify(text);
    if json {
        serde_json::to_string_pretty(&result)
            .map_err(|e| HawkError::Internal(format!("serialize classification: {e}")))
    } else {
        Ok(render(&result))
    }
}
