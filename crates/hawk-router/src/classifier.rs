// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-based request classification.
//!
//! Scores free text against one keyword list per [`Category`] and picks the
//! best match. Matching is substring containment on the lowercased text, not
//! whole-word matching: `data` matches inside `database`. Pure and
//! synchronous; safe to share across threads without locking.

use std::collections::BTreeMap;

use hawk_config::model::RoutingConfig;
use hawk_core::{Category, HawkError};
use serde::Serialize;
use tracing::debug;

/// Trigger terms per category, fixed at construction.
///
/// Every category has an entry (possibly empty). Terms are lowercased; blank
/// terms and repeats within one category are dropped, keeping the first
/// occurrence. The same term may appear under several categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    terms: BTreeMap<Category, Vec<String>>,
}

impl KeywordSet {
    /// Build a keyword set from `(category, terms)` pairs.
    ///
    /// Categories not mentioned get an empty list. A category given twice
    /// has its terms appended in order.
    pub fn new<I, T, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Category, T)>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: BTreeMap<Category, Vec<String>> =
            Category::PRIORITY.into_iter().map(|c| (c, Vec::new())).collect();

        for (category, list) in entries {
            let slot = terms.entry(category).or_default();
            for term in list {
                let term = term.as_ref().trim().to_lowercase();
                if !term.is_empty() && !slot.contains(&term) {
                    slot.push(term);
                }
            }
        }

        Self { terms }
    }

    /// Build the keyword set from routing configuration.
    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(
            Category::PRIORITY
                .into_iter()
                .map(|c| (c, config.keywords_for(c))),
        )
    }

    /// Terms for a category, in their configured order.
    pub fn terms(&self, category: Category) -> &[String] {
        self.terms.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::from_config(&RoutingConfig::default())
    }
}

/// Outcome of classifying one request.
///
/// Both maps contain every category. `scores[c]` always equals the length
/// of `matched_terms[c]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    primary_category: Category,
    scores: BTreeMap<Category, usize>,
    matched_terms: BTreeMap<Category, Vec<String>>,
    confidence: f64,
}

impl ClassificationResult {
    /// Category with the highest score, or the fallback when nothing matched.
    pub fn primary_category(&self) -> Category {
        self.primary_category
    }

    /// Number of distinct terms matched per category.
    pub fn scores(&self) -> &BTreeMap<Category, usize> {
        &self.scores
    }

    /// Score for a single category.
    pub fn score(&self, category: Category) -> usize {
        self.scores.get(&category).copied().unwrap_or(0)
    }

    /// Matched terms for a category, in keyword-list order.
    pub fn matched_terms(&self, category: Category) -> &[String] {
        self.matched_terms
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All matched terms, keyed by category.
    pub fn all_matched_terms(&self) -> &BTreeMap<Category, Vec<String>> {
        &self.matched_terms
    }

    /// Keyword density: highest score divided by the request's token count,
    /// capped at 1.0. A crude heuristic, not a calibrated probability.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Highest score across categories.
    pub fn max_score(&self) -> usize {
        self.scores.values().copied().max().unwrap_or(0)
    }

    /// True when no keyword matched and the primary category is the fallback.
    pub fn is_fallback(&self) -> bool {
        self.max_score() == 0
    }
}

/// Deterministic keyword classifier.
#[derive(Debug, Clone)]
pub struct RequestClassifier {
    keywords: KeywordSet,
    fallback: Category,
}

impl RequestClassifier {
    /// Create a classifier over the given keywords and fallback category.
    pub fn new(keywords: KeywordSet, fallback: Category) -> Self {
        Self { keywords, fallback }
    }

    /// Create a classifier from routing configuration.
    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(KeywordSet::from_config(config), config.fallback_category)
    }

    /// The keyword set this classifier scores against.
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Category used when nothing matches.
    pub fn fallback_category(&self) -> Category {
        self.fallback
    }

    /// Classify a request.
    ///
    /// Ties on the highest score go to the category that comes first in
    /// [`Category::PRIORITY`] (safety, analytics, alerting). Each term counts
    /// once no matter how often it recurs in the text.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let lower = text.to_lowercase();

        let matched_terms: BTreeMap<Category, Vec<String>> = Category::PRIORITY
            .into_iter()
            .map(|category| {
                let hits = self
                    .keywords
                    .terms(category)
                    .iter()
                    .filter(|term| lower.contains(term.as_str()))
                    .cloned()
                    .collect();
                (category, hits)
            })
            .collect();

        let scores: BTreeMap<Category, usize> = matched_terms
            .iter()
            .map(|(category, hits)| (*category, hits.len()))
            .collect();

        // Strict `>` keeps the earliest category on ties.
        let mut primary_category = self.fallback;
        let mut max_score = 0;
        for category in Category::PRIORITY {
            let score = scores[&category];
            if score > max_score {
                primary_category = category;
                max_score = score;
            }
        }

        let token_count = text.split_whitespace().count();
        let confidence = if max_score == 0 || token_count == 0 {
            0.0
        } else {
            (max_score as f64 / token_count as f64).min(1.0)
        };

        debug!(
            primary = %primary_category,
            max_score,
            token_count,
            confidence,
            "classified request"
        );

        ClassificationResult {
            primary_category,
            scores,
            matched_terms,
            confidence,
        }
    }

    /// Classify a request that may be absent at the boundary (e.g. a null
    /// `text` field in a JSON body).
    ///
    /// A missing request is rejected rather than treated as empty text.
    pub fn try_classify(&self, text: Option<&str>) -> Result<ClassificationResult, HawkError> {
        text.map(|t| self.classify(t))
            .ok_or_else(|| HawkError::InvalidArgument("request text must not be null".into()))
    }
}

impl Default for RequestClassifier {
    fn default() -> Self {
        Self::from_config(&RoutingConfig::default())
    }
}
