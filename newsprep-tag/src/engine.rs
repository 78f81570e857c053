//! Tag inference engine
//!
//! Matches trigger phrases against article text, merges inferred tags into
//! the existing tag list, and pads under-tagged articles with fallback
//! tags. All stages are pure functions of their inputs; only
//! [`TagInferenceEngine::tag_article`] replaces the article's tag field.

use crate::rules::TagRuleTable;
use newsprep_common::Article;
use std::collections::{BTreeSet, HashSet};

/// Generic low-information tags appended to under-tagged articles, in order
pub const FALLBACK_TAGS: [&str; 5] = ["general", "news", "current-events", "world", "analysis"];

/// Articles with this many tags or fewer after merging receive fallback padding
pub const FALLBACK_THRESHOLD: usize = 3;

/// Fallback padding stops once the tag list reaches this length
pub const TARGET_TAG_COUNT: usize = 5;

/// Keyword-based tag inference over a static rule table
pub struct TagInferenceEngine {
    rules: TagRuleTable,
}

impl TagInferenceEngine {
    pub fn new(rules: TagRuleTable) -> Self {
        Self { rules }
    }

    /// Return the set of tag names whose trigger phrases appear in `text`.
    ///
    /// Matching is case-insensitive raw substring search: a trigger inside
    /// an unrelated word still matches ("bus" matches "business"). Empty
    /// text yields an empty set.
    pub fn infer_tags(&self, text: &str) -> BTreeSet<String> {
        let text_lower = text.to_lowercase();
        let mut matched = BTreeSet::new();

        for rule in self.rules.iter() {
            for trigger in &rule.triggers {
                if text_lower.contains(trigger.as_str()) {
                    matched.insert(rule.name.clone());
                    break; // remaining triggers cannot change the result
                }
            }
        }

        matched
    }

    /// One text blob to search in: title, abstract, existing tags, source,
    /// separated by single spaces. Missing fields contribute empty strings.
    pub fn combined_text(article: &Article) -> String {
        [
            article.title.as_str(),
            article.abstract_text.as_str(),
            &article.tags.join(" "),
            article.source.as_str(),
        ]
        .join(" ")
    }

    /// Merge existing tags with inferred tags, deduplicating while keeping
    /// first-occurrence order. Inferred tags are appended in lexicographic
    /// order after the existing list; a tag already present keeps its
    /// original position.
    pub fn merge_tags(existing: &[String], inferred: &BTreeSet<String>) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut merged = Vec::with_capacity(existing.len() + inferred.len());

        for tag in existing.iter().chain(inferred.iter()) {
            if seen.insert(tag.as_str()) {
                merged.push(tag.clone());
            }
        }

        merged
    }

    /// Pad an under-tagged list with fallback tags.
    ///
    /// Lists longer than [`FALLBACK_THRESHOLD`] are returned unchanged.
    /// Otherwise fallback tags not already present are appended in their
    /// defined order until the list reaches [`TARGET_TAG_COUNT`] or the
    /// fallback list is exhausted (exhaustion stops short, never errors).
    pub fn apply_fallback(mut tags: Vec<String>) -> Vec<String> {
        if tags.len() > FALLBACK_THRESHOLD {
            return tags;
        }

        for fallback in FALLBACK_TAGS {
            if tags.len() >= TARGET_TAG_COUNT {
                break;
            }
            if !tags.iter().any(|t| t == fallback) {
                tags.push(fallback.to_string());
            }
        }

        tags
    }

    /// Run the full per-article pipeline, replacing `article.tags`.
    ///
    /// Returns whether the merge changed the article's unordered tag set
    /// (fallback padding and order-only differences do not count).
    pub fn tag_article(&self, article: &mut Article) -> bool {
        let combined = Self::combined_text(article);
        let inferred = self.infer_tags(&combined);
        let merged = Self::merge_tags(&article.tags, &inferred);

        let before: HashSet<&str> = article.tags.iter().map(String::as_str).collect();
        let after: HashSet<&str> = merged.iter().map(String::as_str).collect();
        let changed = before != after;

        article.tags = Self::apply_fallback(merged);
        changed
    }
}
