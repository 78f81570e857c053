//! # newsprep-tag
//!
//! Keyword-based tag inference for the news dataset.
//!
//! A static rule table maps tag categories to trigger phrases. Each
//! article's text is matched against the table, inferred tags are merged
//! into the existing tag list (first occurrence wins), and under-tagged
//! articles are padded with generic fallback tags.

pub mod batch;
pub mod engine;
pub mod rules;

pub use batch::{tag_articles, TagSummary};
pub use engine::{TagInferenceEngine, FALLBACK_TAGS};
pub use rules::{TagRule, TagRuleTable};
