//! Batch tagging pass over a dataset

use crate::engine::TagInferenceEngine;
use newsprep_common::Article;
use tracing::debug;

/// Counts reported after a batch pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSummary {
    /// Total articles processed
    pub processed: usize,
    /// Articles whose unordered tag set was changed by the merge
    pub updated: usize,
}

/// Tag every article in input order, accumulating the updated count.
///
/// Each article is processed to completion before the next begins; array
/// order is preserved.
pub fn tag_articles(engine: &TagInferenceEngine, articles: &mut [Article]) -> TagSummary {
    let mut updated = 0;

    for (index, article) in articles.iter_mut().enumerate() {
        let changed = engine.tag_article(article);
        if changed {
            updated += 1;
        }

        debug!(
            index,
            title = %article.title,
            tag_count = article.tags.len(),
            changed,
            "Tagged article"
        );
    }

    TagSummary {
        processed: articles.len(),
        updated,
    }
}
