//! Document-type classification.
//!
//! The pipeline treats classification as a black box producing a label
//! and a confidence. [`DocumentClassifier`] is the seam for model-backed
//! implementations; [`KeywordClassifier`] is the deterministic scorer
//! that also serves as the fallback when a primary classifier fails.

use crate::analysis::reports::Classification;
use crate::error::ClassificationError;
use crate::word_lists::CLASSIFIER_CATEGORIES;

/// Confidence ceiling for the keyword scorer.
const CONFIDENCE_CAP: f64 = 0.95;
/// Confidence reported when no category keyword appears at all.
const NO_SIGNAL_CONFIDENCE: f64 = 0.5;

/// A collaborator that labels a document from its text.
pub trait DocumentClassifier {
    /// Classify the text, returning a label and a confidence in `[0, 1]`.
    fn classify(&self, text: &str) -> Result<Classification, ClassificationError>;

    /// Short name for health and info reporting.
    fn name(&self) -> &'static str;
}

/// Deterministic keyword-scoring classifier.
///
/// Scores each category by how many of its keywords appear in the text
/// (presence, not frequency), picks the highest score with ties broken
/// toward the earlier-declared category, and normalizes confidence by the
/// total hits across categories, capped at 0.95. With no keyword hits at
/// all the first-declared category wins at 0.5 confidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Score the text against every category.
    fn scores(text: &str) -> Vec<(&'static str, usize)> {
        let lower = text.to_lowercase();
        CLASSIFIER_CATEGORIES
            .iter()
            .map(|(category, keywords)| {
                let hits = keywords.iter().filter(|kw| lower.contains(*kw)).count();
                (*category, hits)
            })
            .collect()
    }
}

impl DocumentClassifier for KeywordClassifier {
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn classify(&self, text: &str) -> Result<Classification, ClassificationError> {
        let scores = Self::scores(text);
        let total: usize = scores.iter().map(|(_, s)| s).sum();

        // max_by_key takes the last maximum; reversed iteration makes the
        // first-declared category win ties.
        let (category, best) = scores
            .iter()
            .rev()
            .max_by_key(|(_, s)| *s)
            .copied()
            .unwrap_or(("General Contract", 0));

        let confidence = if total > 0 {
            (best as f64 / total as f64).min(CONFIDENCE_CAP)
        } else {
            NO_SIGNAL_CONFIDENCE
        };

        tracing::debug!(category, best, total, "keyword classification");
        Ok(Classification {
            document_type: category.to_string(),
            confidence,
        })
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

/// Classify with an optional primary classifier, falling back to the
/// keyword scorer on absence or failure.
///
/// Classification failure never propagates: callers always get a label.
pub fn classify_with_fallback(
    primary: Option<&dyn DocumentClassifier>,
    text: &str,
) -> Classification {
    if let Some(classifier) = primary {
        match classifier.classify(text) {
            Ok(classification) => return classification,
            Err(err) => {
                tracing::warn!(
                    classifier = classifier.name(),
                    error = %err,
                    "primary classifier failed, falling back to keyword scorer"
                );
            }
        }
    }
    // The keyword scorer is total.
    KeywordClassifier
        .classify(text)
        .unwrap_or_else(|_| Classification {
            document_type: "General Contract".to_string(),
            confidence: NO_SIGNAL_CONFIDENCE,
        })
}
