//! Document analysis pipeline.
//!
//! Decomposes legal-text analysis into pure feature functions — scanning,
//! simplification, complexity scoring, metadata extraction — orchestrated
//! by [`analyze`] and [`analyze_document`]. Callers can also invoke the
//! features individually.

pub mod complexity;
pub mod metadata;
pub mod reports;
pub mod scanner;
pub mod simplifier;

pub use reports::{
    AnalysisReport, Classification, ComplexityLevel, ComplexityReport, DateMention,
    DocumentReport, ScanResult, TermMatch,
};

use crate::classify::{self, DocumentClassifier};
use crate::error::{AnalysisError, AnalysisResult};
use crate::terminology::TerminologyDictionary;
use crate::text;

/// How many canonical terms the document summary names by default.
pub const DEFAULT_SUMMARY_CONCEPTS: usize = 3;

/// Run the jargon analysis pipeline on a block of text.
///
/// Sequence: scan → word count → simplify → score → summarize, with every
/// field derived from the same scan, so the simplified text, complexity,
/// and summary are mutually consistent. Never mix scan results across
/// calls.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] when the text is empty or
/// whitespace-only. For any non-empty text the pipeline is total.
#[tracing::instrument(skip(text, dictionary), fields(text_len = text.len()))]
pub fn analyze(
    text: &str,
    dictionary: &TerminologyDictionary,
) -> AnalysisResult<AnalysisReport> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let scan = scanner::scan(text, dictionary);
    let total_words = text::count_words(text);
    let simplified_text = simplifier::simplify(text, &scan, dictionary);
    let complexity = complexity::score(&scan, total_words);
    let summary = complexity::summarize(&scan);

    tracing::debug!(
        terms = scan.len(),
        total_words,
        level = ?complexity.level,
        "analysis complete"
    );

    Ok(AnalysisReport {
        simplified_text,
        total_terms: scan.len(),
        terms: scan,
        complexity,
        summary,
    })
}

/// Run the full document pipeline: jargon analysis plus classification
/// and metadata extraction.
///
/// Classification goes through [`classify::classify_with_fallback`], so a
/// failing primary classifier degrades to the keyword scorer instead of
/// surfacing an error. `summary_concepts` bounds how many canonical terms
/// the document summary names (see [`DEFAULT_SUMMARY_CONCEPTS`]).
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] when the text is empty or whitespace-only.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_document(
    text: &str,
    dictionary: &TerminologyDictionary,
    classifier: Option<&dyn DocumentClassifier>,
    summary_concepts: usize,
) -> AnalysisResult<DocumentReport> {
    let analysis = analyze(text, dictionary)?;
    let classification = classify::classify_with_fallback(classifier, text);
    let summary = document_summary(&classification, &analysis.terms, summary_concepts);

    Ok(DocumentReport {
        key_terms: metadata::key_terms(text),
        important_dates: metadata::important_dates(text),
        parties: metadata::parties(text),
        classification,
        summary,
        analysis,
    })
}

/// Compose the one-sentence document description.
fn document_summary(
    classification: &Classification,
    scan: &ScanResult,
    summary_concepts: usize,
) -> String {
    let mut summary = format!(
        "This appears to be a {} containing {} legal terms. ",
        classification.document_type.to_lowercase(),
        scan.len()
    );
    if !scan.is_empty() {
        let concepts: Vec<_> = scan
            .iter()
            .take(summary_concepts)
            .map(|m| m.term.as_str())
            .collect();
        summary.push_str(&format!(
            "Key legal concepts include: {}.",
            concepts.join(", ")
        ));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(pairs: &[(&'static str, &'static str)]) -> TerminologyDictionary {
        TerminologyDictionary::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn worked_scenario_indemnify_and_breach() {
        let d = dict(&[
            ("indemnify", "to compensate for harm"),
            ("breach", "violation of a duty"),
        ]);
        let text = "Party shall indemnify the other Party in case of breach. Any breach is serious.";
        let report = analyze(text, &d).unwrap();

        assert_eq!(report.total_terms, 2);
        assert_eq!(report.terms.get("indemnify").unwrap().occurrences, 1);
        assert_eq!(report.terms.get("breach").unwrap().occurrences, 2);
        assert_eq!(report.complexity.total_words, 14);
        // 2 distinct terms / 14 words = 14.2857% -> 14.29, High.
        assert_eq!(report.complexity.score, 14.29);
        assert_eq!(report.complexity.level, ComplexityLevel::High);
        // Only the first occurrence of each term is annotated.
        assert_eq!(
            report
                .simplified_text
                .matches("indemnify (to compensate for harm)")
                .count(),
            1
        );
        assert_eq!(
            report
                .simplified_text
                .matches("breach (violation of a duty)")
                .count(),
            1
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        let d = dict(&[("tort", "a civil wrong")]);
        assert!(matches!(analyze("", &d), Err(AnalysisError::EmptyInput)));
        assert!(matches!(
            analyze("   \n\t ", &d),
            Err(AnalysisError::EmptyInput)
        ));
    }

    #[test]
    fn text_without_jargon_passes_through() {
        let d = dict(&[("estoppel", "barred from contradicting oneself")]);
        let text = "The quick brown fox jumps over the lazy dog.";
        let report = analyze(text, &d).unwrap();

        assert_eq!(report.simplified_text, text);
        assert!(report.terms.is_empty());
        assert_eq!(report.complexity.level, ComplexityLevel::Low);
        assert!(report.summary.contains("minimal legal jargon"));
    }

    #[test]
    fn fields_derive_from_the_same_scan() {
        let d = dict(&[("lien", "a claim on property")]);
        let report = analyze("a lien on the estate", &d).unwrap();
        assert_eq!(report.total_terms, report.terms.len());
        assert_eq!(report.complexity.term_count, report.terms.len());
    }

    #[test]
    fn document_report_classifies_and_extracts_metadata() {
        let d = dict(&[("lease", "a rental contract")]);
        let text = "This lease between Party A and Party B sets monthly rent for the premises, \
                    effective 1 March 2025. The tenant accepts the property as-is.";
        let report = analyze_document(text, &d, None, DEFAULT_SUMMARY_CONCEPTS).unwrap();

        assert_eq!(report.classification.document_type, "Lease Agreement");
        assert!(report.summary.starts_with("This appears to be a lease agreement"));
        assert!(report.summary.contains("Key legal concepts include: lease."));
        assert!(report.parties.contains(&"Party A".to_string()));
        assert!(!report.important_dates.is_empty());
        assert_eq!(report.analysis.total_terms, 1);
    }

    #[test]
    fn document_summary_omits_concepts_when_no_terms_found() {
        let d = dict(&[("estoppel", "barred from contradicting oneself")]);
        let text = "The tenant pays rent monthly for the premises under this lease.";
        let report = analyze_document(text, &d, None, DEFAULT_SUMMARY_CONCEPTS).unwrap();

        assert!(report.summary.contains("containing 0 legal terms"));
        assert!(!report.summary.contains("Key legal concepts"));
    }

    #[test]
    fn unmatched_dictionary_rates_low() {
        // A dictionary whose terms never match behaves like an empty one:
        // complexity is Low for any non-empty text, never Medium or High.
        let d = dict(&[("zzzz-unmatched", "never appears")]);
        let report = analyze("some perfectly ordinary writing here", &d).unwrap();
        assert_eq!(report.complexity.level, ComplexityLevel::Low);
    }
}
