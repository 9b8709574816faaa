//! Report structs for document analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One dictionary term found in a scanned text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TermMatch {
    /// The canonical term as defined in the dictionary.
    pub term: String,
    /// The plain-language meaning.
    pub meaning: String,
    /// Non-overlapping case-insensitive occurrences in the text (≥ 1).
    pub occurrences: usize,
}

/// The terms found in one scanned text, in dictionary definition order.
///
/// Only terms with at least one occurrence appear; a term absent from the
/// text is absent from the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ScanResult {
    matches: Vec<TermMatch>,
}

impl ScanResult {
    /// Wrap an ordered list of matches.
    pub(crate) const fn new(matches: Vec<TermMatch>) -> Self {
        Self { matches }
    }

    /// Iterate over matches in dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = &TermMatch> {
        self.matches.iter()
    }

    /// Look up a match by canonical term name, case-insensitively.
    pub fn get(&self, term: &str) -> Option<&TermMatch> {
        self.matches
            .iter()
            .find(|m| m.term.eq_ignore_ascii_case(term))
    }

    /// Number of distinct terms found.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether no terms were found.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a TermMatch;
    type IntoIter = std::slice::Iter<'a, TermMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Qualitative complexity rating derived from jargon density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ComplexityLevel {
    /// No words to rate against (empty input).
    Unknown,
    /// Density below 1%.
    Low,
    /// Density from 1% up to 3%.
    Medium,
    /// Density of 3% or more.
    High,
}

/// Jargon-density complexity rating for one text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComplexityReport {
    /// Qualitative rating.
    pub level: ComplexityLevel,
    /// Density as a percentage, rounded to 2 decimal places.
    pub score: f64,
    /// Distinct terms found (not total occurrences).
    pub term_count: usize,
    /// Whitespace-delimited words in the text.
    pub total_words: usize,
}

/// Combined result of scanning, simplifying, and scoring one text.
///
/// All fields derive from the same scan: `simplified_text` reflects
/// exactly the terms listed in `terms`, and `complexity` and `summary`
/// are computed from that same scan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Input text with the first occurrence of each found term annotated.
    pub simplified_text: String,
    /// Terms found, in dictionary order.
    pub terms: ScanResult,
    /// Distinct terms found.
    pub total_terms: usize,
    /// Density-based complexity rating.
    pub complexity: ComplexityReport,
    /// Human-readable one-sentence summary of the jargon found.
    pub summary: String,
}

/// A document-type label with its confidence.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Classification {
    /// The document type, e.g. "Lease Agreement".
    pub document_type: String,
    /// Confidence in `[0, 1]`, capped at 0.95 for the keyword scorer.
    pub confidence: f64,
}

/// A date string found in a document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DateMention {
    /// Coarse category of the date. Currently always "General".
    pub kind: String,
    /// The date text as it appears in the document.
    pub date: String,
}

/// Full analysis of an ingested document: classification, metadata, and
/// the embedded jargon analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DocumentReport {
    /// Document-type classification.
    pub classification: Classification,
    /// Key legal keywords present in the document (max 10).
    pub key_terms: Vec<String>,
    /// Dates found in the document (max 5).
    pub important_dates: Vec<DateMention>,
    /// Party names found in the document (max 5).
    pub parties: Vec<String>,
    /// One-sentence description of the document.
    pub summary: String,
    /// Jargon analysis of the extracted text.
    pub analysis: AnalysisReport,
}
