//! Jargon-density complexity scoring.
//!
//! Density = distinct terms found / total words, as a percentage.
//! Thresholds: below 1% is Low, below 3% is Medium, 3% and above is High.

use super::reports::{ComplexityLevel, ComplexityReport, ScanResult};

/// Derive a complexity rating from a scan and the text's word count.
///
/// `term_count` is the number of distinct terms found, not total
/// occurrences. A zero word count rates `Unknown` with a zero score.
/// Deterministic, total — no failure modes.
pub fn score(scan: &ScanResult, total_words: usize) -> ComplexityReport {
    let term_count = scan.len();

    if total_words == 0 {
        return ComplexityReport {
            level: ComplexityLevel::Unknown,
            score: 0.0,
            term_count,
            total_words: 0,
        };
    }

    let density = (term_count as f64 / total_words as f64) * 100.0;

    let level = if density < 1.0 {
        ComplexityLevel::Low
    } else if density < 3.0 {
        ComplexityLevel::Medium
    } else {
        ComplexityLevel::High
    };

    ComplexityReport {
        level,
        score: round2(density),
        term_count,
        total_words,
    }
}

/// Produce a one-sentence human-readable summary of the jargon found.
///
/// Zero terms gets a generic "minimal jargon" message; one term gets
/// singular phrasing; more than one names the count but not the terms.
pub fn summarize(scan: &ScanResult) -> String {
    match scan.len() {
        0 => "This document contains minimal legal jargon and should be easy to understand."
            .to_string(),
        1 => "This document contains 1 legal term that has been simplified for better \
              understanding."
            .to_string(),
        n => format!(
            "This document contains {n} legal terms that have been identified and simplified \
             for better understanding. The most complex terms relate to legal obligations, \
             rights, and procedures."
        ),
    }
}

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
