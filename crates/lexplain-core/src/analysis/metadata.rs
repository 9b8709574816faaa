//! Document metadata extraction: key terms, dates, and party names.
//!
//! Lightweight pattern scans over the raw text. These are presence and
//! shape checks, not NLP; they feed the document report's context fields.

use std::sync::LazyLock;

use regex::Regex;

use crate::word_lists::KEY_TERM_KEYWORDS;

use super::reports::DateMention;

/// Numeric dates: 12/31/2024, 1-5-24.
static NUMERIC_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").expect("valid regex"));

/// Day-first written dates: 31 December 2024.
static DAY_FIRST_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}\s+\w+\s+\d{4}\b").expect("valid regex"));

/// Month-first written dates: December 31, 2024.
static MONTH_FIRST_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\s+\d{1,2},?\s+\d{4}\b").expect("valid regex"));

/// Designations like "Party A".
static PARTY_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:Party|PARTY)\s+[A-Z]\b").expect("valid regex"));

/// Company names with a leading article: "The Acme Corporation".
static THE_COMPANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:The|THE)\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:Company|Corporation|LLC|Inc\.?|Ltd\.?)\b")
        .expect("valid regex")
});

/// Bare company names: "Acme Holdings Ltd".
static COMPANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:Company|Corporation|LLC|Inc\.?|Ltd\.?)\b")
        .expect("valid regex")
});

/// Cap on returned key terms.
const MAX_KEY_TERMS: usize = 10;
/// Cap on returned dates.
const MAX_DATES: usize = 5;
/// Cap on returned parties.
const MAX_PARTIES: usize = 5;

/// Collect common legal keywords present in the text, title-cased.
pub fn key_terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    KEY_TERM_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .map(|kw| title_case(kw))
        .take(MAX_KEY_TERMS)
        .collect()
}

/// Collect date strings found in the text.
pub fn important_dates(text: &str) -> Vec<DateMention> {
    let mut dates = Vec::new();
    for pattern in [&*NUMERIC_DATE, &*DAY_FIRST_DATE, &*MONTH_FIRST_DATE] {
        for m in pattern.find_iter(text) {
            dates.push(DateMention {
                kind: "General".to_string(),
                date: m.as_str().to_string(),
            });
            if dates.len() == MAX_DATES {
                return dates;
            }
        }
    }
    dates
}

/// Collect party names found in the text, deduplicated in first-seen order.
pub fn parties(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut found = Vec::new();

    for pattern in [&*PARTY_LETTER, &*THE_COMPANY, &*COMPANY] {
        for m in pattern.find_iter(text) {
            let name = m.as_str().to_string();
            if seen.insert(name.clone()) {
                found.push(name);
                if found.len() == MAX_PARTIES {
                    return found;
                }
            }
        }
    }
    found
}

/// Title-case each whitespace-separated word.
fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_terms_are_title_cased_presence_hits() {
        let text = "This agreement covers payment and delivery between the parties.";
        let terms = key_terms(text);
        assert!(terms.contains(&"Agreement".to_string()));
        assert!(terms.contains(&"Payment".to_string()));
        assert!(terms.contains(&"Parties".to_string()));
        assert!(!terms.contains(&"Damages".to_string()));
        assert!(terms.len() <= 10);
    }

    #[test]
    fn multi_word_keywords_title_case_each_word() {
        let text = "All intellectual property remains with the provider.";
        let terms = key_terms(text);
        assert!(terms.contains(&"Intellectual Property".to_string()));
    }

    #[test]
    fn dates_in_several_shapes() {
        let text = "Signed 12/31/2024, effective 1 January 2025, expires March 1, 2026.";
        let dates = important_dates(text);
        let found: Vec<_> = dates.iter().map(|d| d.date.as_str()).collect();
        assert!(found.contains(&"12/31/2024"));
        assert!(found.iter().any(|d| d.contains("January")));
        assert!(dates.len() <= 5);
        assert!(dates.iter().all(|d| d.kind == "General"));
    }

    #[test]
    fn parties_dedup_and_cap() {
        let text = "Party A and Party B agree. The Acme Corporation and Party A shall cooperate.";
        let found = parties(text);
        assert!(found.contains(&"Party A".to_string()));
        assert!(found.contains(&"Party B".to_string()));
        assert!(found.iter().any(|p| p.contains("Acme")));
        assert_eq!(
            found.iter().filter(|p| p.as_str() == "Party A").count(),
            1
        );
        assert!(found.len() <= 5);
    }

    #[test]
    fn no_matches_yield_empty_vectors() {
        let text = "plain prose without any of it";
        assert!(important_dates(text).is_empty());
        assert!(parties(text).is_empty());
    }
}
