//! Jargon term scanning.

use crate::terminology::TerminologyDictionary;

use super::reports::{ScanResult, TermMatch};

/// Scan text for every dictionary term, counting occurrences.
///
/// For each term, in dictionary definition order, counts non-overlapping
/// case-insensitive literal occurrences. Terms with zero matches are
/// excluded from the result; the result preserves dictionary order, not
/// input-position order. Empty text yields an empty result.
///
/// Pure function of `(text, dictionary)`; cannot fail — malformed terms
/// are rejected when the dictionary loads.
#[tracing::instrument(skip_all, fields(text_len = text.len(), terms = dictionary.len()))]
pub fn scan(text: &str, dictionary: &TerminologyDictionary) -> ScanResult {
    let mut matches = Vec::new();

    for term in dictionary.terms() {
        let occurrences = term.pattern().find_iter(text).count();
        if occurrences > 0 {
            matches.push(TermMatch {
                term: term.canonical().to_string(),
                meaning: term.meaning().to_string(),
                occurrences,
            });
        }
    }

    ScanResult::new(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(pairs: &[(&'static str, &'static str)]) -> TerminologyDictionary {
        TerminologyDictionary::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn counts_case_insensitive_occurrences() {
        let d = dict(&[
            ("indemnify", "to compensate for harm"),
            ("breach", "violation of a duty"),
        ]);
        let text = "Party shall indemnify the other Party in case of breach. Any breach is serious.";
        let result = scan(text, &d);

        assert_eq!(result.len(), 2);
        assert_eq!(result.get("indemnify").unwrap().occurrences, 1);
        assert_eq!(result.get("breach").unwrap().occurrences, 2);
    }

    #[test]
    fn zero_match_terms_are_excluded() {
        let d = dict(&[("escrow", "held by a third party"), ("lien", "a claim")]);
        let result = scan("funds remain in escrow", &d);
        assert_eq!(result.len(), 1);
        assert!(result.get("lien").is_none());
    }

    #[test]
    fn preserves_dictionary_order_not_input_order() {
        let d = dict(&[("waiver", "giving up a right"), ("breach", "violation")]);
        // "breach" appears first in the text but "waiver" is declared first.
        let result = scan("a breach may lead to a waiver", &d);
        let names: Vec<_> = result.iter().map(|m| m.term.as_str()).collect();
        assert_eq!(names, vec!["waiver", "breach"]);
    }

    #[test]
    fn empty_text_yields_empty_result() {
        let d = dict(&[("tort", "a civil wrong")]);
        let result = scan("", &d);
        assert!(result.is_empty());
    }

    #[test]
    fn matches_are_literal_substrings() {
        // "breach" matches inside "breaches": this is a substring scan,
        // not a word-boundary scan.
        let d = dict(&[("breach", "violation")]);
        let result = scan("repeated breaches", &d);
        assert_eq!(result.get("breach").unwrap().occurrences, 1);
    }

    #[test]
    fn non_overlapping_counting() {
        let d = dict(&[("anana", "nonsense")]);
        // "ananana" contains "anana" twice only if overlaps are allowed.
        let result = scan("ananana", &d);
        assert_eq!(result.get("anana").unwrap().occurrences, 1);
    }

    #[test]
    fn uppercase_text_matches() {
        let d = dict(&[("force majeure", "excused events")]);
        let result = scan("THE FORCE MAJEURE CLAUSE APPLIES", &d);
        assert_eq!(result.get("force majeure").unwrap().occurrences, 1);
    }

    #[test]
    fn every_match_has_at_least_one_occurrence() {
        let d = dict(&[("lien", "a claim"), ("writ", "a court order")]);
        let result = scan("a writ was issued; a lien attached; another writ followed", &d);
        for m in &result {
            assert!(m.occurrences >= 1);
            assert!(d.get(&m.term).is_some());
        }
    }
}
