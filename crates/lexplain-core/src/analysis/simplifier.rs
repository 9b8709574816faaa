//! Inline annotation of scanned jargon terms.

use regex::NoExpand;

use crate::terminology::TerminologyDictionary;

use super::reports::ScanResult;

/// Annotate the first occurrence of each found term with its meaning.
///
/// A fold over the scan's ordered matches: each step takes the previous
/// output and replaces only the FIRST case-insensitive occurrence of the
/// term with `"<term> (<meaning>)"`, using the canonical term text.
/// Later occurrences stay bare. An empty scan returns the input
/// unchanged.
///
/// Known quirk: each term is applied once against the running, already
/// partially annotated text, and replacement text is never re-matched.
/// If a term's meaning happens to contain a later term's literal text,
/// that later term's first match can land inside the earlier annotation.
/// Scan order is therefore observable in the output.
#[tracing::instrument(skip_all, fields(text_len = text.len(), terms = scan.len()))]
pub fn simplify(text: &str, scan: &ScanResult, dictionary: &TerminologyDictionary) -> String {
    scan.iter().fold(text.to_string(), |current, m| {
        let Some(term) = dictionary.get(&m.term) else {
            return current;
        };
        let annotation = format!("{} ({})", term.canonical(), term.meaning());
        term.pattern()
            .replacen(&current, 1, NoExpand(&annotation))
            .into_owned()
    })
}
