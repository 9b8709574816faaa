//! The terminology dictionary: canonical jargon terms and their
//! plain-language meanings.
//!
//! Loaded once at process start from the static table in
//! [`crate::word_lists`], validated, and shared read-only afterwards.
//! Each term carries a precompiled case-insensitive literal pattern, so
//! validation failures surface at load time and scanning is total.

use regex::{Regex, RegexBuilder};

use crate::error::{ConfigError, ConfigResult};
use crate::word_lists::LEGAL_TERMS;

/// A single jargon term with its plain-language meaning.
///
/// Identity is the canonical name, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct Term {
    canonical: String,
    meaning: String,
    pattern: Regex,
}

impl Term {
    fn new(canonical: &str, meaning: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&regex::escape(canonical))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            canonical: canonical.to_string(),
            meaning: meaning.to_string(),
            pattern,
        })
    }

    /// The canonical term text as it appears in the dictionary.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The plain-language meaning.
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    /// The precompiled case-insensitive literal pattern for this term.
    pub(crate) const fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// An immutable mapping from canonical jargon term to plain-language
/// meaning, in fixed definition order.
///
/// There are no mutation operations after load; the dictionary can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct TerminologyDictionary {
    terms: Vec<Term>,
}

impl TerminologyDictionary {
    /// Load the built-in legal terminology table.
    ///
    /// Fails with [`ConfigError`] if the backing table is empty or
    /// malformed. Call once at startup and share the result.
    #[tracing::instrument]
    pub fn load() -> ConfigResult<Self> {
        let dict = Self::from_pairs(LEGAL_TERMS.iter().copied())?;
        tracing::debug!(terms = dict.len(), "terminology dictionary loaded");
        Ok(dict)
    }

    /// Build a dictionary from explicit (term, meaning) pairs.
    ///
    /// Entries keep their given order. Blank terms or meanings and
    /// case-insensitive duplicate canonical names are rejected.
    pub fn from_pairs<'a, I>(pairs: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut terms = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for (index, (canonical, meaning)) in pairs.into_iter().enumerate() {
            if canonical.trim().is_empty() || meaning.trim().is_empty() {
                return Err(ConfigError::BlankEntry {
                    index,
                    term: canonical.to_string(),
                });
            }
            if !seen.insert(canonical.to_lowercase()) {
                return Err(ConfigError::DuplicateEntry {
                    term: canonical.to_string(),
                });
            }
            let term = Term::new(canonical, meaning).map_err(|source| ConfigError::Pattern {
                term: canonical.to_string(),
                source,
            })?;
            terms.push(term);
        }

        if terms.is_empty() {
            return Err(ConfigError::EmptyDictionary);
        }

        Ok(Self { terms })
    }

    /// Iterate over all terms in definition order.
    ///
    /// The iterator is restartable: each call starts from the beginning.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    /// Look up a term by canonical name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.terms
            .iter()
            .find(|t| t.canonical.eq_ignore_ascii_case(name))
    }

    /// Number of terms in the dictionary.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the dictionary holds no terms.
    ///
    /// Always `false` for a loaded dictionary; construction rejects empty
    /// tables.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
