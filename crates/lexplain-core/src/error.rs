//! Error types for lexplain-core.

use thiserror::Error;

/// Errors that can occur when working with configuration or the
/// terminology dictionary.
///
/// These are fatal at startup: the process should not serve requests
/// without a valid dictionary and configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// The terminology table contains no entries.
    #[error("terminology dictionary is empty")]
    EmptyDictionary,

    /// A terminology entry has a blank term or meaning.
    #[error("terminology entry {index} is blank (term: {term:?})")]
    BlankEntry {
        /// Zero-based position of the offending entry.
        index: usize,
        /// The term text as found (may be empty).
        term: String,
    },

    /// Two terminology entries share a canonical name (case-insensitive).
    #[error("duplicate terminology entry: {term:?}")]
    DuplicateEntry {
        /// The canonical name that appears more than once.
        term: String,
    },

    /// A term could not be compiled into a search pattern.
    #[error("failed to compile pattern for term {term:?}: {source}")]
    Pattern {
        /// The term whose pattern failed to compile.
        term: String,
        /// The underlying regex error.
        source: regex::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
///
/// Scan, simplify, and score are total for any non-empty text; the only
/// expected failure is blank input to the pipeline.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input text is empty or whitespace-only.
    #[error("no analyzable text in input")]
    EmptyInput,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur while extracting text from a document.
///
/// Recovered locally by callers as a user-facing "could not read
/// document" outcome; never fatal to the process.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document could not be parsed at all.
    #[error("failed to parse document: {0}")]
    Parse(String),

    /// The document parsed but yielded no extractable text.
    #[error("no extractable text in document")]
    NoText,
}

/// Errors raised by a document classification collaborator.
///
/// Never surfaces to callers of the pipeline: classification failure
/// falls back to the keyword-based classifier.
#[derive(Error, Debug)]
pub enum ClassificationError {
    /// The classifier backend is unavailable or failed to produce a label.
    #[error("classifier unavailable: {0}")]
    Unavailable(String),
}
