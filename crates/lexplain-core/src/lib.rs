//! Core library for lexplain.
//!
//! This crate provides legal-document analysis for the `lexplain` CLI and
//! any downstream consumers: a terminology dictionary of legal jargon, a
//! scanner that finds dictionary terms in text, a simplifier that
//! annotates them inline with plain-language meanings, a jargon-density
//! complexity scorer, a keyword-based document-type classifier, and PDF
//! text extraction.
//!
//! # Modules
//!
//! - [`terminology`] - The jargon dictionary, loaded once at startup
//! - [`analysis`] - Scanner, simplifier, complexity scorer, and pipeline
//! - [`classify`] - Document-type classification
//! - [`extract`] - PDF text extraction
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use lexplain_core::TerminologyDictionary;
//! use lexplain_core::analysis;
//!
//! let dictionary = TerminologyDictionary::load().expect("valid built-in dictionary");
//! let report = analysis::analyze(
//!     "The tenant shall indemnify the landlord.",
//!     &dictionary,
//! )
//! .expect("non-empty input");
//!
//! assert_eq!(report.terms.get("indemnify").unwrap().occurrences, 1);
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod classify;

pub mod config;

pub mod error;

pub mod extract;

pub mod terminology;

pub mod text;

pub mod word_lists;

pub use config::{Config, ConfigLoader, LogLevel};

pub use error::{
    AnalysisError, AnalysisResult, ClassificationError, ConfigError, ConfigResult,
    ExtractionError,
};

pub use terminology::{Term, TerminologyDictionary};

/// Default maximum input size in bytes (5 MiB).
///
/// Applied by the CLI and MCP server unless overridden or disabled in
/// configuration.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
