//! Classify command — PDF ingestion, classification, and jargon analysis.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lexplain_core::TerminologyDictionary;
use lexplain_core::analysis::{self, DEFAULT_SUMMARY_CONCEPTS};
use lexplain_core::config::Config;
use lexplain_core::{extract, text};

use super::read_input_bytes;

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// PDF document to classify.
    pub file: Utf8PathBuf,
}

/// Classify a PDF legal document and analyze its jargon.
#[instrument(name = "cmd_classify", skip_all, fields(file = %args.file))]
pub fn cmd_classify(
    args: ClassifyArgs,
    global_json: bool,
    dictionary: &TerminologyDictionary,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing classify command");

    if !args
        .file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    {
        bail!("only PDF files are supported: {}", args.file);
    }

    let bytes = read_input_bytes(&args.file, max_input_bytes)?;
    let text = extract::extract_pdf_text(&bytes)
        .with_context(|| format!("could not extract text from {}", args.file))?;

    let summary_concepts = config.summary_concepts.unwrap_or(DEFAULT_SUMMARY_CONCEPTS);
    let report = analysis::analyze_document(&text, dictionary, None, summary_concepts)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!(
        "\n  {} {} ({:.0}% confidence)",
        "Type:".cyan(),
        report.classification.document_type,
        report.classification.confidence * 100.0,
    );
    println!("  {} {}", "Summary:".cyan(), report.summary);

    if !report.key_terms.is_empty() {
        println!("  {} {}", "Key terms:".cyan(), report.key_terms.join(", "));
    }
    if !report.important_dates.is_empty() {
        let dates: Vec<_> = report
            .important_dates
            .iter()
            .map(|d| d.date.as_str())
            .collect();
        println!("  {} {}", "Dates:".cyan(), dates.join(", "));
    }
    if !report.parties.is_empty() {
        println!("  {} {}", "Parties:".cyan(), report.parties.join(", "));
    }

    println!(
        "\n  {} {} distinct terms, {:?} complexity (density {:.2}%)",
        "Jargon:".cyan(),
        report.analysis.total_terms,
        report.analysis.complexity.level,
        report.analysis.complexity.score,
    );
    println!(
        "  {} {}",
        "Preview:".cyan(),
        text::truncate(&report.analysis.simplified_text, 200),
    );
    println!("\n{}", report.analysis.summary);

    Ok(())
}
