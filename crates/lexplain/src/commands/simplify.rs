//! Simplify command — jargon annotation for plain text.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lexplain_core::TerminologyDictionary;
use lexplain_core::analysis::{self, ComplexityLevel};

use super::{check_input_size, read_input_file};

/// Arguments for the `simplify` subcommand.
#[derive(Args, Debug)]
pub struct SimplifyArgs {
    /// Text file to analyze. Omit when passing --text.
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Analyze this text directly instead of reading a file.
    #[arg(long)]
    pub text: Option<String>,
}

/// Annotate legal jargon in plain text and report its complexity.
#[instrument(name = "cmd_simplify", skip_all, fields(file = ?args.file))]
pub fn cmd_simplify(
    args: SimplifyArgs,
    global_json: bool,
    dictionary: &TerminologyDictionary,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, inline = args.text.is_some(), "executing simplify command");

    let content = match (&args.file, &args.text) {
        (Some(path), None) => read_input_file(path, max_input_bytes)?,
        (None, Some(text)) => {
            check_input_size(text.len(), "--text", max_input_bytes)?;
            text.clone()
        }
        // clap rules out both-or-neither
        _ => bail!("provide a file or --text"),
    };

    let report = analysis::analyze(&content, dictionary)
        .context("failed to analyze text")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.simplified_text);
    println!();

    if report.terms.is_empty() {
        println!("{} no dictionary terms found", "Jargon:".cyan());
    } else {
        println!(
            "{} {} distinct terms",
            "Jargon:".cyan(),
            report.total_terms,
        );
        for m in &report.terms {
            println!("  {} ×{} — {}", m.term.bold(), m.occurrences, m.meaning);
        }
    }

    let level = format!("{:?}", report.complexity.level);
    let level_str = match report.complexity.level {
        ComplexityLevel::High => level.red().to_string(),
        ComplexityLevel::Medium => level.yellow().to_string(),
        _ => level.green().to_string(),
    };
    println!(
        "\n{} {} (density {:.2}%, {} words)",
        "Complexity:".cyan(),
        level_str,
        report.complexity.score,
        report.complexity.total_words,
    );
    println!("\n{}", report.summary);

    Ok(())
}
