//! Terms command — list the terminology dictionary.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use lexplain_core::TerminologyDictionary;

/// Arguments for the `terms` subcommand.
#[derive(Args, Debug, Default)]
pub struct TermsArgs {
    /// Show only terms containing this text (case-insensitive).
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Serialize)]
struct TermEntry<'a> {
    term: &'a str,
    meaning: &'a str,
}

/// Print the terminology dictionary.
#[instrument(name = "cmd_terms", skip_all)]
pub fn cmd_terms(
    args: TermsArgs,
    global_json: bool,
    dictionary: &TerminologyDictionary,
) -> anyhow::Result<()> {
    debug!(filter = ?args.filter, "executing terms command");

    let filter = args.filter.as_deref().map(str::to_lowercase);
    let entries: Vec<TermEntry<'_>> = dictionary
        .terms()
        .filter(|t| {
            filter
                .as_deref()
                .is_none_or(|f| t.canonical().to_lowercase().contains(f))
        })
        .map(|t| TermEntry {
            term: t.canonical(),
            meaning: t.meaning(),
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{} ({} of {} terms)",
        "Terminology dictionary".bold(),
        entries.len(),
        dictionary.len(),
    );
    for entry in &entries {
        println!("  {} — {}", entry.term.cyan(), entry.meaning);
    }

    Ok(())
}
