//! Serve command — MCP server on stdio.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tracing::{info, instrument};

use lexplain_core::TerminologyDictionary;
use lexplain_core::config::Config;

use crate::server::JargonServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // No subcommand-specific arguments; transport is always stdio
}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    dictionary: TerminologyDictionary,
    config: Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    use rmcp::ServiceExt;

    info!(
        dictionary_terms = dictionary.len(),
        "starting MCP server on stdio"
    );

    let server = JargonServer::new(
        Arc::new(dictionary),
        max_input_bytes,
        config.summary_concepts,
    );

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;

    service.waiting().await.context("MCP server failed")?;

    info!("MCP server stopped");
    Ok(())
}
