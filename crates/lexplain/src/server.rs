//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes the analysis pipeline over the MCP protocol via
//! stdio transport. It is a presentation layer — each `#[tool]` method
//! delegates to `lexplain-core` functions rather than implementing
//! business logic directly.
//!
//! Successful tool responses are JSON objects carrying `success: true`.
//! Bad input (blank text, unreadable documents) maps to invalid-params
//! errors; anything unexpected maps to internal errors.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use lexplain_core::TerminologyDictionary;
use lexplain_core::analysis::{self, DEFAULT_SUMMARY_CONCEPTS};
use lexplain_core::classify::{DocumentClassifier, KeywordClassifier};
use lexplain_core::extract;

/// Parameters for the `simplify_jargons` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SimplifyJargonsParams {
    /// The text to scan for legal jargon.
    pub text: String,
}

/// Parameters for the `classify_document` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ClassifyDocumentParams {
    /// Path to the PDF document to classify.
    pub file: String,
}

/// MCP server exposing legal-document analysis to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is
/// automatically registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct JargonServer {
    dictionary: Arc<TerminologyDictionary>,
    max_input_bytes: Option<usize>,
    summary_concepts: usize,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl JargonServer {
    /// Create a new MCP server instance around a loaded dictionary.
    pub fn new(
        dictionary: Arc<TerminologyDictionary>,
        max_input_bytes: Option<usize>,
        summary_concepts: Option<usize>,
    ) -> Self {
        Self {
            dictionary,
            max_input_bytes,
            summary_concepts: summary_concepts.unwrap_or(DEFAULT_SUMMARY_CONCEPTS),
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, size: usize) -> Result<(), McpError> {
        if let Some(max) = self.max_input_bytes
            && size > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {size} bytes (limit: {max} bytes)"),
                None,
            ));
        }
        Ok(())
    }
}

/// Serialize a report as a `success: true` envelope.
fn envelope<T: Serialize>(report: &T) -> Result<String, McpError> {
    let mut value = serde_json::to_value(report)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("success".to_string(), serde_json::Value::Bool(true));
    }
    serde_json::to_string_pretty(&value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl JargonServer {
    /// Report service health and dictionary status.
    #[tool(description = "Get service health: version, dictionary size, and classifier status")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_health(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_health", "executing MCP tool");

        let health = serde_json::json!({
            "success": true,
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "dictionary_terms": self.dictionary.len(),
            "classifier": KeywordClassifier.name(),
        });

        let text = serde_json::to_string_pretty(&health)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "get_health", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Annotate legal jargon in text with plain-language meanings.
    #[tool(
        description = "Scan text for legal jargon, annotate the first occurrence of each term with its plain-language meaning, and rate the text's complexity."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn simplify_jargons(
        &self,
        Parameters(params): Parameters<SimplifyJargonsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "simplify_jargons",
            text_len = params.text.len(),
            "executing MCP tool"
        );

        self.check_size(params.text.len())?;

        let report = analysis::analyze(&params.text, &self.dictionary)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let json = envelope(&report)?;

        tracing::info!(
            tool = "simplify_jargons",
            terms = report.total_terms,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Classify a PDF document and analyze its jargon.
    #[tool(
        description = "Extract text from a PDF legal document, classify its type, and analyze its jargon. Takes a path to a PDF file."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", file = %params.file))]
    fn classify_document(
        &self,
        Parameters(params): Parameters<ClassifyDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "classify_document", file = %params.file, "executing MCP tool");

        if !params.file.to_lowercase().ends_with(".pdf") {
            return Err(McpError::invalid_params(
                "only PDF files are supported".to_string(),
                None,
            ));
        }

        let bytes = std::fs::read(&params.file)
            .map_err(|e| McpError::invalid_params(format!("failed to read {}: {e}", params.file), None))?;
        self.check_size(bytes.len())?;

        let text = extract::extract_pdf_text(&bytes).map_err(|e| {
            McpError::invalid_params(format!("could not extract text from document: {e}"), None)
        })?;

        let report =
            analysis::analyze_document(&text, &self.dictionary, None, self.summary_concepts)
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let json = envelope(&report)?;

        tracing::info!(
            tool = "classify_document",
            document_type = %report.classification.document_type,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for JargonServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use tools to detect and simplify legal jargon and classify documents.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
