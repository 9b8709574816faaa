//! PDF text extraction.
//!
//! Maps an uploaded PDF to a single UTF-8 string of concatenated page
//! text, or an [`ExtractionError`] when nothing readable comes out.
//! Scanned-image PDFs with no text layer fall into the latter bucket.

use crate::error::ExtractionError;

/// Extract all text from a PDF held in memory.
///
/// Returns the trimmed concatenated page text. Fails with
/// [`ExtractionError::Parse`] when the bytes are not a readable PDF and
/// [`ExtractionError::NoText`] when the document parses but contains no
/// extractable text.
#[tracing::instrument(skip_all, fields(bytes = data.len()))]
pub fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| ExtractionError::Parse(e.to_string()))?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractionError::NoText);
    }

    tracing::debug!(chars = trimmed.len(), "extracted text from PDF");
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let result = extract_pdf_text(b"this is not a pdf");
        assert!(matches!(result, Err(ExtractionError::Parse(_))));
    }

    #[test]
    fn empty_input_fails_to_parse() {
        let result = extract_pdf_text(&[]);
        assert!(result.is_err());
    }
}
