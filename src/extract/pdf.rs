// PDF text extraction via the `pdf-extract` crate.
//
// pdf-extract returns the whole document as one string, which is exactly
// what the segmentation stage wants — cleaning and chunking operate on the
// full text, not on pages.

use std::path::Path;

use anyhow::Result;

use super::traits::{file_suffix, TextExtractor};

/// Extractor for PDF reports.
///
/// The recognized suffix set comes from configuration (default: `pdf`
/// only), so report archives that mix in other file types are filtered
/// here rather than at the enumeration site.
pub struct PdfExtractor {
    extensions: Vec<String>,
}

impl PdfExtractor {
    pub fn new(extensions: &[String]) -> Self {
        Self {
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new(&["pdf".to_string()])
    }
}

impl TextExtractor for PdfExtractor {
    fn supports(&self, path: &Path) -> bool {
        self.extensions.contains(&file_suffix(path))
    }

    fn extract(&self, path: &Path) -> Result<Option<String>> {
        if !self.supports(path) {
            return Ok(None);
        }

        let text = pdf_extract::extract_text(path).map_err(|e| {
            anyhow::anyhow!("Failed to extract text from {}: {e}", path.display())
        })?;

        Ok(Some(text))
    }
}
