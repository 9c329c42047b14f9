// Text extractor trait — swap-ready abstraction.
//
// Format support is modeled as a capability check rather than a conditional
// at the call site, so adding a new document format is additive: implement
// the trait, no pipeline changes.

use std::path::Path;

use anyhow::Result;

/// Trait for turning a document file into raw text.
pub trait TextExtractor {
    /// Can this extractor handle the given path?
    /// Decided from the file suffix, case-insensitively.
    fn supports(&self, path: &Path) -> bool;

    /// Extract the full text of the document.
    ///
    /// Returns `Ok(None)` for paths this extractor does not support —
    /// the pipeline treats that as "skip, no chunks produced". An `Err`
    /// means the file was recognized but could not be read or parsed.
    fn extract(&self, path: &Path) -> Result<Option<String>>;
}

/// Lowercased file suffix, or empty string when the path has none.
pub fn file_suffix(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}
