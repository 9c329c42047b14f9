// Corpus assembly pipeline.
//
// For each file in the input directory (non-recursive, sorted by name so
// runs are reproducible): capability check, extract, clean, chunk, append.
// A document that fails extraction is logged and skipped — one corrupt PDF
// must not abort the whole batch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::extract::traits::TextExtractor;
use crate::segment::{clean, Chunker};

/// Segmentation counts for one processed document.
#[derive(Debug, Clone)]
pub struct DocumentReport {
    pub path: PathBuf,
    /// Paragraph units the cleaned text split into
    pub paragraph_count: usize,
    /// Chunks this document contributed to the corpus
    pub chunk_count: usize,
}

/// The ordered collection of all chunks across all processed documents —
/// the sole artifact handed to topic modeling.
#[derive(Debug, Default)]
pub struct Corpus {
    /// All chunks, in file-enumeration order then paragraph order
    pub chunks: Vec<String>,
    /// One report per successfully processed document, in the same order
    pub documents: Vec<DocumentReport>,
    /// Files the extractor does not support (intentional filtering)
    pub skipped: usize,
    /// Files that failed extraction and were skipped
    pub failed: usize,
}

/// Run the segmentation pipeline over every file in `input_dir`.
///
/// Returns the assembled corpus. A corpus with zero chunks is not an error
/// here — callers decide whether that is fatal (modeling) or merely worth
/// reporting (inspection).
pub fn run(
    extractor: &dyn TextExtractor,
    chunker: &Chunker,
    input_dir: &Path,
) -> Result<Corpus> {
    let files = enumerate_files(input_dir)?;
    info!(files = files.len(), dir = %input_dir.display(), "Enumerated input directory");

    let mut corpus = Corpus::default();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Documents [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    for path in &files {
        if !extractor.supports(path) {
            corpus.skipped += 1;
            pb.inc(1);
            continue;
        }

        let raw = match extractor.extract(path) {
            Ok(Some(text)) => text,
            Ok(None) => {
                corpus.skipped += 1;
                pb.inc(1);
                continue;
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Extraction failed, skipping document"
                );
                corpus.failed += 1;
                pb.inc(1);
                continue;
            }
        };

        let cleaned = clean(&raw);
        let paragraph_count = chunker.split_paragraphs(cleaned).len();
        let chunks = chunker.chunk(cleaned);

        corpus.documents.push(DocumentReport {
            path: path.clone(),
            paragraph_count,
            chunk_count: chunks.len(),
        });
        corpus.chunks.extend(chunks);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        documents = corpus.documents.len(),
        chunks = corpus.chunks.len(),
        skipped = corpus.skipped,
        failed = corpus.failed,
        "Corpus assembled"
    );

    Ok(corpus)
}

/// Regular files directly under `dir`, sorted by file name.
///
/// Enumeration order from the file system is not guaranteed, so the sort
/// makes corpus order — and therefore modeling output — reproducible.
fn enumerate_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| format!("Failed to read directory {}", dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
