// Integration tests for corpus assembly.
//
// Real PDFs are awkward as fixtures, so these tests drive the pipeline
// through the TextExtractor trait with a plain-text stub — the same seam
// the PDF extractor plugs into.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

use loam::extract::pdf::PdfExtractor;
use loam::extract::traits::TextExtractor;
use loam::pipeline;
use loam::segment::Chunker;

/// Stub extractor that reads .txt files verbatim.
struct TxtExtractor;

impl TextExtractor for TxtExtractor {
    fn supports(&self, path: &Path) -> bool {
        path.extension().is_some_and(|e| e.eq_ignore_ascii_case("txt"))
    }

    fn extract(&self, path: &Path) -> Result<Option<String>> {
        if !self.supports(path) {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }
}

/// Stub extractor that fails on files named like corrupt documents and
/// reads everything else verbatim.
struct FlakyExtractor;

impl TextExtractor for FlakyExtractor {
    fn supports(&self, path: &Path) -> bool {
        path.extension().is_some_and(|e| e.eq_ignore_ascii_case("txt"))
    }

    fn extract(&self, path: &Path) -> Result<Option<String>> {
        if path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().contains("corrupt"))
        {
            anyhow::bail!("unreadable document: {}", path.display());
        }
        Ok(Some(fs::read_to_string(path)?))
    }
}

fn chunker(max: usize) -> Chunker {
    Chunker {
        max_chunk_size: max,
        ..Chunker::default()
    }
}

#[test]
fn non_pdf_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "Carbon plans.\nMore text.\n").unwrap();

    let corpus = pipeline::run(&PdfExtractor::default(), &chunker(2500), dir.path()).unwrap();

    assert!(corpus.chunks.is_empty(), "Non-PDF files must produce no chunks");
    assert!(corpus.documents.is_empty());
    assert_eq!(corpus.skipped, 1);
    assert_eq!(corpus.failed, 0);
}

#[test]
fn empty_directory_yields_empty_corpus() {
    let dir = TempDir::new().unwrap();
    let corpus = pipeline::run(&PdfExtractor::default(), &chunker(2500), dir.path()).unwrap();
    assert!(corpus.chunks.is_empty());
    assert_eq!(corpus.skipped, 0);
}

#[test]
fn missing_directory_is_an_error() {
    let missing = PathBuf::from("/definitely/not/a/real/input/dir");
    let result = pipeline::run(&PdfExtractor::default(), &chunker(2500), &missing);
    assert!(result.is_err());
}

#[test]
fn documents_processed_in_file_name_order() {
    let dir = TempDir::new().unwrap();
    // Written out of order on purpose — enumeration must sort by name
    fs::write(dir.path().join("b_second.txt"), "Contents of report two.\n").unwrap();
    fs::write(dir.path().join("a_first.txt"), "Contents of report one.\n").unwrap();

    let corpus = pipeline::run(&TxtExtractor, &chunker(2500), dir.path()).unwrap();

    assert_eq!(corpus.documents.len(), 2);
    assert!(corpus.documents[0].path.ends_with("a_first.txt"));
    assert!(corpus.documents[1].path.ends_with("b_second.txt"));
    assert_eq!(
        corpus.chunks,
        vec![
            "Contents of report one".to_string(),
            "Contents of report two".to_string(),
        ]
    );
}

#[test]
fn cleaning_applies_before_chunking() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("report.txt"),
        "Cover page junk.\nIndex of sections.\nBody text here.\n",
    )
    .unwrap();

    let corpus = pipeline::run(&TxtExtractor, &chunker(2500), dir.path()).unwrap();

    assert_eq!(corpus.chunks.len(), 1);
    assert!(
        corpus.chunks[0].starts_with("Index of sections"),
        "Front matter before the marker should be gone: {:?}",
        corpus.chunks[0]
    );
    assert!(!corpus.chunks[0].contains("Cover page junk"));
}

#[test]
fn per_document_counts_are_recorded() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("report.txt"),
        "Carbon paragraph one.\nParagraph two.\nParagraph three.\n",
    )
    .unwrap();

    let corpus = pipeline::run(&TxtExtractor, &chunker(2500), dir.path()).unwrap();

    assert_eq!(corpus.documents.len(), 1);
    let doc = &corpus.documents[0];
    // Three delimiters produce three paragraph units plus a trailing empty one
    assert_eq!(doc.paragraph_count, 4);
    assert_eq!(doc.chunk_count, 1);
    assert_eq!(doc.chunk_count, corpus.chunks.len());
}

#[test]
fn failed_extraction_skips_document_and_continues() {
    let dir = TempDir::new().unwrap();
    // The failing file sorts first, so the batch must survive the failure
    // and still process the document after it
    fs::write(dir.path().join("a_corrupt.txt"), "never read").unwrap();
    fs::write(dir.path().join("b_good.txt"), "Carbon details.\nMore body.\n").unwrap();

    let corpus = pipeline::run(&FlakyExtractor, &chunker(2500), dir.path()).unwrap();

    assert_eq!(corpus.failed, 1, "Failed extraction should be counted");
    assert_eq!(corpus.skipped, 0);
    assert_eq!(corpus.documents.len(), 1);
    assert!(corpus.documents[0].path.ends_with("b_good.txt"));
    assert_eq!(corpus.chunks, vec!["Carbon details\n\nMore body".to_string()]);
}

#[test]
fn mixed_directory_processes_only_supported_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("report.txt"), "Carbon data.\nDetails.\n").unwrap();
    fs::write(dir.path().join("image.png"), [0u8, 1, 2, 3]).unwrap();

    let corpus = pipeline::run(&TxtExtractor, &chunker(2500), dir.path()).unwrap();

    assert_eq!(corpus.documents.len(), 1);
    assert_eq!(corpus.skipped, 1);
    assert_eq!(corpus.failed, 0);
}

#[test]
fn small_bound_produces_multiple_chunks_per_document() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("report.txt"),
        "Carbon first paragraph with some length.\nSecond paragraph also with length.\n",
    )
    .unwrap();

    let corpus = pipeline::run(&TxtExtractor, &chunker(45), dir.path()).unwrap();

    assert_eq!(corpus.documents.len(), 1);
    assert_eq!(corpus.documents[0].chunk_count, 2);
    assert_eq!(corpus.chunks.len(), 2);
}
