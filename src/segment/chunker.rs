// Greedy paragraph chunking.
//
// Splits text into paragraph units on a configurable delimiter, then packs
// consecutive paragraphs into chunks bounded by a character count. Packing
// is greedy and order-preserving: a chunk is flushed the moment the next
// paragraph would push it past the bound.

use tracing::debug;

use crate::config::{DEFAULT_MAX_CHUNK_SIZE, DEFAULT_PARAGRAPH_DELIMITER};

/// Packs paragraph units into bounded-size chunks.
///
/// Sizes are Unicode scalar counts, not bytes. A single paragraph larger
/// than `max_chunk_size` is emitted verbatim as its own oversized chunk —
/// the chunker never splits inside a paragraph.
pub struct Chunker {
    /// Chunk size bound, in characters
    pub max_chunk_size: usize,
    /// Literal separator between paragraph units
    pub delimiter: String,
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            delimiter: DEFAULT_PARAGRAPH_DELIMITER.to_string(),
        }
    }
}

impl Chunker {
    /// Split `text` into paragraph units on the configured delimiter.
    /// The delimiter itself is consumed by the split.
    pub fn split_paragraphs<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(self.delimiter.as_str()).collect()
    }

    /// Chunk `text` into an ordered sequence of bounded-size chunks.
    ///
    /// Each accepted paragraph contributes its own length plus a two-char
    /// `"\n\n"` joiner to the accumulator, while the overflow test charges
    /// only one extra character — so an untrimmed chunk can run one char
    /// past the bound before trimming brings it back under. Trimmed chunks
    /// whose paragraphs individually fit the bound never exceed it.
    ///
    /// Whitespace-normalized, the concatenated output reproduces every
    /// paragraph unit in order. Empty input yields an empty sequence.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let paragraphs = self.split_paragraphs(text);
        debug!(paragraphs = paragraphs.len(), "Split text into paragraph units");

        let mut chunks = Vec::new();
        let mut current = String::new();
        // Running char count of `current`, maintained incrementally so the
        // loop stays linear in the text length.
        let mut current_chars = 0usize;

        for paragraph in paragraphs {
            let paragraph_chars = paragraph.chars().count();

            if current_chars + paragraph_chars + 1 > self.max_chunk_size {
                let completed = current.trim();
                if !completed.is_empty() {
                    chunks.push(completed.to_string());
                }
                current.clear();
                current.push_str(paragraph);
                current.push_str("\n\n");
                current_chars = paragraph_chars + 2;
            } else {
                current.push_str(paragraph);
                current.push_str("\n\n");
                current_chars += paragraph_chars + 2;
            }
        }

        let last = current.trim();
        if !last.is_empty() {
            chunks.push(last.to_string());
        }

        chunks
    }
}
