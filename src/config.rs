use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Default chunk size bound in characters.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 2500;

/// Default paragraph delimiter — a sentence-terminal period immediately
/// followed by a newline. This is a heuristic, not a guaranteed sentence
/// boundary (abbreviations and multi-period runs can mis-split), which is
/// why it is configurable rather than a buried literal.
pub const DEFAULT_PARAGRAPH_DELIMITER: &str = ".\n";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
/// CLI flags override the corresponding fields after load.
pub struct Config {
    /// Directory containing the report files to analyze
    pub input_dir: PathBuf,
    /// Chunk size bound, in characters
    pub max_chunk_size: usize,
    /// File extensions recognized by the extractor (lowercase, no dot)
    pub extensions: Vec<String>,
    /// Paragraph delimiter used by the chunker
    pub paragraph_delimiter: String,
    /// How many TF-IDF keywords to extract before clustering
    pub top_n_keywords: usize,
    /// Maximum number of topic clusters to produce
    pub max_topics: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every field has a default — a bare `loam analyze` works against
    /// `./reports` with the stock chunking and modeling parameters.
    pub fn load() -> Result<Self> {
        let input_dir = env::var("LOAM_INPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./reports"));

        let max_chunk_size = parse_env("LOAM_MAX_CHUNK_SIZE", DEFAULT_MAX_CHUNK_SIZE)?;
        if max_chunk_size == 0 {
            anyhow::bail!("LOAM_MAX_CHUNK_SIZE must be a positive number of characters");
        }

        let extensions = env::var("LOAM_EXTENSIONS")
            .unwrap_or_else(|_| "pdf".to_string())
            .split(',')
            .map(|s| s.trim().trim_start_matches('.').to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let paragraph_delimiter = env::var("LOAM_DELIMITER")
            .unwrap_or_else(|_| DEFAULT_PARAGRAPH_DELIMITER.to_string());

        Ok(Self {
            input_dir,
            max_chunk_size,
            extensions,
            paragraph_delimiter,
            top_n_keywords: parse_env("LOAM_TOP_KEYWORDS", 60)?,
            max_topics: parse_env("LOAM_MAX_TOPICS", 10)?,
        })
    }

    /// Check that the input directory exists.
    /// Call this before any operation that enumerates documents.
    pub fn require_input(&self) -> Result<()> {
        if !self.input_dir.is_dir() {
            anyhow::bail!(
                "Input directory not found: {}\n\
                 Set LOAM_INPUT_DIR in your .env file or pass --input-dir.",
                self.input_dir.display()
            );
        }
        Ok(())
    }
}

/// Parse a numeric env var, falling back to `default` when unset.
/// An unparseable value is a configuration error, not a silent fallback.
fn parse_env(key: &str, default: usize) -> Result<usize> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{key} is not a valid number: {raw:?}")),
        Err(_) => Ok(default),
    }
}
