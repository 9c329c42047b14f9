use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use loam::config::Config;
use loam::extract::pdf::PdfExtractor;
use loam::output::terminal;
use loam::output::truncate_chars;
use loam::segment::Chunker;
use loam::topics::tfidf::TfIdfTopicModel;
use loam::topics::traits::TopicModel;

/// Loam: topic discovery for sustainability report archives.
///
/// Extracts text from PDF reports, trims front matter, packs the text into
/// bounded-size chunks, and discovers latent topics across the archive.
#[derive(Parser)]
#[command(name = "loam", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: extract, segment, and model topics
    Analyze {
        /// Directory of report files (overrides LOAM_INPUT_DIR)
        #[arg(long)]
        input_dir: Option<PathBuf>,

        /// Chunk size bound in characters (overrides LOAM_MAX_CHUNK_SIZE)
        #[arg(long)]
        max_chunk_size: Option<usize>,

        /// Maximum number of topics (overrides LOAM_MAX_TOPICS)
        #[arg(long)]
        max_topics: Option<usize>,

        /// Print the model output as JSON instead of formatted tables
        #[arg(long)]
        json: bool,
    },

    /// Segment documents without modeling (inspect chunk boundaries)
    Segment {
        /// Directory of report files (overrides LOAM_INPUT_DIR)
        #[arg(long)]
        input_dir: Option<PathBuf>,

        /// Chunk size bound in characters (overrides LOAM_MAX_CHUNK_SIZE)
        #[arg(long)]
        max_chunk_size: Option<usize>,

        /// Also print a preview of every chunk
        #[arg(long)]
        show_chunks: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("loam=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input_dir,
            max_chunk_size,
            max_topics,
            json,
        } => {
            let mut config = Config::load()?;
            if let Some(dir) = input_dir {
                config.input_dir = dir;
            }
            if let Some(size) = max_chunk_size {
                anyhow::ensure!(size > 0, "--max-chunk-size must be positive");
                config.max_chunk_size = size;
            }
            if let Some(n) = max_topics {
                config.max_topics = n;
            }
            config.require_input()?;

            let corpus = build_corpus(&config)?;
            terminal::display_corpus_summary(&corpus);

            if corpus.chunks.is_empty() {
                anyhow::bail!(
                    "No chunks produced from {} — insufficient documents to model.\n\
                     Add PDF reports to the directory or check --input-dir.",
                    config.input_dir.display()
                );
            }

            println!("\nModeling topics across {} chunks...", corpus.chunks.len());

            let model = TfIdfTopicModel {
                top_n_keywords: config.top_n_keywords,
                max_topics: config.max_topics,
            };
            let output = model.fit_transform(&corpus.chunks)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                output.display();
                terminal::display_topic_examples(&output, &corpus.chunks);
                println!(
                    "{}",
                    "Review the topics above — do they match what the reports discuss?".bold()
                );
            }
        }

        Commands::Segment {
            input_dir,
            max_chunk_size,
            show_chunks,
        } => {
            let mut config = Config::load()?;
            if let Some(dir) = input_dir {
                config.input_dir = dir;
            }
            if let Some(size) = max_chunk_size {
                anyhow::ensure!(size > 0, "--max-chunk-size must be positive");
                config.max_chunk_size = size;
            }
            config.require_input()?;

            let corpus = build_corpus(&config)?;
            terminal::display_corpus_summary(&corpus);

            if show_chunks {
                println!();
                for (i, chunk) in corpus.chunks.iter().enumerate() {
                    let preview = truncate_chars(&chunk.replace('\n', " "), 120);
                    println!("  {:>4}. ({} chars) {}", i + 1, chunk.chars().count(), preview.dimmed());
                }
            }
        }
    }

    Ok(())
}

/// Run extraction and segmentation over the configured input directory.
fn build_corpus(config: &Config) -> Result<loam::pipeline::Corpus> {
    println!(
        "Scanning {} for documents...",
        config.input_dir.display().to_string().bold()
    );

    let extractor = PdfExtractor::new(&config.extensions);
    let chunker = Chunker {
        max_chunk_size: config.max_chunk_size,
        delimiter: config.paragraph_delimiter.clone(),
    };

    loam::pipeline::run(&extractor, &chunker, &config.input_dir)
}
