// Colored terminal output for corpus and topic summaries.
//
// This module handles all terminal-specific formatting: colors, tables,
// previews. The main.rs display calls delegate here.

use colored::Colorize;

use crate::output::truncate_chars;
use crate::pipeline::Corpus;
use crate::topics::summary::{TopicModelOutput, OUTLIER_TOPIC};

/// Display per-document segmentation counts and corpus totals.
pub fn display_corpus_summary(corpus: &Corpus) {
    println!(
        "\n{}",
        format!("=== Corpus ({} documents) ===", corpus.documents.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:<44} {:>10}  {:>7}",
        "Document".dimmed(),
        "Paragraphs".dimmed(),
        "Chunks".dimmed(),
    );
    println!("  {}", "-".repeat(65).dimmed());

    for doc in &corpus.documents {
        let name = doc
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| doc.path.display().to_string());
        println!(
            "  {:<44} {:>10}  {:>7}",
            truncate_chars(&name, 42),
            doc.paragraph_count,
            doc.chunk_count,
        );
    }

    println!();
    println!("  Total chunks: {}", corpus.chunks.len().to_string().bold());
    if corpus.skipped > 0 {
        println!("  {} {} unsupported files skipped", "~".yellow(), corpus.skipped);
    }
    if corpus.failed > 0 {
        println!("  {} {} files failed extraction", "!".red(), corpus.failed);
    }
}

/// Show the highest-probability chunk for each topic as a preview.
///
/// A topic label built from three keywords can be cryptic; seeing the
/// chunk that belongs most strongly to the topic makes it legible.
pub fn display_topic_examples(output: &TopicModelOutput, chunks: &[String]) {
    println!("{}", "=== Representative Chunks ===".bold());
    println!();

    for topic in &output.topics {
        if topic.id == OUTLIER_TOPIC {
            continue;
        }

        let best = output
            .chunks_by_topic(topic.id)
            .into_iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let Some((chunk_idx, probability)) = best else {
            continue;
        };

        println!("  {} {}", format!("{}.", topic.id).bold(), topic.label.bold());
        let preview = truncate_chars(&chunks[chunk_idx].replace('\n', " "), 160);
        println!(
            "     {} \"{}\"",
            format!("[p={probability:.2}]").dimmed(),
            preview.dimmed(),
        );
        println!();
    }
}
