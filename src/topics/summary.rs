// TopicModelOutput — the structured result of a modeling run.
//
// A run produces a ranked list of topics (label, keywords, weight, chunk
// count) and one assignment per corpus chunk. Topic id -1 is the outlier
// bucket: chunks that matched no topic's keywords at all.

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Topic id for chunks that belong to no discovered topic.
pub const OUTLIER_TOPIC: i64 = -1;

/// A single discovered topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicInfo {
    /// Topic id; -1 marks the outlier bucket
    pub id: i64,
    /// Human-readable label built from the top keywords
    pub label: String,
    /// The keywords that make up this topic, in descending score order
    pub keywords: Vec<String>,
    /// Normalized weight (0.0 to 1.0) of this topic across the corpus
    pub weight: f64,
    /// Number of chunks assigned to this topic
    pub count: usize,
}

/// Topic membership for one corpus chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicAssignment {
    pub topic_id: i64,
    /// Normalized membership probability (0.0 to 1.0)
    pub probability: f64,
}

/// The complete output of one modeling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicModelOutput {
    /// Discovered topics, highest weight first; the outlier bucket (if any
    /// chunk landed in it) comes last
    pub topics: Vec<TopicInfo>,
    /// One assignment per corpus chunk, in corpus order
    pub assignments: Vec<TopicAssignment>,
    /// Total number of chunks modeled
    pub chunk_count: u32,
}

impl TopicModelOutput {
    /// Display the topic summary as a formatted bar chart in the terminal.
    ///
    /// This is the run's headline output — it should be scannable enough
    /// to judge at a glance whether the discovered topics are plausible.
    pub fn display(&self) {
        println!(
            "\n{}",
            format!("=== Discovered Topics ({} chunks) ===", self.chunk_count).bold()
        );
        println!();

        let bar_width: usize = 20;

        for topic in &self.topics {
            let filled = (topic.weight * bar_width as f64).round() as usize;
            let empty = bar_width.saturating_sub(filled);
            let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

            let colored_bar = if topic.weight >= 0.25 {
                bar.bright_green()
            } else if topic.weight >= 0.10 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            let id_str = if topic.id == OUTLIER_TOPIC {
                "  *".dimmed().to_string()
            } else {
                format!("{:>3}", topic.id)
            };

            println!(
                "  {}. {:<40} {} {:.2}  ({} chunks)",
                id_str,
                topic.label.bold(),
                colored_bar,
                topic.weight,
                topic.count,
            );

            if !topic.keywords.is_empty() {
                println!("       Keywords: {}", topic.keywords.join(", ").dimmed());
            }
            println!();
        }
    }

    /// Assignments grouped by topic id, each as (chunk index, probability).
    pub fn chunks_by_topic(&self, topic_id: i64) -> Vec<(usize, f64)> {
        self.assignments
            .iter()
            .enumerate()
            .filter(|(_, a)| a.topic_id == topic_id)
            .map(|(i, a)| (i, a.probability))
            .collect()
    }
}
