// TF-IDF topic model implementation.
//
// Uses the `keyword_extraction` crate to extract keywords from the corpus,
// clusters co-occurring keywords into topics, then assigns each chunk to
// the topic whose keywords carry the most TF-IDF weight inside it.
//
// Each chunk is treated as a separate document for IDF computation — words
// that appear in every chunk get downweighted, while words distinctive to
// certain chunks get boosted. This is exactly what we want for discovering
// what differentiates parts of a report archive.

use anyhow::Result;
use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::info;

use super::summary::{TopicAssignment, TopicInfo, TopicModelOutput, OUTLIER_TOPIC};
use super::traits::TopicModel;

/// TF-IDF based topic model — runs locally, no API calls, no model files.
pub struct TfIdfTopicModel {
    /// How many top keywords to extract before clustering
    pub top_n_keywords: usize,
    /// How many topics to produce at most
    pub max_topics: usize,
}

impl Default for TfIdfTopicModel {
    fn default() -> Self {
        Self {
            top_n_keywords: 60,
            max_topics: 10,
        }
    }
}

impl TopicModel for TfIdfTopicModel {
    fn fit_transform(&self, corpus: &[String]) -> Result<TopicModelOutput> {
        if corpus.is_empty() {
            anyhow::bail!("Corpus is empty — insufficient documents to model topics");
        }

        // Get English stop words from the stop-words crate
        let stop_words: Vec<String> = get(LANGUAGE::English);

        // Run TF-IDF with each chunk as a separate document.
        // The library handles tokenization, stop word removal, and scoring.
        let params = TfIdfParams::UnprocessedDocuments(corpus, &stop_words, None);
        let tfidf = TfIdf::new(params);

        let ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(self.top_n_keywords);

        if ranked.is_empty() {
            anyhow::bail!(
                "TF-IDF produced no keywords from {} chunks — corpus may be too small or uniform",
                corpus.len()
            );
        }

        info!(
            keywords = ranked.len(),
            top_keyword = &ranked[0].0,
            top_score = ranked[0].1,
            "Extracted TF-IDF keywords"
        );

        // Cluster keywords into topics using co-occurrence, then assign
        // every chunk to its best-matching topic.
        let clusters = cluster_keywords(&ranked, corpus, self.max_topics);
        let assignments = assign_chunks(&clusters, corpus);

        let mut topics: Vec<TopicInfo> = clusters
            .into_iter()
            .enumerate()
            .map(|(id, c)| TopicInfo {
                id: id as i64,
                label: c.label,
                keywords: c.keywords,
                weight: c.weight,
                count: 0,
            })
            .collect();

        // Count chunks per topic; collect outliers into their own bucket.
        let mut outliers = 0usize;
        for a in &assignments {
            if a.topic_id == OUTLIER_TOPIC {
                outliers += 1;
            } else {
                topics[a.topic_id as usize].count += 1;
            }
        }
        if outliers > 0 {
            topics.push(TopicInfo {
                id: OUTLIER_TOPIC,
                label: "(outliers)".to_string(),
                keywords: Vec::new(),
                weight: 0.0,
                count: outliers,
            });
        }

        Ok(TopicModelOutput {
            topics,
            assignments,
            chunk_count: corpus.len() as u32,
        })
    }
}

/// A keyword cluster before it becomes a numbered topic.
struct KeywordCluster {
    label: String,
    keywords: Vec<String>,
    /// Per-keyword TF-IDF scores, aligned with `keywords`
    scores: Vec<f32>,
    weight: f64,
}

/// Group keywords into clusters based on co-occurrence in chunks.
///
/// Strategy: for each pair of keywords, count how often they appear in the
/// same chunk. Then greedily build clusters by starting with the highest-
/// scored keyword and pulling in its most co-occurring neighbors.
fn cluster_keywords(
    ranked: &[(String, f32)],
    corpus: &[String],
    max_topics: usize,
) -> Vec<KeywordCluster> {
    let keywords: Vec<&str> = ranked.iter().map(|(w, _)| w.as_str()).collect();

    // For each chunk, record which keywords appear in it
    let chunk_keywords: Vec<Vec<usize>> = corpus
        .iter()
        .map(|chunk| {
            let lower = chunk.to_lowercase();
            keywords
                .iter()
                .enumerate()
                .filter(|(_, kw)| lower.contains(*kw))
                .map(|(i, _)| i)
                .collect()
        })
        .collect();

    // Count co-occurrences
    let n = keywords.len();
    let mut cooccurrence = vec![vec![0u32; n]; n];
    for ck in &chunk_keywords {
        for &i in ck {
            for &j in ck {
                if i != j {
                    cooccurrence[i][j] += 1;
                }
            }
        }
    }

    // Greedy clustering: start from the highest-scored unclustered keyword,
    // pull in its top co-occurring keywords that aren't yet assigned
    let mut assigned = vec![false; n];
    let mut clusters = Vec::new();

    let total_score: f32 = ranked.iter().map(|(_, s)| s).sum();

    for seed_idx in 0..n {
        // The scan stops at the first already-clustered keyword rather than
        // skipping past it, so fewer than max_topics clusters can come out
        // even while lower-ranked keywords remain unassigned.
        if assigned[seed_idx] || clusters.len() >= max_topics {
            break;
        }

        assigned[seed_idx] = true;
        let mut cluster_indices = vec![seed_idx];
        let mut cluster_score = ranked[seed_idx].1;

        // Find the top co-occurring unassigned keywords
        let mut candidates: Vec<(usize, u32)> = (0..n)
            .filter(|&i| !assigned[i] && cooccurrence[seed_idx][i] > 0)
            .map(|i| (i, cooccurrence[seed_idx][i]))
            .collect();
        candidates.sort_by(|a, b| b.1.cmp(&a.1));

        // Pull in up to 5 related keywords per cluster
        for (idx, _count) in candidates.into_iter().take(5) {
            assigned[idx] = true;
            cluster_score += ranked[idx].1;
            cluster_indices.push(idx);
        }

        let cluster_keywords: Vec<String> = cluster_indices
            .iter()
            .map(|&i| ranked[i].0.clone())
            .collect();
        let cluster_scores: Vec<f32> = cluster_indices.iter().map(|&i| ranked[i].1).collect();

        let label = make_topic_label(&cluster_keywords);

        let weight = if total_score > 0.0 {
            (cluster_score / total_score) as f64
        } else {
            0.0
        };

        clusters.push(KeywordCluster {
            label,
            keywords: cluster_keywords,
            scores: cluster_scores,
            weight,
        });
    }

    // Normalize weights so they sum to 1.0
    let weight_sum: f64 = clusters.iter().map(|c| c.weight).sum();
    if weight_sum > 0.0 {
        for cluster in &mut clusters {
            cluster.weight /= weight_sum;
        }
    }

    // Sort by weight descending
    clusters.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    clusters
}

/// Assign each chunk to the cluster whose keywords carry the most TF-IDF
/// weight inside it; probability is that weight normalized over all
/// clusters. Chunks containing no cluster keyword at all go to the
/// outlier bucket with probability 0.
fn assign_chunks(clusters: &[KeywordCluster], corpus: &[String]) -> Vec<TopicAssignment> {
    corpus
        .iter()
        .map(|chunk| {
            let lower = chunk.to_lowercase();

            let mut best_topic = OUTLIER_TOPIC;
            let mut best_score = 0.0f64;
            let mut total = 0.0f64;

            for (id, cluster) in clusters.iter().enumerate() {
                let score: f64 = cluster
                    .keywords
                    .iter()
                    .zip(&cluster.scores)
                    .filter(|(kw, _)| lower.contains(kw.as_str()))
                    .map(|(_, s)| *s as f64)
                    .sum();
                total += score;
                if score > best_score {
                    best_score = score;
                    best_topic = id as i64;
                }
            }

            let probability = if total > 0.0 { best_score / total } else { 0.0 };

            TopicAssignment {
                topic_id: best_topic,
                probability,
            }
        })
        .collect()
}

/// Build a human-readable topic label from the top 2-3 keywords.
fn make_topic_label(keywords: &[String]) -> String {
    let label_words: Vec<&str> = keywords.iter().take(3).map(|s| s.as_str()).collect();
    label_words.join(" / ")
}
