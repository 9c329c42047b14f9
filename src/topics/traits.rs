// Topic model trait — swap-ready abstraction.
//
// The pipeline only assembles the corpus and hands it over once per run;
// it does not need to understand the model's internals. The default
// implementation uses TF-IDF keyword clustering, but this could be
// replaced with an embeddings-based model without touching the pipeline.

use anyhow::Result;

use super::summary::TopicModelOutput;

/// Trait for discovering latent topics in a corpus of text chunks.
pub trait TopicModel {
    /// Fit the model on the corpus and assign every chunk a topic id and
    /// a membership probability, in corpus order.
    fn fit_transform(&self, corpus: &[String]) -> Result<TopicModelOutput>;
}
