// Topic modeling — TF-IDF keyword clustering and per-chunk assignment.

pub mod summary;
pub mod tfidf;
pub mod traits;
