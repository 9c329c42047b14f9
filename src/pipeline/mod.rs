// The batch pipeline: enumerate documents, extract, clean, chunk, and
// assemble the corpus handed to topic modeling.

pub mod ingest;

pub use ingest::{run, Corpus, DocumentReport};
