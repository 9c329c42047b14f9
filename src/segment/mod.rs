// Text segmentation — front-matter cleaning and greedy paragraph chunking.

pub mod chunker;
pub mod cleaner;

pub use chunker::Chunker;
pub use cleaner::clean;
