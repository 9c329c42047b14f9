// Loam: topic discovery for sustainability report archives
//
// This is the library root. Each module corresponds to a stage of the
// batch pipeline: extract text, segment it into chunks, assemble the
// corpus, model topics, display results.

pub mod config;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod segment;
pub mod topics;
