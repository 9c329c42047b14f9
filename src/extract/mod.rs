// Text extraction — the boundary between document formats and the pipeline.

pub mod pdf;
pub mod traits;
