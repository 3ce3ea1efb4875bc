//! Keyword extraction stage
//!
//! Three interchangeable extractors behind one trait, selected by
//! configuration: raw frequency, RAKE phrase scoring, and heuristic
//! noun chunks.

pub mod frequency;
pub mod noun_chunks;
pub mod rake;
pub mod stopwords;

pub use frequency::FrequencyExtractor;
pub use noun_chunks::{ChunkBounds, NounChunkExtractor};
pub use rake::RakeExtractor;

use tracing::warn;

use crate::Result;

/// A keyword extraction strategy
pub trait KeywordExtractor: Send + Sync {
    /// Extract keywords from text, most relevant first
    fn extract(&self, text: &str) -> Result<Vec<String>>;

    /// Strategy name for logs and diagnostics
    fn name(&self) -> &str;
}

/// Build the extractor named in configuration, defaulting to frequency
pub fn extractor_for(kind: &str) -> Box<dyn KeywordExtractor> {
    match kind.to_lowercase().as_str() {
        "frequency" => Box::new(FrequencyExtractor::new()),
        "rake" => Box::new(RakeExtractor::new()),
        "noun-chunks" => Box::new(NounChunkExtractor::new()),
        other => {
            warn!("Unknown keyword extractor '{}', falling back to frequency", other);
            Box::new(FrequencyExtractor::new())
        }
    }
}
