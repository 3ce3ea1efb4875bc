//! Noun-chunk keyword extraction
//!
//! Approximates noun phrases without a tagger: contiguous runs of content
//! words, with adverb-looking tokens dropped, bounded in length. Chunks
//! are ranked by how often they recur in the text.

use std::collections::HashMap;

use super::stopwords::is_stopword;
use super::KeywordExtractor;
use crate::Result;

/// Length bounds for a chunk, in words
#[derive(Debug, Clone)]
pub struct ChunkBounds {
    /// Minimum number of words in a chunk
    pub min_words: usize,
    /// Maximum number of words in a chunk
    pub max_words: usize,
}

impl Default for ChunkBounds {
    fn default() -> Self {
        Self {
            min_words: 1,
            max_words: 4,
        }
    }
}

/// Keyword extractor returning heuristic noun chunks
#[derive(Debug, Clone, Default)]
pub struct NounChunkExtractor {
    bounds: ChunkBounds,
}

impl NounChunkExtractor {
    /// Create an extractor with default bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom bounds
    pub fn with_bounds(bounds: ChunkBounds) -> Self {
        Self { bounds }
    }

    /// Whether a token looks like it belongs inside a noun chunk
    fn is_chunk_word(word: &str) -> bool {
        !is_stopword(word) && !word.ends_with("ly")
    }
}

impl KeywordExtractor for NounChunkExtractor {
    fn extract(&self, text: &str) -> Result<Vec<String>> {
        let mut chunks: Vec<String> = Vec::new();
        let mut current: Vec<String> = Vec::new();

        let flush = |current: &mut Vec<String>, chunks: &mut Vec<String>| {
            if current.len() >= self.bounds.min_words && current.len() <= self.bounds.max_words {
                chunks.push(current.join(" "));
            }
            current.clear();
        };

        for raw in text.split_whitespace() {
            let word: String = raw
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            let boundary = raw.ends_with(['.', ',', '!', '?', ';', ':']);

            if word.is_empty() || !Self::is_chunk_word(&word) {
                flush(&mut current, &mut chunks);
            } else {
                current.push(word);
                if current.len() == self.bounds.max_words {
                    flush(&mut current, &mut chunks);
                }
            }

            if boundary {
                flush(&mut current, &mut chunks);
            }
        }
        flush(&mut current, &mut chunks);

        // Rank recurring chunks first, first occurrence breaking ties
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for chunk in &chunks {
            let count = counts.entry(chunk).or_insert(0);
            if *count == 0 {
                order.push(chunk);
            }
            *count += 1;
        }
        let mut ranked = order;
        ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));

        Ok(ranked.into_iter().map(String::from).collect())
    }

    fn name(&self) -> &str {
        "noun-chunks"
    }
}
