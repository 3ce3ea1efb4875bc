//! Summarization stage
//!
//! Two interchangeable summarizers behind one trait: leading-sentence
//! truncation and an extractive frequency-scored selector. Both honor a
//! shared word budget.

pub mod extractive;
pub mod truncation;

pub use extractive::ExtractiveSummarizer;
pub use truncation::TruncationSummarizer;

use tracing::warn;

use crate::Result;

/// Word budget for a summary
#[derive(Debug, Clone, Copy)]
pub struct SummaryBounds {
    /// Minimum summary length in words, when the input allows it
    pub min_words: usize,
    /// Maximum summary length in words
    pub max_words: usize,
}

impl Default for SummaryBounds {
    fn default() -> Self {
        Self {
            min_words: 25,
            max_words: 50,
        }
    }
}

/// A summarization strategy
pub trait Summarizer: Send + Sync {
    /// Produce a summary of the text within the configured bounds
    fn summarize(&self, text: &str) -> Result<String>;

    /// Strategy name for logs and diagnostics
    fn name(&self) -> &str;
}

/// Build the summarizer named in configuration, defaulting to truncation
pub fn summarizer_for(kind: &str, bounds: SummaryBounds) -> Box<dyn Summarizer> {
    match kind.to_lowercase().as_str() {
        "truncation" => Box::new(TruncationSummarizer::new(bounds)),
        "extractive" => Box::new(ExtractiveSummarizer::new(bounds)),
        other => {
            warn!("Unknown summarizer '{}', falling back to truncation", other);
            Box::new(TruncationSummarizer::new(bounds))
        }
    }
}

/// Split text into sentences on terminal punctuation
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Number of whitespace-separated words in a string
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
