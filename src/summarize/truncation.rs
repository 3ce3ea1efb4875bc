//! Leading-sentence truncation summarizer

use super::{split_sentences, word_count, SummaryBounds, Summarizer};
use crate::{Error, Result};

/// Summarizer that keeps leading sentences up to the word budget
#[derive(Debug, Clone)]
pub struct TruncationSummarizer {
    bounds: SummaryBounds,
}

impl TruncationSummarizer {
    /// Create a truncation summarizer with the given bounds
    pub fn new(bounds: SummaryBounds) -> Self {
        Self { bounds }
    }
}

impl Summarizer for TruncationSummarizer {
    fn summarize(&self, text: &str) -> Result<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut summary = String::new();
        let mut words = 0;

        for sentence in split_sentences(text) {
            let sentence_words = word_count(&sentence);
            if words >= self.bounds.min_words && words + sentence_words > self.bounds.max_words {
                break;
            }
            if !summary.is_empty() {
                summary.push(' ');
            }
            summary.push_str(&sentence);
            words += sentence_words;
            if words >= self.bounds.max_words {
                break;
            }
        }

        // A single over-long sentence still gets cut at the budget
        if word_count(&summary) > self.bounds.max_words {
            summary = summary
                .split_whitespace()
                .take(self.bounds.max_words)
                .collect::<Vec<_>>()
                .join(" ");
        }

        Ok(summary)
    }

    fn name(&self) -> &str {
        "truncation"
    }
}
