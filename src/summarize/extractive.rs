//! Extractive frequency-scored summarizer
//!
//! Scores each sentence by the normalized frequency of its content words
//! and keeps the best sentences, emitted in document order, within the
//! word budget.

use std::collections::HashMap;

use super::{split_sentences, word_count, SummaryBounds, Summarizer};
use crate::keywords::stopwords::is_stopword;
use crate::{Error, Result};

/// Summarizer selecting the highest-scoring sentences
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    bounds: SummaryBounds,
}

impl ExtractiveSummarizer {
    /// Create an extractive summarizer with the given bounds
    pub fn new(bounds: SummaryBounds) -> Self {
        Self { bounds }
    }

    /// Content words of a sentence, lower-cased
    fn content_words(sentence: &str) -> Vec<String> {
        sentence
            .split_whitespace()
            .map(|raw| {
                raw.chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    .to_lowercase()
            })
            .filter(|word| !word.is_empty() && !is_stopword(word))
            .collect()
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn summarize(&self, text: &str) -> Result<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let sentences = split_sentences(text);
        if sentences.len() <= 1 {
            // Nothing to select between; fall back to plain truncation
            return super::TruncationSummarizer::new(self.bounds).summarize(text);
        }

        // Document-wide content word frequencies, normalized by the max
        let mut frequency: HashMap<String, f64> = HashMap::new();
        for sentence in &sentences {
            for word in Self::content_words(sentence) {
                *frequency.entry(word).or_insert(0.0) += 1.0;
            }
        }
        let max_frequency = frequency.values().cloned().fold(1.0, f64::max);

        let mut scored: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| {
                let words = Self::content_words(sentence);
                let score: f64 = words
                    .iter()
                    .map(|word| frequency[word] / max_frequency)
                    .sum();
                // Damp very long sentences so density wins over length
                let damped = score / (words.len().max(1) as f64).sqrt();
                (index, damped)
            })
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        // Take the best sentences that fit the budget, then restore
        // document order
        let mut selected: Vec<usize> = Vec::new();
        let mut words = 0;
        for (index, _) in scored {
            let sentence_words = word_count(&sentences[index]);
            if words >= self.bounds.min_words && words + sentence_words > self.bounds.max_words {
                continue;
            }
            selected.push(index);
            words += sentence_words;
            if words >= self.bounds.max_words {
                break;
            }
        }
        selected.sort_unstable();

        let summary = selected
            .iter()
            .map(|&index| sentences[index].as_str())
            .collect::<Vec<_>>()
            .join(" ");

        if word_count(&summary) > self.bounds.max_words {
            return Ok(summary
                .split_whitespace()
                .take(self.bounds.max_words)
                .collect::<Vec<_>>()
                .join(" "));
        }

        Ok(summary)
    }

    fn name(&self) -> &str {
        "extractive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_bounds() -> SummaryBounds {
        SummaryBounds {
            min_words: 4,
            max_words: 10,
        }
    }

    #[test]
    fn test_dense_sentences_selected() {
        let summarizer = ExtractiveSummarizer::new(small_bounds());
        let text = "Translation routing chains translation models. \
                    Cats sleep in gardens sometimes during afternoons apparently. \
                    Routing picks translation models.";
        let summary = summarizer.summarize(text).unwrap();
        assert!(summary.contains("Translation routing"));
        assert!(!summary.contains("Cats"));
    }

    #[test]
    fn test_document_order_preserved() {
        let summarizer = ExtractiveSummarizer::new(SummaryBounds {
            min_words: 1,
            max_words: 20,
        });
        let text = "Alpha routing works. Beta routing works. Gamma routing works.";
        let summary = summarizer.summarize(text).unwrap();
        let alpha = summary.find("Alpha").unwrap_or(usize::MAX);
        let gamma = summary.find("Gamma").unwrap_or(usize::MAX);
        assert!(alpha < gamma);
    }

    #[test]
    fn test_single_sentence_falls_back() {
        let summarizer = ExtractiveSummarizer::new(small_bounds());
        let summary = summarizer.summarize("Only one sentence here.").unwrap();
        assert_eq!(summary, "Only one sentence here.");
    }

    #[test]
    fn test_budget_enforced() {
        let summarizer = ExtractiveSummarizer::new(small_bounds());
        let text = "Routing routing routing routing keeps chains strict in order always here. \
                    Routing routing routing routing keeps chains strict in order always there.";
        let summary = summarizer.summarize(text).unwrap();
        assert!(word_count(&summary) <= 10);
    }

    #[test]
    fn test_empty_input_rejected() {
        let summarizer = ExtractiveSummarizer::new(small_bounds());
        assert!(matches!(summarizer.summarize(""), Err(Error::EmptyInput)));
    }
}
