//! Frequency-based keyword extraction
//!
//! Lower-cases the text, strips punctuation, filters stopwords, and keeps
//! words that occur more than once; when nothing repeats, falls back to
//! the three most frequent words.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::stopwords::is_stopword;
use super::KeywordExtractor;
use crate::Result;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// How many words the fallback path returns
const FALLBACK_TOP_N: usize = 3;

/// Keyword extractor based on raw word frequency
#[derive(Debug, Clone, Default)]
pub struct FrequencyExtractor;

impl FrequencyExtractor {
    /// Create a frequency extractor
    pub fn new() -> Self {
        Self
    }
}

impl KeywordExtractor for FrequencyExtractor {
    fn extract(&self, text: &str) -> Result<Vec<String>> {
        let lowered = text.to_lowercase();
        let cleaned = PUNCTUATION.replace_all(&lowered, "");

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for word in cleaned.split_whitespace() {
            if is_stopword(word) {
                continue;
            }
            let count = counts.entry(word).or_insert(0);
            if *count == 0 {
                order.push(word);
            }
            *count += 1;
        }

        let repeated: Vec<String> = order
            .iter()
            .filter(|word| counts[*word] > 1)
            .map(|word| word.to_string())
            .collect();

        if !repeated.is_empty() {
            return Ok(repeated);
        }

        // Nothing repeats: take the top words by count, first-seen order
        // breaking ties
        let mut ranked = order.clone();
        ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
        Ok(ranked
            .into_iter()
            .take(FALLBACK_TOP_N)
            .map(String::from)
            .collect())
    }

    fn name(&self) -> &str {
        "frequency"
    }
}
