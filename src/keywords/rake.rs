//! RAKE-style keyword extraction
//!
//! Splits text into candidate phrases at stopwords and punctuation,
//! scores each word by degree/frequency over the phrase set, and ranks
//! phrases by the sum of their word scores.

use std::collections::HashMap;

use super::stopwords::is_stopword;
use super::KeywordExtractor;
use crate::Result;

/// Maximum number of phrases returned
const MAX_PHRASES: usize = 8;

/// Maximum words per candidate phrase
const MAX_PHRASE_LEN: usize = 4;

/// Keyword extractor using RAKE phrase scoring
#[derive(Debug, Clone, Default)]
pub struct RakeExtractor;

impl RakeExtractor {
    /// Create a RAKE extractor
    pub fn new() -> Self {
        Self
    }

    /// Break text into candidate phrases of contiguous content words
    fn candidate_phrases(text: &str) -> Vec<Vec<String>> {
        let mut phrases = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for raw in text.split_whitespace() {
            let word: String = raw
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            let boundary = raw.ends_with(['.', ',', '!', '?', ';', ':']);

            if word.is_empty() || is_stopword(&word) || current.len() >= MAX_PHRASE_LEN {
                if !current.is_empty() {
                    phrases.push(std::mem::take(&mut current));
                }
            }

            if !word.is_empty() && !is_stopword(&word) {
                current.push(word);
            }

            if boundary && !current.is_empty() {
                phrases.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            phrases.push(current);
        }

        phrases
    }
}

impl KeywordExtractor for RakeExtractor {
    fn extract(&self, text: &str) -> Result<Vec<String>> {
        let phrases = Self::candidate_phrases(text);
        if phrases.is_empty() {
            return Ok(Vec::new());
        }

        // Word scores: degree (co-occurrence weight) over frequency
        let mut frequency: HashMap<&str, f64> = HashMap::new();
        let mut degree: HashMap<&str, f64> = HashMap::new();
        for phrase in &phrases {
            let weight = phrase.len() as f64;
            for word in phrase {
                *frequency.entry(word).or_insert(0.0) += 1.0;
                *degree.entry(word).or_insert(0.0) += weight;
            }
        }

        let mut scored: Vec<(String, f64)> = Vec::new();
        let mut seen: HashMap<String, ()> = HashMap::new();
        for phrase in &phrases {
            let key = phrase.join(" ");
            if seen.insert(key.clone(), ()).is_some() {
                continue;
            }
            let score: f64 = phrase
                .iter()
                .map(|word| degree[word.as_str()] / frequency[word.as_str()])
                .sum();
            scored.push((key, score));
        }

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        Ok(scored
            .into_iter()
            .take(MAX_PHRASES)
            .map(|(phrase, _)| phrase)
            .collect())
    }

    fn name(&self) -> &str {
        "rake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_split_at_stopwords() {
        let phrases = RakeExtractor::candidate_phrases("neural machine translation of long documents");
        assert_eq!(phrases.len(), 2);
        assert_eq!(phrases[0], vec!["neural", "machine", "translation"]);
        assert_eq!(phrases[1], vec!["long", "documents"]);
    }

    #[test]
    fn test_phrases_split_at_punctuation() {
        let phrases = RakeExtractor::candidate_phrases("strict routing, careful sequencing");
        assert_eq!(phrases.len(), 2);
        assert_eq!(phrases[0], vec!["strict", "routing"]);
    }

    #[test]
    fn test_multiword_phrases_outrank_single_words() {
        let extractor = RakeExtractor::new();
        let keywords = extractor
            .extract("Neural machine translation and plain translation of quality.")
            .unwrap();
        assert_eq!(keywords[0], "neural machine translation");
    }

    #[test]
    fn test_duplicates_collapse() {
        let extractor = RakeExtractor::new();
        let keywords = extractor
            .extract("language pair, language pair, language pair")
            .unwrap();
        assert_eq!(keywords, vec!["language pair"]);
    }

    #[test]
    fn test_empty_text() {
        let extractor = RakeExtractor::new();
        assert!(extractor.extract("").unwrap().is_empty());
    }
}
