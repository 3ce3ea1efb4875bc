//! Shared types used across the pipeline stages

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// An ordered pair of normalized language codes, used as a model lookup key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Source language code (lower-cased)
    pub source: String,
    /// Target language code (lower-cased)
    pub target: String,
}

impl LanguagePair {
    /// Create a pair, trimming and lower-casing both codes
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.trim().to_lowercase(),
            target: target.trim().to_lowercase(),
        }
    }

    /// Whether the pair maps a language onto itself
    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

/// A validated translation request
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Text to translate (non-empty after trimming)
    pub text: String,
    /// Normalized source language code
    pub source: String,
    /// Normalized target language code
    pub target: String,
}

impl TranslationRequest {
    /// Validate and normalize a raw request
    pub fn new(text: &str, source: &str, target: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        Ok(Self {
            text: text.to_string(),
            source: source.trim().to_lowercase(),
            target: target.trim().to_lowercase(),
        })
    }

    /// The language pair this request asks for
    pub fn pair(&self) -> LanguagePair {
        LanguagePair::new(&self.source, &self.target)
    }
}

/// Result of language detection on input text
#[derive(Debug, Clone, Serialize)]
pub struct LanguageDetection {
    /// ISO 639-1 code when known, otherwise a 3-letter code or "unknown"
    pub language: String,
    /// Detection confidence (0.0-1.0)
    pub confidence: f32,
}
