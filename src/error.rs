//! Error types for the service

use thiserror::Error;

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    /// Input text was empty or whitespace-only
    #[error("Input text is empty")]
    EmptyInput,

    /// Requested target language is not known to the service
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// No direct or pivoted route exists between the two languages
    #[error("No translation path from {source_lang} to {target_lang}")]
    NoTranslationPath {
        /// Source language code
        source_lang: String,
        /// Target language code
        target_lang: String,
    },

    /// A translation backend invocation failed or timed out at a specific hop
    #[error("Translation stage {hop} ({source_lang}->{target_lang}) failed: {reason}")]
    TranslationStage {
        /// 1-based position of the hop within the chain
        hop: usize,
        /// Source language of the failed hop
        source_lang: String,
        /// Target language of the failed hop
        target_lang: String,
        /// Backend failure description
        reason: String,
    },

    /// Translation backend error outside a routed chain
    #[error("Translation error: {0}")]
    Translation(String),

    /// Keyword extraction error
    #[error("Keyword extraction error: {0}")]
    KeywordExtraction(String),

    /// Summarization error
    #[error("Summarization error: {0}")]
    Summarization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
