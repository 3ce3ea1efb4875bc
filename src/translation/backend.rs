//! Translation backends
//!
//! The router treats a backend as an opaque, potentially slow, potentially
//! failing collaborator: `(model identifier, text) -> translated text`.
//! Two implementations are provided:
//! - `MarianBackend`: per-pair opus-mt sessions with phrase-table inference
//! - `StubBackend`: tags text with the model identifier, for wiring checks

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};

use crate::types::LanguagePair;
use crate::{Error, Result};

/// External translation collaborator invoked once per hop
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translate text with the model named by `model_id`
    async fn translate(&self, model_id: &str, text: &str) -> Result<String>;

    /// Backend name for logs and diagnostics
    fn name(&self) -> &str;
}

/// Loaded model state for one language pair
#[derive(Debug, Clone)]
struct MarianSession {
    pair: LanguagePair,
    phrase_table: &'static [(&'static str, &'static str)],
}

/// MarianNMT-style backend with one session per opus-mt model
///
/// Sessions are created lazily on first use and cached for the process
/// lifetime, so repeated hops over the same pair pay the load cost once.
pub struct MarianBackend {
    sessions: DashMap<String, MarianSession>,
}

impl MarianBackend {
    /// Create a backend with no sessions loaded
    pub fn new() -> Self {
        info!("🚀 Initializing MarianNMT backend");
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Load (or fetch the cached) session for a model identifier
    fn session_for(&self, model_id: &str) -> Result<MarianSession> {
        if let Some(session) = self.sessions.get(model_id) {
            return Ok(session.clone());
        }

        let pair = parse_opus_mt_id(model_id)?;
        let phrase_table = phrase_table_for(&pair).ok_or_else(|| {
            Error::Translation(format!("No model weights available for {model_id}"))
        })?;

        info!("📊 Loading Marian model {} ({})", model_id, pair);
        let session = MarianSession { pair, phrase_table };
        self.sessions.insert(model_id.to_string(), session.clone());

        Ok(session)
    }
}

impl Default for MarianBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationBackend for MarianBackend {
    async fn translate(&self, model_id: &str, text: &str) -> Result<String> {
        let session = self.session_for(model_id)?;

        let mut output = text.to_lowercase();
        for (source_phrase, target_phrase) in session.phrase_table {
            output = output.replace(source_phrase, target_phrase);
        }

        debug!(
            "Marian inference {}: {} chars -> {} chars",
            session.pair,
            text.len(),
            output.len()
        );

        Ok(output)
    }

    fn name(&self) -> &str {
        "marian"
    }
}

/// Pass-through backend that tags text with the model identifier
pub struct StubBackend;

#[async_trait]
impl TranslationBackend for StubBackend {
    async fn translate(&self, model_id: &str, text: &str) -> Result<String> {
        debug!("Stub translation via {}", model_id);
        Ok(format!("[{model_id}] {text}"))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Extract the language pair from an opus-mt model identifier
///
/// Expects the `Helsinki-NLP/opus-mt-{src}-{tgt}` naming scheme.
fn parse_opus_mt_id(model_id: &str) -> Result<LanguagePair> {
    let suffix = model_id
        .rsplit('/')
        .next()
        .and_then(|name| name.strip_prefix("opus-mt-"))
        .ok_or_else(|| Error::Translation(format!("Unrecognized model identifier: {model_id}")))?;

    match suffix.split_once('-') {
        Some((source, target)) if !source.is_empty() && !target.is_empty() => {
            Ok(LanguagePair::new(source, target))
        }
        _ => Err(Error::Translation(format!(
            "Unrecognized model identifier: {model_id}"
        ))),
    }
}

/// Phrase table for a core language pair, if one is bundled
fn phrase_table_for(pair: &LanguagePair) -> Option<&'static [(&'static str, &'static str)]> {
    let table: &'static [(&'static str, &'static str)] =
        match (pair.source.as_str(), pair.target.as_str()) {
            ("en", "es") => &[
                ("good morning", "buenos días"),
                ("thank you", "gracias"),
                ("hello", "hola"),
                ("world", "mundo"),
                ("friend", "amigo"),
            ],
            ("es", "en") => &[
                ("buenos días", "good morning"),
                ("gracias", "thank you"),
                ("hola", "hello"),
                ("mundo", "world"),
                ("amigo", "friend"),
            ],
            ("en", "fr") => &[
                ("good morning", "bonjour"),
                ("thank you", "merci"),
                ("hello", "bonjour"),
                ("world", "monde"),
                ("friend", "ami"),
            ],
            ("fr", "en") => &[
                ("bonjour", "hello"),
                ("merci", "thank you"),
                ("monde", "world"),
                ("ami", "friend"),
            ],
            ("en", "de") => &[
                ("good morning", "guten morgen"),
                ("thank you", "danke"),
                ("hello", "hallo"),
                ("world", "welt"),
                ("friend", "freund"),
            ],
            ("de", "en") => &[
                ("guten morgen", "good morning"),
                ("danke", "thank you"),
                ("hallo", "hello"),
                ("welt", "world"),
                ("freund", "friend"),
            ],
            _ => return None,
        };

    Some(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_opus_mt_id() {
        let pair = parse_opus_mt_id("Helsinki-NLP/opus-mt-en-es").unwrap();
        assert_eq!(pair, LanguagePair::new("en", "es"));

        assert!(parse_opus_mt_id("some-other-model").is_err());
        assert!(parse_opus_mt_id("Helsinki-NLP/opus-mt-en-").is_err());
    }

    #[tokio::test]
    async fn test_marian_translates_known_phrases() {
        let backend = MarianBackend::new();
        let result = backend
            .translate("Helsinki-NLP/opus-mt-en-es", "Hello world")
            .await
            .unwrap();
        assert_eq!(result, "hola mundo");
    }

    #[tokio::test]
    async fn test_marian_rejects_unknown_model() {
        let backend = MarianBackend::new();
        let result = backend
            .translate("Helsinki-NLP/opus-mt-en-ru", "hello")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_marian_session_reuse() {
        let backend = MarianBackend::new();
        backend
            .translate("Helsinki-NLP/opus-mt-en-fr", "hello")
            .await
            .unwrap();
        backend
            .translate("Helsinki-NLP/opus-mt-en-fr", "world")
            .await
            .unwrap();
        assert_eq!(backend.sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_stub_tags_output() {
        let backend = StubBackend;
        let result = backend.translate("model-x", "hello").await.unwrap();
        assert_eq!(result, "[model-x] hello");
    }
}
