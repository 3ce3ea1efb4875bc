//! Translation routing over the model catalog
//!
//! Given source text and a language pair, the router plans the cheapest
//! available path through the catalog graph - a direct hop when a model
//! exists for the pair, otherwise a two-hop pivot through English - then
//! invokes the backend once per hop, feeding each hop's output into the
//! next. Routing and stage failures are explicit typed errors; the router
//! never passes untranslated text through as a success.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info};

use super::backend::TranslationBackend;
use super::catalog::ModelCatalog;
use crate::types::{LanguagePair, TranslationRequest};
use crate::{Error, Result};

/// Sole pivot language; no path search is needed with a single pivot
const PIVOT_LANG: &str = "en";

/// Default wall-clock budget per backend invocation
const DEFAULT_HOP_TIMEOUT: Duration = Duration::from_secs(30);

/// One planned backend invocation within a translation chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// Language pair served by this hop
    pub pair: LanguagePair,
    /// Model identifier to hand the backend
    pub model_id: String,
}

/// Stateless router from language pair to a chain of backend invocations
pub struct TranslationRouter {
    catalog: ModelCatalog,
    backend: Arc<dyn TranslationBackend>,
    hop_timeout: Duration,
}

impl TranslationRouter {
    /// Create a router over a catalog and backend
    pub fn new(catalog: ModelCatalog, backend: Arc<dyn TranslationBackend>) -> Self {
        Self {
            catalog,
            backend,
            hop_timeout: DEFAULT_HOP_TIMEOUT,
        }
    }

    /// Override the per-hop timeout
    pub fn with_hop_timeout(mut self, hop_timeout: Duration) -> Self {
        self.hop_timeout = hop_timeout;
        self
    }

    /// Access the underlying catalog
    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// Plan the hop chain for a language pair
    ///
    /// Returns an empty plan for the identity case, a single hop when the
    /// catalog holds the pair directly, a two-hop English pivot when both
    /// legs exist, and `None` when no route exists.
    pub fn plan(&self, source: &str, target: &str) -> Option<Vec<Hop>> {
        let pair = LanguagePair::new(source, target);

        if pair.is_identity() {
            return Some(Vec::new());
        }

        if let Some(model_id) = self.catalog.model_for(&pair) {
            return Some(vec![Hop {
                pair,
                model_id: model_id.to_string(),
            }]);
        }

        // Pivot through English: each leg is skipped when its endpoint
        // already is the pivot; the remaining legs must all be cataloged.
        let mut hops = Vec::with_capacity(2);
        for leg in [
            LanguagePair::new(&pair.source, PIVOT_LANG),
            LanguagePair::new(PIVOT_LANG, &pair.target),
        ] {
            if leg.is_identity() {
                continue;
            }
            let model_id = self.catalog.model_for(&leg)?;
            hops.push(Hop {
                model_id: model_id.to_string(),
                pair: leg,
            });
        }

        Some(hops)
    }

    /// Translate text from `source` to `target`
    ///
    /// Hops execute strictly in sequence, each under the per-hop timeout.
    /// A failed or timed-out hop aborts the remaining chain.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let request = TranslationRequest::new(text, source, target)?;
        self.translate_request(&request).await
    }

    /// Translate an already-validated request
    pub async fn translate_request(&self, request: &TranslationRequest) -> Result<String> {
        let hops = self
            .plan(&request.source, &request.target)
            .ok_or_else(|| Error::NoTranslationPath {
                source_lang: request.source.clone(),
                target_lang: request.target.clone(),
            })?;

        if hops.is_empty() {
            debug!("Identity translation {}, returning input", request.source);
            return Ok(request.text.clone());
        }

        debug!(
            "Planned {} hop(s) for {}: {}",
            hops.len(),
            request.pair(),
            hops.iter()
                .map(|hop| hop.pair.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut current = request.text.clone();
        for (index, hop) in hops.iter().enumerate() {
            current = self.run_hop(index + 1, hop, &current).await?;
        }

        info!(
            "Translated {} via {} hop(s) with {}",
            request.pair(),
            hops.len(),
            self.backend.name()
        );

        Ok(current)
    }

    /// Execute a single hop under the timeout budget
    async fn run_hop(&self, hop_number: usize, hop: &Hop, text: &str) -> Result<String> {
        let stage_error = |reason: String| Error::TranslationStage {
            hop: hop_number,
            source_lang: hop.pair.source.clone(),
            target_lang: hop.pair.target.clone(),
            reason,
        };

        match timeout(self.hop_timeout, self.backend.translate(&hop.model_id, text)).await {
            Ok(Ok(output)) => {
                debug!("Hop {} ({}) completed", hop_number, hop.pair);
                Ok(output)
            }
            Ok(Err(error)) => Err(stage_error(error.to_string())),
            Err(_) => Err(stage_error(format!(
                "Timed out after {}ms",
                self.hop_timeout.as_millis()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend that records every invocation and upper-cases text, with an
    /// optional model that always fails
    struct RecordingBackend {
        calls: Mutex<Vec<(String, String)>>,
        failing_model: Option<String>,
    }

    impl RecordingBackend {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                failing_model: None,
            })
        }

        fn failing_on(model_id: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                failing_model: Some(model_id.to_string()),
            })
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslationBackend for RecordingBackend {
        async fn translate(&self, model_id: &str, text: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((model_id.to_string(), text.to_string()));

            if self.failing_model.as_deref() == Some(model_id) {
                return Err(Error::Translation(format!("{model_id} unavailable")));
            }

            Ok(format!("{}:{}", model_id, text.to_uppercase()))
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn router_with(backend: Arc<RecordingBackend>) -> TranslationRouter {
        TranslationRouter::new(ModelCatalog::with_default_pairs(), backend)
    }

    #[tokio::test]
    async fn test_direct_pair_single_call() {
        let backend = RecordingBackend::new();
        let router = router_with(backend.clone());

        let output = router.translate("hello", "en", "es").await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Helsinki-NLP/opus-mt-en-es");
        assert_eq!(calls[0].1, "hello");
        assert_eq!(output, "Helsinki-NLP/opus-mt-en-es:HELLO");
    }

    #[tokio::test]
    async fn test_pivot_chains_two_calls_in_order() {
        let backend = RecordingBackend::new();
        let router = router_with(backend.clone());

        let output = router.translate("hola", "es", "fr").await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "Helsinki-NLP/opus-mt-es-en");
        assert_eq!(calls[0].1, "hola");
        assert_eq!(calls[1].0, "Helsinki-NLP/opus-mt-en-fr");
        // Second hop consumes the first hop's output
        assert_eq!(calls[1].1, "Helsinki-NLP/opus-mt-es-en:HOLA");
        assert_eq!(output, format!("Helsinki-NLP/opus-mt-en-fr:{}", calls[1].1.to_uppercase()));
    }

    #[tokio::test]
    async fn test_identity_returns_input_with_zero_calls() {
        let backend = RecordingBackend::new();
        let router = router_with(backend.clone());

        let output = router.translate("hello world", "en", "EN").await.unwrap();

        assert_eq!(output, "hello world");
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_pair_fails_without_calls() {
        let backend = RecordingBackend::new();
        let router = router_with(backend.clone());

        let result = router.translate("hello", "en", "ja").await;

        assert!(matches!(
            result,
            Err(Error::NoTranslationPath { ref source_lang, ref target_lang })
                if source_lang == "en" && target_lang == "ja"
        ));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_source_fails_without_calls() {
        let backend = RecordingBackend::new();
        let router = router_with(backend.clone());

        let result = router.translate("hello", "xx", "es").await;

        assert!(matches!(result, Err(Error::NoTranslationPath { .. })));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_pivot_leg_fails_without_calls() {
        let backend = RecordingBackend::new();
        let mut catalog = ModelCatalog::new();
        // Only the first pivot leg exists: es->en but no en->fr
        catalog
            .insert(
                LanguagePair::new("es", "en"),
                "Helsinki-NLP/opus-mt-es-en".to_string(),
            )
            .unwrap();
        let router = TranslationRouter::new(catalog, backend.clone());

        let result = router.translate("hola", "es", "fr").await;

        assert!(matches!(result, Err(Error::NoTranslationPath { .. })));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_first_hop_failure_skips_second_hop() {
        let backend = RecordingBackend::failing_on("Helsinki-NLP/opus-mt-es-en");
        let router = router_with(backend.clone());

        let result = router.translate("hola", "es", "fr").await;

        match result {
            Err(Error::TranslationStage {
                hop,
                source_lang,
                target_lang,
                ..
            }) => {
                assert_eq!(hop, 1);
                assert_eq!(source_lang, "es");
                assert_eq!(target_lang, "en");
            }
            other => panic!("Expected stage error, got {other:?}"),
        }
        // The second hop is never invoked
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_second_hop_failure_names_hop_two() {
        let backend = RecordingBackend::failing_on("Helsinki-NLP/opus-mt-en-fr");
        let router = router_with(backend.clone());

        let result = router.translate("hola", "es", "fr").await;

        assert!(matches!(
            result,
            Err(Error::TranslationStage { hop: 2, .. })
        ));
        assert_eq!(backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_text_rejected_before_routing() {
        let backend = RecordingBackend::new();
        let router = router_with(backend.clone());

        let result = router.translate("   ", "en", "es").await;

        assert!(matches!(result, Err(Error::EmptyInput)));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_hop_timeout_surfaces_stage_error() {
        struct SlowBackend;

        #[async_trait]
        impl TranslationBackend for SlowBackend {
            async fn translate(&self, _model_id: &str, text: &str) -> Result<String> {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok(text.to_string())
            }

            fn name(&self) -> &str {
                "slow"
            }
        }

        let router = TranslationRouter::new(ModelCatalog::with_default_pairs(), Arc::new(SlowBackend))
            .with_hop_timeout(Duration::from_millis(5));

        let result = router.translate("hello", "en", "es").await;

        match result {
            Err(Error::TranslationStage { hop, reason, .. }) => {
                assert_eq!(hop, 1);
                assert!(reason.contains("Timed out"));
            }
            other => panic!("Expected timeout stage error, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_shapes() {
        let router = router_with(RecordingBackend::new());

        assert_eq!(router.plan("en", "en").unwrap().len(), 0);
        assert_eq!(router.plan("en", "es").unwrap().len(), 1);
        assert_eq!(router.plan("es", "fr").unwrap().len(), 2);
        assert!(router.plan("en", "ja").is_none());

        let pivot = router.plan("de", "es").unwrap();
        assert_eq!(pivot[0].pair, LanguagePair::new("de", "en"));
        assert_eq!(pivot[1].pair, LanguagePair::new("en", "es"));
    }
}
