//! Text insight pipeline
//!
//! Composes the configured keyword extractor, summarizer, language
//! detector, and translation router into the single processing flow the
//! HTTP layer calls: the summary of the input text is what gets
//! translated, not the raw text.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::keywords::{self, KeywordExtractor};
use crate::language_detection::LanguageDetector;
use crate::logging::metrics::PerformanceMetrics;
use crate::summarize::{self, Summarizer};
use crate::translation::{self, ModelCatalog, TranslationRouter};
use crate::types::LanguageDetection;
use crate::{Error, Result};

/// Derived artifacts for one input text
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    /// Extracted keywords, most relevant first
    pub keywords: Vec<String>,
    /// Summary of the input text
    pub summary: String,
    /// Translation of the summary into the target language
    pub translation: String,
    /// Detected source language metadata
    pub detected_language: LanguageDetection,
    /// Normalized target language code
    pub target_language: String,
}

/// The full keyword/summary/translation pipeline
pub struct InsightPipeline {
    extractor: Box<dyn KeywordExtractor>,
    summarizer: Box<dyn Summarizer>,
    detector: LanguageDetector,
    router: TranslationRouter,
    metrics: PerformanceMetrics,
}

impl InsightPipeline {
    /// Build the pipeline named by the configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let extractor = keywords::extractor_for(&config.stages.keywords);
        let summarizer = summarize::summarizer_for(&config.stages.summarizer, config.summary_bounds());
        let backend = translation::backend_for(&config.stages.translator);
        let router = TranslationRouter::new(ModelCatalog::with_default_pairs(), backend)
            .with_hop_timeout(config.hop_timeout());

        info!(
            "Pipeline stages: keywords={}, summarizer={}, translator={}",
            extractor.name(),
            summarizer.name(),
            config.stages.translator
        );

        Self::new(extractor, summarizer, LanguageDetector::new(), router)
    }

    /// Assemble a pipeline from explicit stages
    pub fn new(
        extractor: Box<dyn KeywordExtractor>,
        summarizer: Box<dyn Summarizer>,
        detector: LanguageDetector,
        router: TranslationRouter,
    ) -> Self {
        Self {
            extractor,
            summarizer,
            detector,
            router,
            metrics: PerformanceMetrics::new(),
        }
    }

    /// Access the translation router (and through it, the catalog)
    pub fn router(&self) -> &TranslationRouter {
        &self.router
    }

    /// Performance counters for this pipeline
    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.metrics
    }

    /// Derive keywords, a summary, and a translated summary from raw text
    pub async fn process(&self, text: &str, target_lang: &str) -> Result<ProcessOutcome> {
        let text = text.trim();
        if text.is_empty() {
            self.metrics.record_error();
            return Err(Error::EmptyInput);
        }
        let target = target_lang.trim().to_lowercase();

        let detected = self.detector.detect(text);
        debug!(
            "Detected language {} ({:.2})",
            detected.language, detected.confidence
        );

        let keywords = self.extractor.extract(text)?;
        self.metrics.record_keywords();

        let summary = self.summarizer.summarize(text)?;
        self.metrics.record_summary();

        let hops = self
            .router
            .plan(&detected.language, &target)
            .map(|plan| plan.len() as u64);
        let translation = match self.router.translate(&summary, &detected.language, &target).await {
            Ok(translation) => {
                self.metrics.record_translation(hops.unwrap_or(0));
                translation
            }
            Err(error) => {
                self.metrics.record_error();
                return Err(error);
            }
        };

        Ok(ProcessOutcome {
            keywords,
            summary,
            translation,
            detected_language: detected,
            target_language: target,
        })
    }
}
