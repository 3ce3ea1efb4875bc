//! Catalog of known translation models
//!
//! A fixed mapping from language pair to an opaque model identifier,
//! populated at startup and immutable for the process lifetime.

use std::collections::{BTreeSet, HashMap};

use crate::types::LanguagePair;
use crate::{Error, Result};

/// Core language pairs served by the default catalog
const DEFAULT_PAIRS: &[(&str, &str)] = &[
    ("en", "es"),
    ("es", "en"),
    ("en", "fr"),
    ("fr", "en"),
    ("en", "de"),
    ("de", "en"),
];

/// Immutable lookup table from language pair to model identifier
#[derive(Debug, Clone, Default)]
pub struct ModelCatalog {
    models: HashMap<LanguagePair, String>,
}

impl ModelCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the catalog of core opus-mt pairs (EN<->ES,FR,DE)
    pub fn with_default_pairs() -> Self {
        let mut catalog = Self::new();
        for (source, target) in DEFAULT_PAIRS {
            let pair = LanguagePair::new(source, target);
            let model = opus_mt_model(source, target);
            // Built from a fixed non-identity list, cannot fail
            let _ = catalog.insert(pair, model);
        }
        catalog
    }

    /// Register a model for a language pair
    ///
    /// Rejects pairs that map a language onto itself.
    pub fn insert(&mut self, pair: LanguagePair, model: String) -> Result<()> {
        if pair.is_identity() {
            return Err(Error::Config(format!(
                "Catalog cannot contain identity pair {pair}"
            )));
        }
        self.models.insert(pair, model);
        Ok(())
    }

    /// Look up the model identifier for a pair
    pub fn model_for(&self, pair: &LanguagePair) -> Option<&str> {
        self.models.get(pair).map(String::as_str)
    }

    /// Whether a model exists for the pair
    pub fn contains(&self, pair: &LanguagePair) -> bool {
        self.models.contains_key(pair)
    }

    /// Whether a language appears anywhere in the catalog graph
    pub fn knows_language(&self, code: &str) -> bool {
        let code = code.trim().to_lowercase();
        self.models
            .keys()
            .any(|pair| pair.source == code || pair.target == code)
    }

    /// Sorted list of all languages appearing in the catalog
    pub fn languages(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .models
            .keys()
            .flat_map(|pair| [pair.source.as_str(), pair.target.as_str()])
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// Number of registered pairs
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the catalog holds no pairs
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Model identifier for an opus-mt model serving one language pair
pub fn opus_mt_model(source: &str, target: &str) -> String {
    format!("Helsinki-NLP/opus-mt-{source}-{target}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_six_pairs() {
        let catalog = ModelCatalog::with_default_pairs();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.contains(&LanguagePair::new("en", "es")));
        assert!(catalog.contains(&LanguagePair::new("de", "en")));
        assert!(!catalog.contains(&LanguagePair::new("es", "fr")));
    }

    #[test]
    fn test_rejects_identity_pair() {
        let mut catalog = ModelCatalog::new();
        let result = catalog.insert(LanguagePair::new("en", "en"), "some-model".to_string());
        assert!(result.is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_model_lookup() {
        let catalog = ModelCatalog::with_default_pairs();
        assert_eq!(
            catalog.model_for(&LanguagePair::new("en", "fr")),
            Some("Helsinki-NLP/opus-mt-en-fr")
        );
        assert_eq!(catalog.model_for(&LanguagePair::new("fr", "de")), None);
    }

    #[test]
    fn test_language_listing() {
        let catalog = ModelCatalog::with_default_pairs();
        assert_eq!(catalog.languages(), vec!["de", "en", "es", "fr"]);
        assert!(catalog.knows_language("ES"));
        assert!(!catalog.knows_language("ja"));
    }
}
