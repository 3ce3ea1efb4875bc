//! Whatlang-based language detection
//!
//! Fast trigram detection used to fill the response's language metadata
//! and to supply the translation source language when the client omits it.

use whatlang::{Detector, Lang};

use crate::types::LanguageDetection;

/// Language detector wrapping whatlang
pub struct LanguageDetector {
    detector: Detector,
}

impl LanguageDetector {
    /// Create a new detector
    pub fn new() -> Self {
        tracing::debug!("Initializing whatlang language detector");
        Self {
            detector: Detector::new(),
        }
    }

    /// Detect the language of `text`
    pub fn detect(&self, text: &str) -> LanguageDetection {
        let Some(info) = self.detector.detect(text) else {
            return LanguageDetection {
                language: "unknown".to_string(),
                confidence: 0.0,
            };
        };

        let code = match info.lang() {
            Lang::Eng => "en",
            Lang::Spa => "es",
            Lang::Fra => "fr",
            Lang::Deu => "de",
            Lang::Ita => "it",
            Lang::Por => "pt",
            Lang::Rus => "ru",
            Lang::Nld => "nl",
            Lang::Cmn => "zh", // whatlang uses Cmn for Mandarin
            Lang::Jpn => "ja",
            Lang::Kor => "ko",
            // Fall back to the 3-letter code if not explicitly mapped
            other => other.code(),
        };

        LanguageDetection {
            language: code.to_string(),
            confidence: info.confidence() as f32,
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        let detector = LanguageDetector::new();
        let detection =
            detector.detect("The quick brown fox jumps over the lazy dog near the river bank.");
        assert_eq!(detection.language, "en");
        assert!(detection.confidence > 0.0);
    }

    #[test]
    fn test_detects_spanish() {
        let detector = LanguageDetector::new();
        let detection = detector
            .detect("El rápido zorro marrón salta sobre el perro perezoso junto al río tranquilo.");
        assert_eq!(detection.language, "es");
    }

    #[test]
    fn test_empty_text_is_unknown() {
        let detector = LanguageDetector::new();
        let detection = detector.detect("");
        assert_eq!(detection.language, "unknown");
        assert_eq!(detection.confidence, 0.0);
    }
}
