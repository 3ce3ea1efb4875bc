//! Application configuration
//!
//! TOML-backed configuration with serde defaults, covering the HTTP
//! server, stage selection, summary bounds, and translation settings.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::logging::LogConfig;
use crate::summarize::SummaryBounds;
use crate::Result;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Pipeline stage selection
    #[serde(default)]
    pub stages: StagesConfig,

    /// Summary word budget
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Translation settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Whether to attach a permissive CORS layer
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: true,
        }
    }
}

/// Which implementation serves each pipeline stage
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StagesConfig {
    /// Keyword extractor: "frequency", "rake", or "noun-chunks"
    #[serde(default = "default_keywords")]
    pub keywords: String,
    /// Summarizer: "truncation" or "extractive"
    #[serde(default = "default_summarizer")]
    pub summarizer: String,
    /// Translation backend: "marian" or "stub"
    #[serde(default = "default_translator")]
    pub translator: String,
}

impl Default for StagesConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            summarizer: default_summarizer(),
            translator: default_translator(),
        }
    }
}

/// Summary word budget
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummaryConfig {
    /// Minimum summary length in words
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    /// Maximum summary length in words
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            min_words: default_min_words(),
            max_words: default_max_words(),
        }
    }
}

/// Translation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslationConfig {
    /// Target language used when a request does not name one
    #[serde(default = "default_target")]
    pub default_target: String,
    /// Wall-clock budget per translation hop, in milliseconds
    #[serde(default = "default_hop_timeout_ms")]
    pub hop_timeout_ms: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            default_target: default_target(),
            hop_timeout_ms: default_hop_timeout_ms(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON-formatted structured logs
    #[serde(default)]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from a TOML file, falling back to defaults when it is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            tracing::warn!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// Summary bounds for the summarization stage
    pub fn summary_bounds(&self) -> SummaryBounds {
        SummaryBounds {
            min_words: self.summary.min_words,
            max_words: self.summary.max_words,
        }
    }

    /// Per-hop translation timeout
    pub fn hop_timeout(&self) -> Duration {
        Duration::from_millis(self.translation.hop_timeout_ms)
    }

    /// Bind address string for the HTTP server
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Convert logging settings to a LogConfig
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig {
            level: self.logging.level.clone(),
            json_format: self.logging.json_format,
            enable_spans: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_true() -> bool {
    true
}

fn default_keywords() -> String {
    "frequency".to_string()
}

fn default_summarizer() -> String {
    "truncation".to_string()
}

fn default_translator() -> String {
    "marian".to_string()
}

fn default_min_words() -> usize {
    25
}

fn default_max_words() -> usize {
    50
}

fn default_target() -> String {
    "es".to_string()
}

fn default_hop_timeout_ms() -> u64 {
    30_000
}

fn default_log_level() -> String {
    "info".to_string()
}
