//! Logging and telemetry initialization

use anyhow::Result;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: String,
    /// Enable JSON formatting for structured logs
    pub json_format: bool,
    /// Enable performance span tracking
    pub enable_spans: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            enable_spans: false,
        }
    }
}

/// Initialize logging and telemetry
pub fn init_logging(config: LogConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let span_events = if config.enable_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    if config.json_format {
        // JSON structured logging for production
        let fmt_layer = fmt::layer()
            .json()
            .with_span_events(span_events)
            .with_current_span(true);

        Registry::default().with(filter).with(fmt_layer).init();
    } else {
        // Human-readable logging for development
        let fmt_layer = fmt::layer().with_span_events(span_events);

        Registry::default().with(filter).with(fmt_layer).init();
    }

    tracing::info!("Text insights service - logging initialized");
    tracing::info!("Log level: {}", config.level);

    Ok(())
}

/// Performance metrics tracking
pub mod metrics {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    /// Performance counters for telemetry
    #[derive(Debug, Clone, Default)]
    pub struct PerformanceMetrics {
        /// Keyword extraction invocations
        pub keyword_calls: Arc<AtomicU64>,
        /// Summarization invocations
        pub summary_calls: Arc<AtomicU64>,
        /// Translation invocations (whole chains)
        pub translation_calls: Arc<AtomicU64>,
        /// Individual translation hops executed
        pub translation_hops: Arc<AtomicU64>,
        /// Failed requests
        pub error_count: Arc<AtomicU64>,
    }

    impl PerformanceMetrics {
        /// Create zeroed counters
        pub fn new() -> Self {
            Self::default()
        }

        /// Record a keyword extraction call
        pub fn record_keywords(&self) {
            self.keyword_calls.fetch_add(1, Ordering::Relaxed);
        }

        /// Record a summarization call
        pub fn record_summary(&self) {
            self.summary_calls.fetch_add(1, Ordering::Relaxed);
        }

        /// Record a translation chain with its hop count
        pub fn record_translation(&self, hops: u64) {
            self.translation_calls.fetch_add(1, Ordering::Relaxed);
            self.translation_hops.fetch_add(hops, Ordering::Relaxed);
        }

        /// Record a failed request
        pub fn record_error(&self) {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }

        /// Take a consistent-enough snapshot of the counters
        pub fn get_stats(&self) -> MetricsSnapshot {
            MetricsSnapshot {
                keyword_calls: self.keyword_calls.load(Ordering::Relaxed),
                summary_calls: self.summary_calls.load(Ordering::Relaxed),
                translation_calls: self.translation_calls.load(Ordering::Relaxed),
                translation_hops: self.translation_hops.load(Ordering::Relaxed),
                error_count: self.error_count.load(Ordering::Relaxed),
            }
        }

        /// Log the current counter values
        pub fn log_stats(&self) {
            let stats = self.get_stats();
            tracing::info!("=== Performance Metrics ===");
            tracing::info!("Keyword calls: {}", stats.keyword_calls);
            tracing::info!("Summary calls: {}", stats.summary_calls);
            tracing::info!("Translation calls: {}", stats.translation_calls);
            tracing::info!("Translation hops: {}", stats.translation_hops);
            tracing::info!("Error count: {}", stats.error_count);
            tracing::info!("==========================");
        }
    }

    /// Point-in-time view of the counters
    #[derive(Debug, Clone)]
    pub struct MetricsSnapshot {
        /// Keyword extraction invocations
        pub keyword_calls: u64,
        /// Summarization invocations
        pub summary_calls: u64,
        /// Translation invocations
        pub translation_calls: u64,
        /// Individual translation hops executed
        pub translation_hops: u64,
        /// Failed requests
        pub error_count: u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json_format);
    }

    #[test]
    fn test_performance_metrics() {
        let counters = metrics::PerformanceMetrics::new();

        counters.record_keywords();
        counters.record_summary();
        counters.record_translation(2);
        counters.record_error();

        let stats = counters.get_stats();
        assert_eq!(stats.keyword_calls, 1);
        assert_eq!(stats.summary_calls, 1);
        assert_eq!(stats.translation_calls, 1);
        assert_eq!(stats.translation_hops, 2);
        assert_eq!(stats.error_count, 1);
    }
}
