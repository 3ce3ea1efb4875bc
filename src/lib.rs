//! Text Insights Service
//!
//! An HTTP service that derives three artifacts from raw text: a keyword
//! list, a summary, and a translation of that summary into a target
//! language. Keyword extraction, summarization, and translation are each
//! a polymorphic stage selected by configuration; translation is routed
//! over a fixed catalog of per-pair models, pivoting through English when
//! no direct model exists.

#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod keywords;
pub mod language_detection;
pub mod logging;
pub mod pipeline;
pub mod server;
pub mod summarize;
pub mod translation;
pub mod types;

pub use error::{Error, Result};
pub use pipeline::{InsightPipeline, ProcessOutcome};
pub use translation::{ModelCatalog, TranslationRouter};
pub use types::{LanguagePair, TranslationRequest};
