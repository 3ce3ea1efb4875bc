//! Shared English stopword list
//!
//! Backed by the stop-words crate, loaded once per process.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static ENGLISH: Lazy<HashSet<String>> = Lazy::new(|| {
    stop_words::get(stop_words::LANGUAGE::English)
        .into_iter()
        .map(|word| word.to_lowercase())
        .collect()
});

/// Whether a (lower-cased) word is an English stopword
pub fn is_stopword(word: &str) -> bool {
    ENGLISH.contains(word)
}
