//! Translation stage: catalog, routing, and backends
//!
//! The catalog names which per-pair models exist, the router plans and
//! executes hop chains over it, and backends perform the actual per-hop
//! translation work.

pub mod backend;
pub mod catalog;
pub mod router;

pub use backend::{MarianBackend, StubBackend, TranslationBackend};
pub use catalog::ModelCatalog;
pub use router::{Hop, TranslationRouter};

use std::sync::Arc;
use tracing::warn;

/// Build the backend named in configuration, defaulting to Marian
pub fn backend_for(kind: &str) -> Arc<dyn TranslationBackend> {
    match kind.to_lowercase().as_str() {
        "marian" => Arc::new(MarianBackend::new()),
        "stub" => Arc::new(StubBackend),
        other => {
            warn!("Unknown translator '{}', falling back to marian", other);
            Arc::new(MarianBackend::new())
        }
    }
}
