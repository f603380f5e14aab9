//! Content loading functionality
//!
//! Fetches and parses the language-specific content document through a
//! [`ContentBackend`]. One call, one fetch: there are no retries, no
//! timeouts beyond the network stack's own, and no caching across calls.
//! A failed load leaves the loader without an active document, which
//! callers must treat as a legitimate terminal state.

use crate::models::ContentDocument;
use crate::page::PageContext;
use crate::source::{ContentBackend, ContentError};
use tracing::{info, warn};

/// Content loader over a pluggable backend.
///
/// Owns the active document for the lifetime of the page view; the binder
/// only borrows it.
pub struct ContentLoader<B: ContentBackend> {
    backend: B,
    base_path: String,
    content: Option<ContentDocument>,
}

impl<B: ContentBackend> ContentLoader<B> {
    /// Create a loader whose content base is derived from the page context
    /// (`content/` on the main page, `../content/` on service pages).
    pub fn new(backend: B, context: &PageContext) -> Self {
        Self::with_base(backend, context.content_base())
    }

    /// Create a loader with an explicit content base path.
    pub fn with_base(backend: B, base_path: impl Into<String>) -> Self {
        Self {
            backend,
            base_path: base_path.into(),
            content: None,
        }
    }

    /// Load the content document for `language`.
    ///
    /// Performs exactly one fetch of `<base><language>.json`. On success
    /// the parsed document becomes the active document and is returned; on
    /// any fetch or parse failure the active document is cleared and the
    /// error is returned. Never touches the page.
    pub async fn load(&mut self, language: &str) -> Result<&ContentDocument, ContentError> {
        self.content = None;

        let path = format!("{}{}.json", self.base_path, language);
        let bytes = self.backend.fetch(&path).await.inspect_err(|e| {
            warn!("Error loading content from {}: {}", path, e);
        })?;

        let document: ContentDocument = serde_json::from_slice(&bytes).map_err(|e| {
            warn!("Error parsing content from {}: {}", path, e);
            ContentError::Parse(e.to_string())
        })?;

        info!("Loaded content document {} ({} bytes)", path, bytes.len());
        Ok(self.content.insert(document))
    }

    /// The active document, if the last [`load`](Self::load) succeeded.
    pub fn content(&self) -> Option<&ContentDocument> {
        self.content.as_ref()
    }

    /// Content base path this loader fetches under.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}
