//! Content source abstraction
//!
//! Defines the ContentBackend trait and implementations for different hosts:
//! - HttpContentBackend: HTTP fetch (browser and online native, default)
//! - FileSystemContentBackend: native file system (local preview, tests)

use async_trait::async_trait;

/// Error type for content retrieval and parsing
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected status {status} fetching {path}")]
    Status { path: String, status: u16 },
    #[error("Failed to parse content document: {0}")]
    Parse(String),
    #[error("Content backend error: {0}")]
    Backend(String),
}

/// Trait for content backends
///
/// Abstracts the single retrieval operation the loader needs, so the same
/// loading and binding code runs against HTTP in the browser, HTTP on
/// native, or the local file system.
#[async_trait(?Send)]
pub trait ContentBackend {
    /// Fetch the raw bytes of a content file.
    ///
    /// `path` is relative to the backend's base (e.g. `content/no.json`).
    /// Exactly one attempt is made per call; there is no retry or caching.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ContentError>;
}

// Content backend implementations
#[cfg(feature = "api-backend")]
pub mod http;

#[cfg(feature = "native-fs")]
pub mod filesystem;
