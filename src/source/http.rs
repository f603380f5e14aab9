//! HTTP content backend
//!
//! Implements ContentBackend over a single GET request per fetch. The
//! joined URL must come out absolute: reqwest parses request URLs with
//! `Url::parse`, which rejects scheme-less relative references on every
//! target, browsers included. Hosts that work with page-relative content
//! bases (the WASM entry point) resolve them against the page URL before
//! constructing this backend.

use super::{ContentBackend, ContentError};
use async_trait::async_trait;

/// HTTP content backend
pub struct HttpContentBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpContentBackend {
    /// Create a new HTTP content backend.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Prefix joined in front of every fetched path. The
    ///   join must produce an absolute URL; a relative result fails at
    ///   request time before anything is sent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use site_content_sdk::source::http::HttpContentBackend;
    ///
    /// let backend = HttpContentBackend::new("https://synkope.example/");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl ContentBackend for HttpContentBackend {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ContentError> {
        let url = self.url_for(path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ContentError::Network(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ContentError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(ContentError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ContentError::Network(format!("Reading body of {} failed: {}", url, e)))?;

        Ok(bytes.to_vec())
    }
}
