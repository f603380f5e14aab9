//! File system content backend
//!
//! Implements ContentBackend for native file system reads. Used for local
//! previews of the site and for tests.
//!
//! ## Security
//!
//! All paths are validated to stay within the base directory. The content
//! layout legitimately uses a `../content/` base on service pages, so one
//! leading parent step is normalized away against the configured site
//! root before validation; anything that would still escape is rejected.

use super::{ContentBackend, ContentError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File system content backend
pub struct FileSystemContentBackend {
    /// Directory the fetched paths resolve against. For service-page bases
    /// this should be the service subdirectory, so that `../content/`
    /// lands in the site root.
    base_path: PathBuf,
}

impl FileSystemContentBackend {
    /// Create a new file system content backend rooted at `base_path`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use site_content_sdk::source::filesystem::FileSystemContentBackend;
    ///
    /// let backend = FileSystemContentBackend::new("/srv/site");
    /// ```
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Resolve a fetched path against the base directory.
    ///
    /// Accepts at most one leading `../` (the service-page content base)
    /// and rejects any other parent components.
    fn resolve_path(&self, path: &str) -> Result<PathBuf, ContentError> {
        let (root, remainder) = match path.strip_prefix("../") {
            Some(rest) => (
                self.base_path
                    .parent()
                    .ok_or_else(|| {
                        ContentError::Backend("Base directory has no parent".to_string())
                    })?
                    .to_path_buf(),
                rest,
            ),
            None => (self.base_path.clone(), path),
        };

        if remainder.split('/').any(|component| component == "..") {
            return Err(ContentError::Backend(
                "Path traversal (..) not allowed".to_string(),
            ));
        }

        Ok(root.join(remainder.trim_start_matches('/')))
    }
}

#[async_trait(?Send)]
impl ContentBackend for FileSystemContentBackend {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ContentError> {
        let full_path = self.resolve_path(path)?;

        fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ContentError::NotFound(path.to_string())
            } else {
                ContentError::Io(format!("Failed to read {}: {}", path, e))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_plain_path_resolves_under_base() {
        let temp = TempDir::new().unwrap();
        let backend = FileSystemContentBackend::new(temp.path());

        let resolved = backend.resolve_path("content/no.json").unwrap();
        assert_eq!(resolved, temp.path().join("content/no.json"));
    }

    #[test]
    fn test_single_parent_step_allowed() {
        let temp = TempDir::new().unwrap();
        let pages_dir = temp.path().join("tjenester");
        let backend = FileSystemContentBackend::new(&pages_dir);

        let resolved = backend.resolve_path("../content/no.json").unwrap();
        assert_eq!(resolved, temp.path().join("content/no.json"));
    }

    #[test]
    fn test_deeper_traversal_rejected() {
        let temp = TempDir::new().unwrap();
        let backend = FileSystemContentBackend::new(temp.path());

        let result = backend.resolve_path("../../etc/passwd");
        assert!(matches!(result, Err(ContentError::Backend(_))));

        let result = backend.resolve_path("content/../../etc/passwd");
        assert!(matches!(result, Err(ContentError::Backend(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let backend = FileSystemContentBackend::new(temp.path());

        let result = backend.fetch("content/no.json").await;
        assert!(matches!(result, Err(ContentError::NotFound(_))));
    }
}
