//! Page context resolution
//!
//! Classifies the current page as the main page or a service detail page
//! and resolves which service it shows. The context is computed exactly
//! once per page view, before any content fetch, and is immutable input to
//! the loader and the binder.
//!
//! Detection is driven by the URL path plus one explicit flag from the
//! host ("does the page carry service-page markup?"). The host passes that
//! flag in instead of the SDK probing page structure behind the scenes.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Default content language.
pub const DEFAULT_LANGUAGE: &str = "no";

/// Directory segment that marks service detail pages.
const SERVICES_DIR: &str = "tjenester";

/// Maps URL slugs of service pages to their keys under `service_pages`
/// in the content document.
static SERVICE_SLUGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ikt-infrastruktur", "ikt_infrastruktur"),
        ("prosjektstyring", "prosjektstyring"),
        ("informasjonssikkerhet", "informasjonssikkerhet"),
        ("emc", "emc"),
    ])
});

/// Kind of page being bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    Main,
    Service,
}

/// Immutable description of the page a binding pass runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub page_type: PageType,
    /// Resolved `service_pages` key on service pages. `None` on a service
    /// page means the URL slug is unknown; binding then reports the
    /// missing service and only binds shared sections.
    pub service: Option<String>,
    pub language: String,
}

impl PageContext {
    /// Resolves the context from the URL path of the current document.
    ///
    /// `has_service_markup` is the host's statement that the page carries
    /// service detail markup (hero and content container). It classifies a
    /// page as a service page even when the URL gives no hint.
    pub fn resolve(path: &str, has_service_markup: bool) -> Self {
        let slug = final_segment(path);
        let in_services_dir = path
            .split('/')
            .any(|segment| segment == SERVICES_DIR);

        let service = slug.and_then(|s| SERVICE_SLUGS.get(s).map(|key| (*key).to_string()));

        let page_type = if in_services_dir || service.is_some() || has_service_markup {
            PageType::Service
        } else {
            PageType::Main
        };

        Self {
            page_type,
            service: match page_type {
                PageType::Service => service,
                PageType::Main => None,
            },
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Overrides the content language (a short locale tag such as `"no"`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Base path for content fetches. Service pages live one directory
    /// level below the site root, so they reach the content directory
    /// through the parent.
    pub fn content_base(&self) -> &'static str {
        match self.page_type {
            PageType::Main => "content/",
            PageType::Service => "../content/",
        }
    }
}

/// Final path segment with any `.html` extension stripped; `None` for
/// directory paths such as `/` or `/tjenester/`.
fn final_segment(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next()?;
    let segment = segment.strip_suffix(".html").unwrap_or(segment);
    if segment.is_empty() { None } else { Some(segment) }
}
