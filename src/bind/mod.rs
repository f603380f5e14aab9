//! Section binding
//!
//! Maps a loaded content document onto a page surface. Dispatches on the
//! page context: main pages bind the fixed section sequence, service pages
//! bind metadata, hero and the regenerated content container.
//!
//! Failure semantics are deliberately forgiving: a missing JSON subtree or
//! a missing page target skips that one write and nothing else. The only
//! conditions worth surfacing are an unresolvable service and a document
//! without an entry for a resolved service; both land in the report, and
//! shared sections (the footer) are still bound.

mod main_page;
mod service_page;

use crate::models::{ContentDocument, Navigation};
use crate::page::{PageContext, PageType};
use crate::surface::PageSurface;
use tracing::warn;

/// Token in the hero title that marks an explicit line break.
pub(crate) const LINE_BREAK_TOKEN: &str = "<br />";

/// Condition recorded during a binding pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindIssue {
    #[error("Could not detect service name from URL")]
    UnresolvedService,
    #[error("No content found for service: {0}")]
    MissingServiceEntry(String),
}

/// Outcome of one binding pass.
#[derive(Debug, Default)]
pub struct BindReport {
    /// Names of the sections that were bound, in binding order.
    pub sections: Vec<&'static str>,
    pub issues: Vec<BindIssue>,
}

impl BindReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn section(&mut self, name: &'static str) {
        self.sections.push(name);
    }

    fn issue(&mut self, issue: BindIssue) {
        warn!("{}", issue);
        self.issues.push(issue);
    }
}

/// Section binder
pub struct SectionBinder;

impl SectionBinder {
    /// Bind `document` onto `page` according to the page context.
    ///
    /// Idempotent: applying the same document twice leaves the page in the
    /// same state as applying it once.
    pub fn apply(
        document: &ContentDocument,
        context: &PageContext,
        page: &mut dyn PageSurface,
    ) -> BindReport {
        let mut report = BindReport::default();
        match context.page_type {
            PageType::Main => main_page::apply(document, page, &mut report),
            PageType::Service => {
                service_page::apply(document, context.service.as_deref(), page, &mut report);
            }
        }
        report
    }

    /// Bind the built-in navigation labels. Used on main pages when the
    /// content document could not be loaded; no other section has a
    /// fallback.
    pub fn bind_default_navigation(page: &mut dyn PageSurface) {
        main_page::apply_navigation(&Navigation::default_labels(), page);
    }
}
