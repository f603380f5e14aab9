//! Site Content SDK - Shared library for website content binding across platforms
//!
//! Provides unified interfaces for:
//! - Language content loading (via content backends)
//! - Page classification (main page vs. service detail pages)
//! - Section binding onto a page surface (browser DOM or in-memory template)
//! - Service content building (regenerated detail page bodies)

pub mod bind;
pub mod builder;
pub mod loader;
pub mod models;
pub mod page;
pub mod source;
pub mod surface;

#[cfg(all(target_arch = "wasm32", feature = "wasm", feature = "api-backend"))]
pub mod wasm;

// Re-export commonly used types
pub use source::{ContentBackend, ContentError};
#[cfg(feature = "native-fs")]
pub use source::filesystem::FileSystemContentBackend;
#[cfg(feature = "api-backend")]
pub use source::http::HttpContentBackend;

pub use loader::ContentLoader;
pub use page::{DEFAULT_LANGUAGE, PageContext, PageType};
pub use bind::{BindIssue, BindReport, SectionBinder};
pub use builder::ServiceContentBuilder;
pub use surface::{BindPoint, Collection, ContentNode, FormField, NavAnchor, PageSurface};
pub use surface::template::{SlotCounts, TemplatePage};
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use surface::dom::DomSurface;

// Re-export models
pub use models::{ContentDocument, ServiceContent, ServiceEntry, SiteMeta};
