//! Models module for the SDK
//!
//! Defines the typed shape of one language's content document.
//! These models mirror the JSON files served under `content/` and are
//! read-only once loaded; the binder and builder only borrow them.

pub mod document;
pub mod sections;
pub mod service;

pub use document::{ContentDocument, SiteMeta};
pub use sections::{
    About, Contact, ContactForm, ContactInfo, FocusArea, FocusAreas, Footer, Hero, Navigation,
    ServiceItem, Services, Team, TeamMember,
};
pub use service::{ServiceContent, ServiceEntry, ServiceSection};
