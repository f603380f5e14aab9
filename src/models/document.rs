//! Content document model
//!
//! The root of one language's JSON document. Loaded once per page view and
//! never mutated afterward; the binder borrows it for the lifetime of the
//! binding pass.

use super::sections::{About, Contact, Footer, Hero, Navigation, Services, Team};
use super::service::ServiceEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback validation message when the document carries none for a field.
const DEFAULT_VALIDATION_MESSAGE: &str = "Ugyldig verdi";

/// Document-level page metadata (title tag and meta description).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SiteMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed content for one language.
///
/// Every section is optional; a missing section means the template's static
/// markup is left untouched for that section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Services>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub service_pages: HashMap<String, ServiceEntry>,
}

impl ContentDocument {
    /// Validation message for a contact form field, with the Norwegian
    /// default when the document does not define one.
    pub fn validation_message(&self, field: &str) -> &str {
        self.contact
            .as_ref()
            .and_then(|contact| contact.validation.get(field))
            .map(String::as_str)
            .unwrap_or(DEFAULT_VALIDATION_MESSAGE)
    }

    /// Form message by key. Serves the named label/placeholder fields as
    /// well as the free-form status and confirmation texts, so any key of
    /// the form object resolves. Returns an empty string when absent.
    pub fn form_message(&self, key: &str) -> &str {
        let Some(form) = self.contact.as_ref().and_then(|contact| contact.form.as_ref()) else {
            return "";
        };
        let named = match key {
            "name_label" => &form.name_label,
            "name_placeholder" => &form.name_placeholder,
            "email_label" => &form.email_label,
            "email_placeholder" => &form.email_placeholder,
            "subject_label" => &form.subject_label,
            "subject_placeholder" => &form.subject_placeholder,
            "message_label" => &form.message_label,
            "message_placeholder" => &form.message_placeholder,
            "submit_button" => &form.submit_button,
            _ => &None,
        };
        named
            .as_deref()
            .or_else(|| form.messages.get(key).map(String::as_str))
            .unwrap_or("")
    }

    /// Looks up a service detail page entry by its JSON key.
    pub fn service_page(&self, key: &str) -> Option<&ServiceEntry> {
        self.service_pages.get(key)
    }
}
