//! Section models for the main page
//!
//! Every leaf is optional: the binder treats a missing value as "leave the
//! template's static text alone", never as an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Navigation labels, keyed by the fixed page anchors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Navigation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl Navigation {
    /// Built-in Norwegian labels, applied when a main page's content
    /// document cannot be loaded. Navigation is the only section with a
    /// hardcoded fallback.
    pub fn default_labels() -> Self {
        Self {
            home: Some("Hjem".to_string()),
            about: Some("Om oss".to_string()),
            team: Some("Team".to_string()),
            services: Some("Tjenester".to_string()),
            contact: Some("Kontakt".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Hero {
    /// May contain the literal `<br />` token; the binder splits on it and
    /// renders explicit line breaks. No other field is markup-aware.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct About {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_areas: Option<FocusAreas>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FocusAreas {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub areas: Vec<FocusArea>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FocusArea {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Team {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Services {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub list: Vec<ServiceItem>,
}

/// One card in the services overview grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ServiceItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Relative link to the service's detail page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<ContactForm>,
    /// Per-field validation messages for the contact form
    /// (consumed by the host page's form handling, not by the binder).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub validation: HashMap<String, String>,
}

/// Labels, placeholders and submit text for the contact form.
///
/// Any further string keys in the JSON object (status and confirmation
/// messages used by the host page) are kept in `messages` and served
/// through [`ContentDocument::form_message`].
///
/// [`ContentDocument::form_message`]: super::ContentDocument::form_message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContactForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_button: Option<String>,
    #[serde(flatten)]
    pub messages: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Footer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
