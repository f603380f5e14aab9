//! Service detail page models
//!
//! One [`ServiceEntry`] per service key under `service_pages` in the
//! content document. The `sections` mapping keeps the JSON object's own
//! key order, because the builder emits subsections in document order.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ServiceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ServiceContent>,
}

/// Body content of a service detail page.
///
/// The three list fields are a fixed vocabulary carried over from the
/// per-service legacy loaders; a document may populate any subset, and all
/// populated lists are rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ServiceContent {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intro: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub competencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_competencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standards: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_sections",
        deserialize_with = "deserialize_sections"
    )]
    pub sections: Vec<(String, ServiceSection)>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ServiceSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intro: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
}

fn serialize_sections<S>(
    sections: &[(String, ServiceSection)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(sections.len()))?;
    for (key, section) in sections {
        map.serialize_entry(key, section)?;
    }
    map.end()
}

/// Deserializes a JSON object into ordered `(key, section)` pairs.
/// `HashMap` would lose the object's key order.
fn deserialize_sections<'de, D>(deserializer: D) -> Result<Vec<(String, ServiceSection)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SectionsVisitor;

    impl<'de> Visitor<'de> for SectionsVisitor {
        type Value = Vec<(String, ServiceSection)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of section key to section content")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut sections = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, section)) = access.next_entry::<String, ServiceSection>()? {
                sections.push((key, section));
            }
            Ok(sections)
        }
    }

    deserializer.deserialize_map(SectionsVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_keep_document_order() {
        let json = r#"{
            "intro": ["Intro"],
            "sections": {
                "compliance": { "title": "Compliance", "services": ["GDPR"] },
                "audit": { "title": "Revisjon", "intro": ["Vi reviderer."] },
                "advisory": { "title": "Rådgivning" }
            }
        }"#;

        let content: ServiceContent = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = content.sections.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["compliance", "audit", "advisory"]);
        assert_eq!(content.sections[1].1.intro, vec!["Vi reviderer."]);
    }

    #[test]
    fn test_sections_round_trip() {
        let content = ServiceContent {
            intro: vec!["A".to_string()],
            sections: vec![(
                "compliance".to_string(),
                ServiceSection {
                    title: Some("Compliance".to_string()),
                    ..Default::default()
                },
            )],
            ..Default::default()
        };

        let json = serde_json::to_string(&content).unwrap();
        let back: ServiceContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let content: ServiceContent = serde_json::from_str("{}").unwrap();
        assert!(content.intro.is_empty());
        assert!(content.competencies.is_empty());
        assert!(content.standards.is_none());
        assert!(content.sections.is_empty());
    }
}
