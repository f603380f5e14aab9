//! Service content building
//!
//! Turns a service page's content object into the node sequence its
//! content container is regenerated from. One generic code path covers all
//! services; the per-service variants of the legacy site collapsed into
//! this builder, at the cost of tolerating fields a given service never
//! populates.

use crate::models::ServiceContent;
use crate::surface::ContentNode;

/// Service content builder
pub struct ServiceContentBuilder;

impl ServiceContentBuilder {
    /// Build the container nodes for a service page, in fixed order:
    /// intro paragraphs, then one list per populated list field (every
    /// populated field, in the fixed field order, not just the first),
    /// then the standards paragraph, then each subsection in document
    /// order as heading + intro paragraphs + services list.
    pub fn build(content: &ServiceContent) -> Vec<ContentNode> {
        let mut nodes = Vec::new();

        for paragraph in &content.intro {
            nodes.push(ContentNode::Paragraph(paragraph.clone()));
        }

        // Fixed field order, matching the legacy loaders.
        let list_fields = [
            &content.competencies,
            &content.service_areas,
            &content.key_competencies,
        ];
        for items in list_fields {
            if !items.is_empty() {
                nodes.push(ContentNode::List(items.clone()));
            }
        }

        if let Some(standards) = &content.standards {
            nodes.push(ContentNode::Paragraph(standards.clone()));
        }

        for (_, section) in &content.sections {
            if let Some(title) = &section.title {
                nodes.push(ContentNode::Heading(title.clone()));
            }
            for paragraph in &section.intro {
                nodes.push(ContentNode::Paragraph(paragraph.clone()));
            }
            if !section.services.is_empty() {
                nodes.push(ContentNode::List(section.services.clone()));
            }
        }

        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceSection;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_intro_list_standards_order() {
        let content = ServiceContent {
            intro: strings(&["A"]),
            competencies: strings(&["X", "Y"]),
            standards: Some("S".to_string()),
            ..Default::default()
        };

        let nodes = ServiceContentBuilder::build(&content);
        assert_eq!(
            nodes,
            vec![
                ContentNode::Paragraph("A".to_string()),
                ContentNode::List(strings(&["X", "Y"])),
                ContentNode::Paragraph("S".to_string()),
            ]
        );
    }

    #[test]
    fn test_all_populated_list_fields_render_in_fixed_order() {
        let content = ServiceContent {
            service_areas: strings(&["PM"]),
            competencies: strings(&["Nett"]),
            ..Default::default()
        };

        let nodes = ServiceContentBuilder::build(&content);
        assert_eq!(
            nodes,
            vec![
                ContentNode::List(strings(&["Nett"])),
                ContentNode::List(strings(&["PM"])),
            ]
        );
    }

    #[test]
    fn test_empty_list_fields_emit_nothing() {
        let content = ServiceContent {
            intro: strings(&["Bare intro"]),
            competencies: Vec::new(),
            ..Default::default()
        };

        let nodes = ServiceContentBuilder::build(&content);
        assert_eq!(nodes, vec![ContentNode::Paragraph("Bare intro".to_string())]);
    }

    #[test]
    fn test_sections_follow_standards_in_document_order() {
        let content = ServiceContent {
            standards: Some("ISO 27001".to_string()),
            sections: vec![
                (
                    "compliance".to_string(),
                    ServiceSection {
                        title: Some("Compliance".to_string()),
                        intro: strings(&["Vi hjelper med etterlevelse."]),
                        services: strings(&["GDPR", "NIS2"]),
                    },
                ),
                (
                    "audit".to_string(),
                    ServiceSection {
                        title: Some("Revisjon".to_string()),
                        ..Default::default()
                    },
                ),
            ],
            ..Default::default()
        };

        let nodes = ServiceContentBuilder::build(&content);
        assert_eq!(
            nodes,
            vec![
                ContentNode::Paragraph("ISO 27001".to_string()),
                ContentNode::Heading("Compliance".to_string()),
                ContentNode::Paragraph("Vi hjelper med etterlevelse.".to_string()),
                ContentNode::List(strings(&["GDPR", "NIS2"])),
                ContentNode::Heading("Revisjon".to_string()),
            ]
        );
    }
}
