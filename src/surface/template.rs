//! In-memory page surface
//!
//! A host-independent stand-in for a page template: it records what was
//! bound where instead of touching a DOM. Native hosts use it to inspect
//! binding results, and the test suites use it as their fixture.

use super::{BindPoint, Collection, ContentNode, PageSurface};
use std::collections::{HashMap, HashSet};

/// Placeholder slot counts of the page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotCounts {
    pub focus_areas: usize,
    pub team_members: usize,
    pub service_cards: usize,
}

/// In-memory page surface.
///
/// All singleton targets exist by default; [`without`](Self::without)
/// simulates a template that lacks one. Indexed targets exist up to the
/// configured slot counts.
#[derive(Debug, PartialEq, Default)]
pub struct TemplatePage {
    counts: SlotCounts,
    missing: HashSet<BindPoint>,
    meta_description_present: bool,
    title: Option<String>,
    meta_description: Option<String>,
    texts: HashMap<BindPoint, String>,
    links: HashMap<BindPoint, String>,
    placeholders: HashMap<BindPoint, String>,
    split_texts: HashMap<BindPoint, Vec<String>>,
    bodies: HashMap<BindPoint, Vec<ContentNode>>,
}

impl TemplatePage {
    pub fn new(counts: SlotCounts) -> Self {
        Self {
            counts,
            meta_description_present: true,
            ..Default::default()
        }
    }

    /// Mark a singleton target as absent from the template.
    pub fn without(mut self, point: BindPoint) -> Self {
        self.missing.insert(point);
        self
    }

    /// Simulate a page without a meta description tag.
    pub fn without_meta_description(mut self) -> Self {
        self.meta_description_present = false;
        self
    }

    fn exists(&self, point: BindPoint) -> bool {
        if self.missing.contains(&point) {
            return false;
        }
        match point.slot() {
            Some((collection, index)) => index < self.slot_count(collection),
            None => true,
        }
    }

    // Inspection of the bound state.

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn meta_description(&self) -> Option<&str> {
        self.meta_description.as_deref()
    }

    pub fn text(&self, point: BindPoint) -> Option<&str> {
        self.texts.get(&point).map(String::as_str)
    }

    pub fn link(&self, point: BindPoint) -> Option<&str> {
        self.links.get(&point).map(String::as_str)
    }

    pub fn placeholder(&self, point: BindPoint) -> Option<&str> {
        self.placeholders.get(&point).map(String::as_str)
    }

    pub fn split_text(&self, point: BindPoint) -> Option<&[String]> {
        self.split_texts.get(&point).map(Vec::as_slice)
    }

    pub fn body(&self, point: BindPoint) -> Option<&[ContentNode]> {
        self.bodies.get(&point).map(Vec::as_slice)
    }
}

impl PageSurface for TemplatePage {
    fn set_document_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_meta_description(&mut self, description: &str) -> bool {
        if !self.meta_description_present {
            return false;
        }
        self.meta_description = Some(description.to_string());
        true
    }

    fn set_text(&mut self, point: BindPoint, text: &str) -> bool {
        if !self.exists(point) {
            return false;
        }
        // A split text replaced by plain text no longer has segments.
        self.split_texts.remove(&point);
        self.texts.insert(point, text.to_string());
        true
    }

    fn set_link(&mut self, point: BindPoint, href: &str) -> bool {
        if !self.exists(point) {
            return false;
        }
        self.links.insert(point, href.to_string());
        true
    }

    fn set_placeholder(&mut self, point: BindPoint, text: &str) -> bool {
        if !self.exists(point) {
            return false;
        }
        self.placeholders.insert(point, text.to_string());
        true
    }

    fn set_split_text(&mut self, point: BindPoint, segments: &[&str]) -> bool {
        if !self.exists(point) {
            return false;
        }
        self.texts.remove(&point);
        self.split_texts
            .insert(point, segments.iter().map(|s| (*s).to_string()).collect());
        true
    }

    fn slot_count(&self, collection: Collection) -> usize {
        match collection {
            Collection::FocusAreas => self.counts.focus_areas,
            Collection::TeamMembers => self.counts.team_members,
            Collection::ServiceCards => self.counts.service_cards,
        }
    }

    fn replace_body(&mut self, point: BindPoint, nodes: &[ContentNode]) -> bool {
        if !self.exists(point) {
            return false;
        }
        self.bodies.insert(point, nodes.to_vec());
        true
    }
}
