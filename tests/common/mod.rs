//! Shared mock collaborators for integration tests.

#![allow(dead_code)]

use embedctx::document::DocumentInfoSnapshot;
use embedctx::layout::LayoutRect;
use embedctx::platform::{
    DocumentInfoSource, EmbedElement, HostWindow, ServiceRegistry, ViewerService, VisibilitySource,
};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct TestWindow {
    pub href: String,
    pub parent_href: String,
    pub referrer: String,
    pub viewport: Option<String>,
}

impl TestWindow {
    pub fn new() -> Self {
        Self {
            href: "https://host.example/page".to_string(),
            parent_href: "https://parent.example/article".to_string(),
            referrer: "https://referrer.example/".to_string(),
            viewport: None,
        }
    }

    pub fn at(href: &str) -> Self {
        Self {
            href: href.to_string(),
            ..Self::new()
        }
    }
}

impl Default for TestWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl HostWindow for TestWindow {
    fn location_href(&self) -> String {
        self.href.clone()
    }

    fn parent_location_href(&self) -> String {
        self.parent_href.clone()
    }

    fn document_referrer(&self) -> String {
        self.referrer.clone()
    }

    fn viewport_meta(&self) -> Option<String> {
        self.viewport.clone()
    }
}

pub struct TestElement {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub rect: Option<LayoutRect>,
    pub intersection: Value,
}

impl TestElement {
    pub fn new() -> Self {
        Self {
            tag: "TEST-EMBED".to_string(),
            attrs: BTreeMap::new(),
            rect: None,
            intersection: json!({}),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_rect(mut self, rect: LayoutRect) -> Self {
        self.rect = Some(rect);
        self
    }

    pub fn with_intersection(mut self, intersection: Value) -> Self {
        self.intersection = intersection;
        self
    }
}

impl Default for TestElement {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbedElement for TestElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }

    fn tag_name(&self) -> String {
        self.tag.clone()
    }

    fn layout_rect(&self) -> Option<LayoutRect> {
        self.rect
    }

    fn intersection_entry(&self) -> Value {
        self.intersection.clone()
    }
}

pub struct PinnedDocumentInfo(pub DocumentInfoSnapshot);

impl PinnedDocumentInfo {
    pub fn example() -> Self {
        Self(DocumentInfoSnapshot {
            source_url: "https://host.example/source".to_string(),
            canonical_url: "https://host.example/canonical".to_string(),
            page_view_id: "pv-1234".to_string(),
            viewport: Some("width=device-width".to_string()),
        })
    }
}

impl DocumentInfoSource for PinnedDocumentInfo {
    fn snapshot(&self, _element: &dyn EmbedElement) -> DocumentInfoSnapshot {
        self.0.clone()
    }
}

pub struct PinnedViewer(pub String);

impl ViewerService for PinnedViewer {
    fn unconfirmed_referrer(&self, _element: &dyn EmbedElement) -> String {
        self.0.clone()
    }
}

pub struct Visibility(pub bool);

impl VisibilitySource for Visibility {
    fn is_visible(&self) -> bool {
        self.0
    }
}

/// Registry with all three services bound to pinned test values.
pub fn full_registry() -> ServiceRegistry {
    ServiceRegistry::new()
        .bind_document_info(Arc::new(PinnedDocumentInfo::example()))
        .bind_viewer(Arc::new(PinnedViewer(
            "https://referrer.example/".to_string(),
        )))
        .bind_visibility(Arc::new(Visibility(true)))
}
