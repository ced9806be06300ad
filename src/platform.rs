//! Platform collaborator seams.
//!
//! The builder never reaches into ambient globals; every platform-owned
//! capability is injected through one of these traits. Full mode requires
//! the document services to be bound in a [`ServiceRegistry`]; standalone
//! mode needs only the window and element surfaces.

use crate::document::DocumentInfoSnapshot;
use crate::error::ContextError;
use crate::layout::LayoutRect;
use serde_json::Value;
use std::sync::Arc;

/// Host window surface.
pub trait HostWindow: Send + Sync {
    /// `location.href` of the hosting window.
    fn location_href(&self) -> String;

    /// `location.href` of the parent window; consulted only for the
    /// srcdoc fallback.
    fn parent_location_href(&self) -> String;

    /// The hosting document's referrer.
    fn document_referrer(&self) -> String;

    /// Content of the hosting document's `<meta name="viewport">`, if any.
    fn viewport_meta(&self) -> Option<String>;
}

/// Embed element surface.
pub trait EmbedElement: Send + Sync {
    /// Attribute lookup; `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    fn tag_name(&self) -> String;

    /// Current page layout box; `None` before layout has run.
    fn layout_rect(&self) -> Option<LayoutRect>;

    /// Current intersection change entry as a plain JSON object.
    fn intersection_entry(&self) -> Value;
}

/// Document-info service: synchronous snapshot per invocation.
pub trait DocumentInfoSource: Send + Sync {
    fn snapshot(&self, element: &dyn EmbedElement) -> DocumentInfoSnapshot;
}

/// Viewer service: referrer resolution for an element's document.
pub trait ViewerService: Send + Sync {
    /// Referrer as reported before viewer confirmation.
    fn unconfirmed_referrer(&self, element: &dyn EmbedElement) -> String;
}

/// Document visibility service.
pub trait VisibilitySource: Send + Sync {
    fn is_visible(&self) -> bool;
}

/// Registry of full-mode platform services.
///
/// A service left unbound is an integration error, surfaced as
/// [`ContextError::ServiceUnbound`] when the builder first needs it.
#[derive(Default, Clone)]
pub struct ServiceRegistry {
    document_info: Option<Arc<dyn DocumentInfoSource>>,
    viewer: Option<Arc<dyn ViewerService>>,
    visibility: Option<Arc<dyn VisibilitySource>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_document_info(mut self, service: Arc<dyn DocumentInfoSource>) -> Self {
        self.document_info = Some(service);
        self
    }

    pub fn bind_viewer(mut self, service: Arc<dyn ViewerService>) -> Self {
        self.viewer = Some(service);
        self
    }

    pub fn bind_visibility(mut self, service: Arc<dyn VisibilitySource>) -> Self {
        self.visibility = Some(service);
        self
    }

    pub fn document_info(&self) -> Result<&dyn DocumentInfoSource, ContextError> {
        self.document_info
            .as_deref()
            .ok_or(ContextError::ServiceUnbound("document-info"))
    }

    pub fn viewer(&self) -> Result<&dyn ViewerService, ContextError> {
        self.viewer
            .as_deref()
            .ok_or(ContextError::ServiceUnbound("viewer"))
    }

    pub fn visibility(&self) -> Result<&dyn VisibilitySource, ContextError> {
        self.visibility
            .as_deref()
            .ok_or(ContextError::ServiceUnbound("visibility"))
    }
}
