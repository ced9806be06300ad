//! Document info: synchronous snapshot type and standalone synthesis.

use crate::platform::HostWindow;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Synchronously-available projection of hosting-document info.
///
/// Deliberately a snapshot: a document-info service may additionally carry
/// an asynchronously resolved page-view token, and that value stays with
/// the service. The builder reads only this projection and never blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentInfoSnapshot {
    pub source_url: String,
    pub canonical_url: String,
    pub page_view_id: String,
    pub viewport: Option<String>,
}

/// Best-effort document info for hosts without a bound service layer.
///
/// Both URLs fall back to the raw window location. The page-view id is a
/// fresh random token: practically unique per call, with no global
/// uniqueness guarantee.
pub fn synthesize(window: &dyn HostWindow) -> DocumentInfoSnapshot {
    let href = window.location_href();
    DocumentInfoSnapshot {
        source_url: href.clone(),
        canonical_url: href,
        page_view_id: Uuid::new_v4().simple().to_string(),
        viewport: window.viewport_meta(),
    }
}
