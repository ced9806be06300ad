//! Context builder: assembles the cross-boundary metadata handed to an
//! embedded child environment.
//!
//! Two entry points share structure: [`ContextBuilder::build`] runs against
//! live platform services; [`ContextBuilder::build_standalone`] substitutes
//! local best-effort document info when no service layer is bound.

use crate::attributes::{AttributeMap, ATTR_HEIGHT, ATTR_SRC, ATTR_TITLE, ATTR_WIDTH};
use crate::config::RuntimeConfig;
use crate::document;
use crate::error::ContextError;
use crate::experiments::ExperimentSource;
use crate::fingerprint::Fingerprinter;
use crate::layout::length_numeral;
use crate::payload::{ContextPayload, LayoutRectField, LocationInfo, ModeField};
use crate::platform::{EmbedElement, HostWindow, ServiceRegistry};
use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Location reported by synthetic same-document frames. Children see the
/// hosting page as their logical origin; passing this literal through
/// would fail ancestry checks on the child side.
const SRCDOC_HREF: &str = "about:srcdoc";

/// Result of a standalone build: the attribute side effects, plus the
/// payload under its own field instead of merged into the map.
#[derive(Debug, Clone, PartialEq)]
pub struct StandaloneBuild {
    pub attributes: AttributeMap,
    pub context: ContextPayload,
}

/// Builds context metadata for child embeds from injected collaborators.
///
/// Holds no state across calls; the only mutation is to the caller-supplied
/// attribute map, and no reference to it is retained after return.
pub struct ContextBuilder<'a> {
    runtime: &'a RuntimeConfig,
    experiments: &'a dyn ExperimentSource,
    fingerprinter: &'a dyn Fingerprinter,
    services: Option<&'a ServiceRegistry>,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(
        runtime: &'a RuntimeConfig,
        experiments: &'a dyn ExperimentSource,
        fingerprinter: &'a dyn Fingerprinter,
    ) -> Self {
        Self {
            runtime,
            experiments,
            fingerprinter,
            services: None,
        }
    }

    /// Bind the full-mode platform services.
    pub fn with_services(mut self, services: &'a ServiceRegistry) -> Self {
        self.services = Some(services);
        self
    }

    /// Full-mode build.
    ///
    /// Mutates and returns the attribute map (`width`/`height` always,
    /// `title`/`src` when present) with the assembled payload attached
    /// under [`crate::attributes::CONTEXT_ATTR`]. Missing optional data is
    /// a modeled state, never an error; an unbound platform service is.
    pub fn build(
        &self,
        window: &dyn HostWindow,
        element: &dyn EmbedElement,
        sentinel: &str,
        attributes: Option<AttributeMap>,
    ) -> Result<AttributeMap, ContextError> {
        // Must precede every collaborator call; the child measures render
        // latency from this instant.
        let start_time = Utc::now().timestamp_millis();
        trace!(sentinel, "building embed context");

        let mut attributes = attributes.unwrap_or_default();
        attributes.set_numeral(
            ATTR_WIDTH,
            length_numeral(element.attribute(ATTR_WIDTH).as_deref()),
        );
        attributes.set_numeral(
            ATTR_HEIGHT,
            length_numeral(element.attribute(ATTR_HEIGHT).as_deref()),
        );
        copy_attribute(&mut attributes, element, ATTR_TITLE);

        let location_href = resolve_location_href(window);

        let services = self
            .services
            .ok_or(ContextError::ServiceUnbound("platform services"))?;
        let doc_info = services.document_info()?.snapshot(element);
        let referrer = services.viewer()?.unconfirmed_referrer(element);
        let hidden = !services.visibility()?.is_visible();

        let initial_layout_rect = match element.layout_rect() {
            Some(rect) => LayoutRectField::Measured(rect),
            // Not yet laid out; the child sees null, not a removed field.
            None => LayoutRectField::Unmeasured,
        };

        let context = ContextPayload {
            ampcontext_version: self.runtime.version.clone(),
            ampcontext_filepath: self.runtime.child_script_url(),
            source_url: doc_info.source_url,
            referrer,
            canonical_url: doc_info.canonical_url,
            page_view_id: doc_info.page_view_id,
            location: LocationInfo {
                href: location_href,
            },
            start_time,
            tag_name: element.tag_name(),
            mode: ModeField::Flags(self.runtime.mode_flags()),
            canary: self.experiments.is_canary(window),
            hidden,
            initial_layout_rect,
            initial_intersection: element.intersection_entry(),
            dom_fingerprint: self.fingerprinter.generate(element),
            experiment_toggles: self.experiments.toggles(window),
            sentinel: sentinel.to_string(),
        };

        copy_attribute(&mut attributes, element, ATTR_SRC);
        attributes.attach_context(&context)?;
        Ok(attributes)
    }

    /// Standalone build for hosts without a bound service layer.
    ///
    /// Document info is synthesized locally and the payload is round-tripped
    /// through serialization before return, so the caller never receives
    /// live references from collaborator intermediates. Width/height
    /// normalization is skipped; only `title` and `src` copying apply.
    pub fn build_standalone(
        &self,
        window: &dyn HostWindow,
        element: &dyn EmbedElement,
        sentinel: &str,
        attributes: Option<AttributeMap>,
    ) -> Result<StandaloneBuild, ContextError> {
        let start_time = Utc::now().timestamp_millis();
        trace!(sentinel, "building standalone embed context");

        let mut attributes = attributes.unwrap_or_default();
        copy_attribute(&mut attributes, element, ATTR_TITLE);

        let location_href = resolve_location_href(window);
        let doc_info = document::synthesize(window);
        let referrer = window.document_referrer();

        let context = ContextPayload {
            ampcontext_version: self.runtime.version.clone(),
            ampcontext_filepath: self.runtime.child_script_url(),
            source_url: doc_info.source_url,
            referrer,
            canonical_url: doc_info.canonical_url,
            page_view_id: doc_info.page_view_id,
            location: LocationInfo {
                href: location_href,
            },
            start_time,
            tag_name: element.tag_name(),
            mode: ModeField::Placeholder,
            canary: self.experiments.is_canary(window),
            // Known-absent without the service layer, distinct from the
            // full mode's not-yet-available null.
            hidden: false,
            initial_layout_rect: LayoutRectField::Placeholder,
            initial_intersection: Value::Object(Map::new()),
            dom_fingerprint: self.fingerprinter.generate(element),
            experiment_toggles: self.experiments.toggles(window),
            sentinel: sentinel.to_string(),
        };

        copy_attribute(&mut attributes, element, ATTR_SRC);

        let context = round_trip(&context)?;
        Ok(StandaloneBuild {
            attributes,
            context,
        })
    }
}

/// Copy an element attribute into the map only when present and non-empty;
/// absence means no key at all, never a placeholder.
fn copy_attribute(attributes: &mut AttributeMap, element: &dyn EmbedElement, name: &str) {
    if let Some(value) = element.attribute(name) {
        if !value.is_empty() {
            attributes.set_string(name, &value);
        }
    }
}

/// Substitute the parent href when the window reports the synthetic srcdoc
/// location.
fn resolve_location_href(window: &dyn HostWindow) -> String {
    let href = window.location_href();
    if href == SRCDOC_HREF {
        let parent = window.parent_location_href();
        debug!(href = %parent, "substituted parent location for srcdoc frame");
        return parent;
    }
    href
}

fn round_trip(context: &ContextPayload) -> Result<ContextPayload, ContextError> {
    let serialized = serde_json::to_string(context)?;
    Ok(serde_json::from_str(&serialized)?)
}
