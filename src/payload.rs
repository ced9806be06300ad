//! Context payload wire types.
//!
//! Field names are a cross-compilation-unit contract: the child-side
//! runtime reads them by name after a stringify/parse boundary. Renaming a
//! field is a breaking protocol change, so the Rust-side identifiers map
//! onto the wire names with explicit serde renames.

use crate::layout::LayoutRect;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Host location block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationInfo {
    pub href: String,
}

/// Runtime mode flags exposed to the child in full mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModeFlags {
    #[serde(rename = "localDev")]
    pub local_dev: bool,
    pub development: bool,
    pub esm: bool,
    pub test: bool,
    #[serde(rename = "rtvVersion")]
    pub rtv_version: String,
}

/// The `mode` field: runtime flags in full mode, an empty placeholder
/// object in standalone mode.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeField {
    Flags(ModeFlags),
    Placeholder,
}

impl Serialize for ModeField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ModeField::Flags(flags) => flags.serialize(serializer),
            ModeField::Placeholder => Map::new().serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ModeField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Object(map) if map.is_empty() => Ok(ModeField::Placeholder),
            Value::Object(_) => serde_json::from_value(value)
                .map(ModeField::Flags)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "mode must be an object, got {}",
                other
            ))),
        }
    }
}

/// The `initialLayoutRect` field.
///
/// Distinguishes measured geometry, geometry not yet available in full mode
/// (`null`), and the standalone placeholder (`{}`) signaling the field is
/// absent by design rather than pending.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutRectField {
    Measured(LayoutRect),
    Unmeasured,
    Placeholder,
}

impl Serialize for LayoutRectField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LayoutRectField::Measured(rect) => rect.serialize(serializer),
            LayoutRectField::Unmeasured => serializer.serialize_unit(),
            LayoutRectField::Placeholder => Map::new().serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LayoutRectField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Null => Ok(LayoutRectField::Unmeasured),
            Value::Object(map) if map.is_empty() => Ok(LayoutRectField::Placeholder),
            Value::Object(_) => serde_json::from_value(value)
                .map(LayoutRectField::Measured)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "initialLayoutRect must be an object or null, got {}",
                other
            ))),
        }
    }
}

/// Context payload handed to the embedded child environment.
///
/// Constructed fresh on every build; every field survives a
/// stringify/parse round trip losslessly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContextPayload {
    #[serde(rename = "ampcontextVersion")]
    pub ampcontext_version: String,

    #[serde(rename = "ampcontextFilepath")]
    pub ampcontext_filepath: String,

    #[serde(rename = "sourceUrl")]
    pub source_url: String,

    pub referrer: String,

    #[serde(rename = "canonicalUrl")]
    pub canonical_url: String,

    #[serde(rename = "pageViewId")]
    pub page_view_id: String,

    pub location: LocationInfo,

    /// Milliseconds since epoch at build start; the child uses this to
    /// measure render latency.
    #[serde(rename = "startTime")]
    pub start_time: i64,

    #[serde(rename = "tagName")]
    pub tag_name: String,

    pub mode: ModeField,

    pub canary: bool,

    pub hidden: bool,

    #[serde(rename = "initialLayoutRect")]
    pub initial_layout_rect: LayoutRectField,

    /// Intersection change entry as reported by the platform binding.
    #[serde(rename = "initialIntersection")]
    pub initial_intersection: Value,

    #[serde(rename = "domFingerprint")]
    pub dom_fingerprint: String,

    /// Ordered so serialization is deterministic across builds.
    #[serde(rename = "experimentToggles")]
    pub experiment_toggles: BTreeMap<String, bool>,

    /// Per-embed token, passed through verbatim; the child validates
    /// message provenance against it.
    pub sentinel: String,
}
