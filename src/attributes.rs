//! Attribute map applied to the child embed element.

use crate::error::ContextError;
use crate::payload::ContextPayload;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

/// Key the full-mode builder attaches the serialized context payload under.
///
/// The child side reads the payload back out of this attribute, so the key
/// is part of the wire contract.
pub const CONTEXT_ATTR: &str = "_context";

pub const ATTR_WIDTH: &str = "width";
pub const ATTR_HEIGHT: &str = "height";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_SRC: &str = "src";

/// Attribute map contract type.
///
/// Caller-provided instances are mutated in place and returned; the builder
/// never retains a reference after returning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AttributeMap(BTreeMap<String, Value>);

impl AttributeMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set a numeral-valued attribute.
    pub fn set_numeral(&mut self, key: &str, value: i64) {
        self.0.insert(key.to_string(), Value::from(value));
    }

    /// Set a string-valued attribute.
    pub fn set_string(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), Value::from(value));
    }

    /// Attach a context payload under [`CONTEXT_ATTR`].
    pub fn attach_context(&mut self, context: &ContextPayload) -> Result<(), ContextError> {
        let value = serde_json::to_value(context)?;
        self.0.insert(CONTEXT_ATTR.to_string(), value);
        Ok(())
    }

    /// Read back an attached context payload, if one is present.
    pub fn context(&self) -> Result<Option<ContextPayload>, ContextError> {
        match self.0.get(CONTEXT_ATTR) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }
}

impl From<BTreeMap<String, Value>> for AttributeMap {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Self(value)
    }
}

impl From<AttributeMap> for BTreeMap<String, Value> {
    fn from(value: AttributeMap) -> Self {
        value.0
    }
}

impl FromIterator<(String, Value)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for AttributeMap {
    type Target = BTreeMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AttributeMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
