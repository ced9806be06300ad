//! DOM fingerprint generation seam.

use crate::platform::EmbedElement;

/// Attributes that identify an element for fingerprinting purposes.
const IDENTIFYING_ATTRS: [&str; 4] = ["id", "class", "name", "src"];

const FINGERPRINT_LEN: usize = 16;

/// Produces a stable token identifying an element within its document.
pub trait Fingerprinter: Send + Sync {
    fn generate(&self, element: &dyn EmbedElement) -> String;
}

/// Default fingerprinter: blake3 over the tag name and identifying
/// attributes, hex-encoded and truncated.
///
/// Platform bindings with richer DOM access (ancestry, sibling position)
/// can inject their own [`Fingerprinter`] instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashFingerprinter;

impl Fingerprinter for HashFingerprinter {
    fn generate(&self, element: &dyn EmbedElement) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(element.tag_name().as_bytes());
        for attr in IDENTIFYING_ATTRS {
            if let Some(value) = element.attribute(attr) {
                // Separator bytes keep ("ab", "c") distinct from ("a", "bc").
                hasher.update(&[0]);
                hasher.update(attr.as_bytes());
                hasher.update(&[0]);
                hasher.update(value.as_bytes());
            }
        }
        let mut token = hex::encode(hasher.finalize().as_bytes());
        token.truncate(FINGERPRINT_LEN);
        token
    }
}
