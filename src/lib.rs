//! Embedctx: Cross-Boundary Embed Context Construction
//!
//! Builds the structured metadata object a parent execution environment
//! hands to an embedded child frame so the child can operate without
//! direct access to the parent's internal state. A full mode runs against
//! live platform services; a degraded standalone mode substitutes local
//! best-effort document info when no service layer is bound.

pub mod attributes;
pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod experiments;
pub mod fingerprint;
pub mod layout;
pub mod logging;
pub mod payload;
pub mod platform;
