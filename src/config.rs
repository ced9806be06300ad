//! Runtime configuration: version tag, child-script base URL, mode flags.
//!
//! Layered loading, highest priority last: defaults, then an optional
//! config file, then `EMBEDCTX_`-prefixed environment variables.

use crate::error::ContextError;
use crate::payload::ModeFlags;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Compile-time runtime version tag.
pub const RUNTIME_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the child-side context script, appended to base/version.
pub const CHILD_SCRIPT_NAME: &str = "ampcontext-v0.js";

fn default_version() -> String {
    RUNTIME_VERSION.to_string()
}

fn default_third_party_base() -> String {
    "https://3p.embedctx.dev".to_string()
}

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    /// Version tag stamped into every payload
    #[serde(default = "default_version")]
    pub version: String,

    /// Base URL the child-side script is served from
    #[serde(default = "default_third_party_base")]
    pub third_party_base: String,

    /// Local development host
    #[serde(default)]
    pub local_dev: bool,

    /// Unminified development runtime
    #[serde(default)]
    pub development: bool,

    /// ES-module child runtime
    #[serde(default)]
    pub esm: bool,

    /// Test harness host
    #[serde(default)]
    pub test_mode: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            third_party_base: default_third_party_base(),
            local_dev: false,
            development: false,
            esm: false,
            test_mode: false,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from an optional file plus environment overrides.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ContextError> {
        let mut builder = Config::builder();

        if let Some(path) = config_file {
            if path.exists() {
                builder =
                    builder.add_source(File::with_name(&path.to_string_lossy()).required(false));
            } else {
                warn!(
                    config_path = %path.display(),
                    "Runtime configuration file not found; using defaults"
                );
            }
        }

        let settings = builder
            .add_source(Environment::with_prefix("EMBEDCTX"))
            .build()?;

        let config: RuntimeConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ContextError> {
        if self.version.is_empty() {
            return Err(ContextError::ConfigError(
                "version tag cannot be empty".to_string(),
            ));
        }
        if self.third_party_base.is_empty() {
            return Err(ContextError::ConfigError(
                "third_party_base cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Child-side script URL, derived as base/version/name.
    pub fn child_script_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.third_party_base.trim_end_matches('/'),
            self.version,
            CHILD_SCRIPT_NAME
        )
    }

    /// The full-mode `mode` payload object.
    pub fn mode_flags(&self) -> ModeFlags {
        ModeFlags {
            local_dev: self.local_dev,
            development: self.development,
            esm: self.esm,
            test: self.test_mode,
            rtv_version: self.version.clone(),
        }
    }
}
