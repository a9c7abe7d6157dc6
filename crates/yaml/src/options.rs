//! Loader options

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment variables overriding loader options
pub const ENV_PREFIX: &str = "YAML_LOADER_";

/// Order in which struct cursors visit mapping keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyOrder {
    /// Order the keys appear in the source document
    #[default]
    Document,
    /// Lexicographic key order
    Sorted,
}

/// Options controlling how the YAML loader builds values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Key order for struct iteration
    pub key_order: KeyOrder,
    /// Reject documents larger than this many bytes
    pub max_document_bytes: Option<usize>,
}

impl LoaderOptions {
    /// Load options from a YAML file, overridden by environment variables
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            anyhow::bail!("Loader options file not found: {}", path.display());
        }

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("Failed to parse loader options")
    }

    /// Load options from environment variables only
    pub fn from_env() -> Result<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("Failed to parse loader options from environment")
    }

    /// Load options from a YAML string (for testing)
    pub fn load_from_str(yaml_content: &str) -> Result<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Yaml::string(yaml_content))
            .extract()
            .context("Failed to parse loader options from string")
    }

    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    pub fn with_max_document_bytes(mut self, limit: usize) -> Self {
        self.max_document_bytes = Some(limit);
        self
    }
}
