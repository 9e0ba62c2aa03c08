//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables
//! - CLI arguments (for the `rpclink` binary)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::projector::{FailurePolicy, DEFAULT_ID_TAG};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Export configuration
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing or unreadable file is
    /// [`RpcLinkError::Io`](crate::RpcLinkError::Io); bad TOML is
    /// [`RpcLinkError::Config`](crate::RpcLinkError::Config).
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Default config file location (`<config dir>/rpclink/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rpclink").join("config.toml"))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(policy) = std::env::var("RPCLINK_FAILURE_POLICY") {
            match policy.parse::<FailurePolicy>() {
                Ok(policy) => config.export.failure_policy = policy,
                Err(e) => tracing::warn!("Ignoring RPCLINK_FAILURE_POLICY: {}", e),
            }
        }
        if let Ok(tag) = std::env::var("RPCLINK_ID_TAG") {
            config.export.id_tag = tag;
        }
        if let Ok(pretty) = std::env::var("RPCLINK_PRETTY") {
            if let Ok(pretty) = pretty.parse() {
                config.export.pretty = pretty;
            }
        }

        config
    }

    /// Merge with another config (other takes precedence where it differs
    /// from the defaults).
    ///
    /// `pretty` is OR-merged: once either side enables it, the other side
    /// cannot switch it back off, so `RPCLINK_PRETTY=false` does not undo
    /// `pretty = true` from the file.
    pub fn merge(self, other: Self) -> Self {
        let defaults = ExportConfig::default();
        Self {
            export: ExportConfig {
                failure_policy: if other.export.failure_policy != defaults.failure_policy {
                    other.export.failure_policy
                } else {
                    self.export.failure_policy
                },
                id_tag: if other.export.id_tag != defaults.id_tag {
                    other.export.id_tag
                } else {
                    self.export.id_tag
                },
                pretty: other.export.pretty || self.export.pretty,
            },
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// What to do with records whose URL does not parse
    pub failure_policy: FailurePolicy,

    /// Product tag embedded in generated `rpcId`s
    pub id_tag: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::AbortBatch,
            id_tag: DEFAULT_ID_TAG.to_string(),
            pretty: false,
        }
    }
}
