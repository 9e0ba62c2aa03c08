//! rpclink error types.
//!
//! Codec-level failures ([`RpcLinkError::InvalidUrl`]) are explicit and
//! propagate with `?`. The projector wraps them in a [`ProjectionError`]
//! that remembers which record broke the batch and the options state from
//! before the batch started, so lenient callers can fall back to it.

use thiserror::Error;

use crate::options::FlatOptions;

/// rpclink errors.
#[derive(Error, Debug)]
pub enum RpcLinkError {
    /// A URL failed to parse or cannot carry credentials.
    #[error("Invalid URL {url:?}: {reason}")]
    InvalidUrl {
        /// The offending input.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A batch projection was aborted.
    #[error(transparent)]
    Projection(#[from] Box<ProjectionError>),

    /// An opaque secret is not valid base64 / UTF-8.
    #[error("Secret decode error: {0}")]
    SecretDecode(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rpclink operations
pub type Result<T> = std::result::Result<T, RpcLinkError>;

impl RpcLinkError {
    /// Build an [`RpcLinkError::InvalidUrl`].
    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        RpcLinkError::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<ProjectionError> for RpcLinkError {
    fn from(err: ProjectionError) -> Self {
        RpcLinkError::Projection(Box::new(err))
    }
}

impl From<toml::de::Error> for RpcLinkError {
    fn from(err: toml::de::Error) -> Self {
        RpcLinkError::Config(err.to_string())
    }
}

impl From<base64::DecodeError> for RpcLinkError {
    fn from(err: base64::DecodeError) -> Self {
        RpcLinkError::SecretDecode(format!("Base64 decode error: {err}"))
    }
}

/// A projection aborted by a malformed record.
///
/// `options` is the output exactly as it stood before the per-record loop:
/// the caller's base (or the defaults) with `extendRpcServers` emptied.
#[derive(Error, Debug)]
#[error("Record #{index} ({name:?}) has an invalid URL {url:?}: {reason}")]
pub struct ProjectionError {
    /// Position of the offending record in the input list.
    pub index: usize,
    /// Record name.
    pub name: String,
    /// Record URL as given.
    pub url: String,
    /// Parser message.
    pub reason: String,
    /// Pre-loop options.
    pub options: FlatOptions,
}

impl ProjectionError {
    /// Take the pre-loop options out of the error.
    pub fn into_options(self) -> FlatOptions {
        self.options
    }
}
