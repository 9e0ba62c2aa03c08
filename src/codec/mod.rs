//! Endpoint URL and secret encoding.
//!
//! Endpoint records keep "where" and "how to authenticate" in one string by
//! putting the RPC secret into the URL's password slot. AriaNg keeps the
//! same secret base64-encoded next to split-out host/port/path fields.
//! This module is the only place that converts between the two.
//!
//! # Forms of a secret
//!
//! | Form      | Where                         | Example                  |
//! |-----------|-------------------------------|--------------------------|
//! | Plaintext | after percent-decoding        | `p@ss word`              |
//! | In URL    | userinfo password             | `token:p%40ss%20word@`   |
//! | Opaque    | AriaNg `secret` / `rpcId`     | `cEBzcyB3b3Jk`           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use rpclink::codec::EndpointUrlCodec;
//!
//! let codec = EndpointUrlCodec::new();
//! let url = codec.combine_url("s3cret", "ws://localhost:6800/jsonrpc")?;
//! assert_eq!(url, "ws://token:s3cret@localhost:6800/jsonrpc");
//!
//! let parsed = codec.parse_endpoint_url(&url)?;
//! assert_eq!(parsed.address, "ws://localhost:6800/jsonrpc");
//! assert_eq!(parsed.secret, "s3cret");
//! ```

mod endpoint_url;
mod secret;

pub use endpoint_url::{EndpointUrlCodec, ParsedEndpoint, ALLOWED_SCHEMES, SECRET_USERNAME};
pub use secret::{conceal_secret, reveal_secret};

/// Check whether `raw` is a usable RPC URL with the default codec
pub fn validate_endpoint_url(raw: &str) -> bool {
    EndpointUrlCodec::default().validate_endpoint_url(raw)
}
