//! # rpclink - RPC endpoint lists <-> AriaNg options
//!
//! Converts between two shapes of the same set of aria2 RPC endpoints:
//!
//! - an ordered list of [`EndpointRecord`]s (name, URL with the secret in
//!   its userinfo, comma-joined routing patterns), as a connection manager
//!   keeps them, and
//! - a flattened [`FlatOptions`] object, as AriaNg imports it: one primary
//!   server merged into the top-level `rpc*` keys and the rest listed in
//!   `extendRpcServers`.
//!
//! ## Conversion Overview
//!
//! ```text
//!  EndpointRecord list                         FlatOptions
//!  ┌──────────────────────────────┐            ┌─────────────────────────────┐
//!  │ A  ws://token:s@h1:6800/rpc  *│──primary──>│ rpcAlias=A rpcHost=h1 ...   │
//!  │ B  http://h2/jsonrpc  site/* │──aux──────>│ extendRpcServers[0] = B     │
//!  │ C  wss://h3/jsonrpc          │──aux──────>│ extendRpcServers[1] = C     │
//!  └──────────────────────────────┘            └─────────────────────────────┘
//!                 ^                                         │
//!                 └───────────────── restore ───────────────┘
//! ```
//!
//! ### Secret Forms
//!
//! | Form      | Lives in                    | Produced by                    |
//! |-----------|-----------------------------|--------------------------------|
//! | Plaintext | caller                      | [`codec::reveal_secret`]       |
//! | In URL    | userinfo password           | [`EndpointUrlCodec::encode_secret`] |
//! | Opaque    | `secret` option (base64)    | [`EndpointUrlCodec::decode_secret`] |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rpclink::{EndpointListProjector, EndpointRecord};
//!
//! let records = vec![
//!     EndpointRecord::new("A", "ws://:secretA@h1:6800/jsonrpc", "*"),
//!     EndpointRecord::new("B", "http://:secretB@h2:6801/jsonrpc", "site.com/*"),
//! ];
//!
//! let projector = EndpointListProjector::new();
//! let options = projector.export(&records, None).expect("non-empty list");
//!
//! assert_eq!(options.rpc_alias, "A");
//! assert_eq!(options.secret, "c2VjcmV0QQ==");
//! assert_eq!(options.extend_rpc_servers[0].alias, "B");
//!
//! // And back
//! let restored = projector.restore(&options).unwrap();
//! assert_eq!(restored[0].url, "ws://token:secretA@h1:6800/jsonrpc");
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: URL userinfo and opaque secret encoding
//! - [`endpoint`]: Endpoint records and primary selection
//! - [`options`]: Typed AriaNg options and default table
//! - [`projector`]: List <-> options projection
//! - [`config`]: Configuration management
//! - [`error`]: Error types and result aliases

pub mod codec;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod options;
pub mod projector;

// Re-exports for convenience
pub use codec::{EndpointUrlCodec, ParsedEndpoint};
pub use config::Config;
pub use endpoint::EndpointRecord;
pub use error::{ProjectionError, Result, RpcLinkError};
pub use options::{AuxiliaryEndpoint, FlatOptions, HttpMethod};
pub use projector::{
    EndpointListProjector, FailurePolicy, IdGenerator, SequentialIdGenerator, TimestampIdGenerator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check if `raw` is a usable RPC endpoint URL
pub fn validate_endpoint_url(raw: &str) -> bool {
    codec::validate_endpoint_url(raw)
}
