//! Endpoint list <-> flattened options projection.
//!
//! # Export
//!
//! ```text
//! [A (*), B (site/*), C]          FlatOptions
//!        │                          rpcAlias/rpcHost/... <- A
//!        │ primary = first "*"      extendRpcServers     <- [B, C]
//!        └──────────────────────>
//! ```
//!
//! The primary is the first record whose pattern set contains `*`, or the
//! first record when none does. Every other record becomes an
//! [`AuxiliaryEndpoint`] in input order.
//!
//! A malformed URL anywhere in the list discards the whole batch under
//! [`FailurePolicy::AbortBatch`]: the result is the options as they stood
//! before any record was looked at. [`FailurePolicy::SkipInvalid`] drops
//! the bad records instead.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rpclink::{EndpointListProjector, EndpointRecord};
//!
//! let records = vec![
//!     EndpointRecord::new("home", "ws://token:s3cret@nas:6800/jsonrpc", "*"),
//!     EndpointRecord::new("seedbox", "https://box.example.com/jsonrpc", "tracker.example.com/*"),
//! ];
//!
//! let options = EndpointListProjector::new().export(&records, None).unwrap();
//! assert_eq!(options.rpc_host, "nas");
//! assert_eq!(options.extend_rpc_servers.len(), 1);
//! ```

mod id;

use serde::{Deserialize, Serialize};

pub use id::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator, DEFAULT_ID_TAG};

use crate::codec::{reveal_secret, EndpointUrlCodec};
use crate::endpoint::{primary_index, EndpointRecord, WILDCARD_PATTERN};
use crate::error::{ProjectionError, Result, RpcLinkError};
use crate::options::{AuxiliaryEndpoint, EndpointFields, FlatOptions};

/// What to do with a record whose URL does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Discard the whole batch and keep the pre-projection options
    #[default]
    AbortBatch,
    /// Drop the record and keep going
    SkipInvalid,
}

impl std::str::FromStr for FailurePolicy {
    type Err = RpcLinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "abort_batch" | "abort" => Ok(FailurePolicy::AbortBatch),
            "skip_invalid" | "skip" => Ok(FailurePolicy::SkipInvalid),
            _ => Err(RpcLinkError::Config(format!(
                "Unknown failure policy: {s}. Use: abort_batch, skip_invalid"
            ))),
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::AbortBatch => write!(f, "abort_batch"),
            FailurePolicy::SkipInvalid => write!(f, "skip_invalid"),
        }
    }
}

/// Projects endpoint lists into AriaNg options and back
#[derive(Debug, Clone)]
pub struct EndpointListProjector<G = TimestampIdGenerator> {
    codec: EndpointUrlCodec,
    ids: G,
    policy: FailurePolicy,
}

impl Default for EndpointListProjector {
    fn default() -> Self {
        Self::new()
    }
}

impl EndpointListProjector {
    /// Projector with timestamp ids and the abort-batch policy
    pub fn new() -> Self {
        Self::with_id_generator(TimestampIdGenerator::default())
    }
}

impl<G: IdGenerator> EndpointListProjector<G> {
    /// Projector drawing `rpcId`s from `ids`
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            codec: EndpointUrlCodec::default(),
            ids,
            policy: FailurePolicy::default(),
        }
    }

    /// Set the failure policy
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a custom URL codec
    pub fn with_codec(mut self, codec: EndpointUrlCodec) -> Self {
        self.codec = codec;
        self
    }

    /// Current failure policy
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Project `records` onto `base` (or the default options).
    ///
    /// Returns `Ok(None)` for an empty list. Under
    /// [`FailurePolicy::AbortBatch`] the first unparsable URL yields a
    /// [`ProjectionError`] holding the pre-loop options.
    pub fn project(
        &self,
        records: &[EndpointRecord],
        base: Option<FlatOptions>,
    ) -> std::result::Result<Option<FlatOptions>, ProjectionError> {
        let Some(primary) = primary_index(records) else {
            tracing::debug!("No endpoints to export");
            return Ok(None);
        };
        tracing::debug!(
            "Exporting {} endpoint(s), primary #{} ({})",
            records.len(),
            primary,
            records[primary].name
        );

        let mut output = base.unwrap_or_default();
        output.extend_rpc_servers = Vec::new();

        // Staged so an aborted batch leaves `output` untouched.
        let mut primary_fields: Option<EndpointFields> = None;
        let mut auxiliary = Vec::with_capacity(records.len() - 1);

        for (index, record) in records.iter().enumerate() {
            let parsed = self
                .codec
                .parse(&record.url)
                .and_then(|url| self.codec.endpoint_fields(&record.name, &url));
            let fields = match parsed {
                Ok(fields) => fields,
                Err(err) => {
                    let reason = match err {
                        RpcLinkError::InvalidUrl { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    match self.policy {
                        FailurePolicy::AbortBatch => {
                            return Err(ProjectionError {
                                index,
                                name: record.name.clone(),
                                url: record.url.clone(),
                                reason,
                                options: output,
                            });
                        },
                        FailurePolicy::SkipInvalid => {
                            tracing::warn!(
                                "Skipping endpoint #{} ({}): invalid URL: {}",
                                index,
                                record.name,
                                reason
                            );
                            continue;
                        },
                    }
                },
            };

            if index == primary {
                primary_fields = Some(fields);
            } else {
                auxiliary.push(AuxiliaryEndpoint::new(self.ids.next_id(), fields));
            }
        }

        if let Some(fields) = primary_fields {
            output.set_primary(fields);
        }
        output.extend_rpc_servers = auxiliary;

        Ok(Some(output))
    }

    /// Like [`project`](Self::project), but never fails: an aborted batch
    /// is logged and the pre-loop options are returned.
    pub fn export(
        &self,
        records: &[EndpointRecord],
        base: Option<FlatOptions>,
    ) -> Option<FlatOptions> {
        match self.project(records, base) {
            Ok(options) => options,
            Err(err) => {
                tracing::warn!("Endpoint export aborted: {}", err);
                Some(err.into_options())
            },
        }
    }

    /// Rebuild endpoint records from flattened options.
    ///
    /// The primary server comes first with pattern `*`; auxiliary servers
    /// follow in order with no patterns.
    pub fn restore(&self, options: &FlatOptions) -> Result<Vec<EndpointRecord>> {
        let mut records = Vec::with_capacity(options.server_count());
        records.push(self.restore_record(&options.primary(), WILDCARD_PATTERN)?);
        for entry in &options.extend_rpc_servers {
            records.push(self.restore_record(&entry.fields(), "")?);
        }
        Ok(records)
    }

    fn restore_record(&self, fields: &EndpointFields, pattern: &str) -> Result<EndpointRecord> {
        let plaintext = reveal_secret(&fields.secret)?;
        let url = self.codec.compose_url(fields, &plaintext)?;
        Ok(EndpointRecord::new(fields.alias.clone(), url, pattern))
    }
}
