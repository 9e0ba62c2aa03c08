//! Flattened AriaNg options.
//!
//! [`FlatOptions`] mirrors the options object AriaNg imports: one primary
//! RPC server merged into the top-level `rpc*` keys, every other server in
//! `extendRpcServers`. Keys this crate does not model are kept in
//! [`FlatOptions::extra`] so a reused options object round-trips intact.
//!
//! Missing keys are filled from the default table when deserializing:
//!
//! ```rust,ignore
//! use rpclink::options::FlatOptions;
//!
//! let options: FlatOptions = serde_json::from_str(r#"{"theme":"dark"}"#)?;
//! assert_eq!(options.theme, "dark");
//! assert_eq!(options.rpc_port, "6800");
//! ```

mod defaults;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use defaults::{
    DEFAULT_LANGUAGE, DEFAULT_PROTOCOL, DEFAULT_RPC_HOST, DEFAULT_RPC_INTERFACE, DEFAULT_RPC_PORT,
    DEFAULT_THEME, DEFAULT_TITLE,
};

/// HTTP method AriaNg uses for JSON-RPC over HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `POST` (AriaNg default)
    #[default]
    Post,
    /// `GET`
    Get,
}

impl HttpMethod {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
            HttpMethod::Get => "GET",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A non-primary RPC server (`extendRpcServers` entry)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuxiliaryEndpoint {
    /// Generated identifier, unique within one export
    #[serde(rename = "rpcId")]
    pub id: String,
    /// Display name
    #[serde(rename = "rpcAlias")]
    pub alias: String,
    /// URL scheme (`http`, `https`, `ws`, `wss`)
    pub protocol: String,
    /// Host name
    #[serde(rename = "rpcHost")]
    pub host: String,
    /// Port, empty when the scheme's default port is used
    #[serde(rename = "rpcPort")]
    pub port: String,
    /// Interface path without leading slash
    #[serde(rename = "rpcInterface")]
    pub interface_path: String,
    /// Opaque (base64) secret
    pub secret: String,
    /// Transport method
    #[serde(rename = "httpMethod")]
    pub http_method: HttpMethod,
}

/// Connection fields shared by the primary server and auxiliary entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointFields {
    /// Display name
    pub alias: String,
    /// URL scheme
    pub protocol: String,
    /// Host name
    pub host: String,
    /// Port (may be empty)
    pub port: String,
    /// Interface path without leading slash
    pub interface_path: String,
    /// Opaque (base64) secret
    pub secret: String,
}

impl AuxiliaryEndpoint {
    /// Build an entry from extracted fields. The method is always POST.
    pub fn new(id: impl Into<String>, fields: EndpointFields) -> Self {
        Self {
            id: id.into(),
            alias: fields.alias,
            protocol: fields.protocol,
            host: fields.host,
            port: fields.port,
            interface_path: fields.interface_path,
            secret: fields.secret,
            http_method: HttpMethod::Post,
        }
    }

    /// Connection fields of this entry
    pub fn fields(&self) -> EndpointFields {
        EndpointFields {
            alias: self.alias.clone(),
            protocol: self.protocol.clone(),
            host: self.host.clone(),
            port: self.port.clone(),
            interface_path: self.interface_path.clone(),
            secret: self.secret.clone(),
        }
    }
}

/// The flattened options object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlatOptions {
    /// UI language
    pub language: String,
    /// UI theme
    pub theme: String,
    /// Window title template
    pub title: String,
    /// Title refresh interval (ms)
    pub title_refresh_interval: u64,
    /// Browser notifications enabled
    pub browser_notification: bool,
    /// Notification sound enabled
    pub browser_notification_sound: bool,
    /// Notification frequency
    pub browser_notification_frequency: String,

    /// Primary server alias
    pub rpc_alias: String,
    /// Primary server host
    pub rpc_host: String,
    /// Primary server port
    pub rpc_port: String,
    /// Primary server interface path
    pub rpc_interface: String,
    /// Primary server scheme
    pub protocol: String,
    /// Primary server transport method
    pub http_method: HttpMethod,
    /// Extra request headers for the primary server
    pub rpc_request_headers: String,
    /// Primary server opaque secret
    pub secret: String,
    /// Non-primary servers
    pub extend_rpc_servers: Vec<AuxiliaryEndpoint>,

    /// WebSocket reconnect interval (ms)
    pub web_socket_reconnect_interval: u64,
    /// Global stat refresh interval (ms)
    pub global_stat_refresh_interval: u64,
    /// Task list refresh interval (ms)
    pub download_task_refresh_interval: u64,
    /// Keyboard shortcuts enabled
    pub keyboard_shortcuts: bool,
    /// Swipe gestures enabled
    pub swipe_gesture: bool,
    /// Drag-and-drop task reordering enabled
    pub drag_and_drop_tasks: bool,
    /// RPC list order
    pub rpc_list_display_order: String,
    /// Page to open after creating a task
    pub after_creating_new_task: String,
    /// Remove the old task after retrying
    pub remove_old_task_after_retrying: bool,
    /// Ask before removing tasks
    pub confirm_task_removal: bool,
    /// Copy with prefix from task details
    pub include_prefix_when_copying_from_task_details: bool,
    /// Pieces info threshold on the task detail page
    pub show_pieces_info_in_task_detail_page: String,
    /// Page to open after retrying a task
    pub after_retrying_task: String,
    /// Task list order
    pub display_order: String,
    /// File list order
    pub file_list_display_order: String,
    /// Peer list order
    pub peer_list_display_order: String,

    /// Keys not modelled above, carried through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FlatOptions {
    /// Options built from the default table
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the primary server fields. `http_method` is left alone.
    pub fn set_primary(&mut self, fields: EndpointFields) {
        self.rpc_alias = fields.alias;
        self.protocol = fields.protocol;
        self.rpc_host = fields.host;
        self.rpc_port = fields.port;
        self.rpc_interface = fields.interface_path;
        self.secret = fields.secret;
    }

    /// Primary server fields
    pub fn primary(&self) -> EndpointFields {
        EndpointFields {
            alias: self.rpc_alias.clone(),
            protocol: self.protocol.clone(),
            host: self.rpc_host.clone(),
            port: self.rpc_port.clone(),
            interface_path: self.rpc_interface.clone(),
            secret: self.secret.clone(),
        }
    }

    /// Number of servers described (primary included)
    pub fn server_count(&self) -> usize {
        1 + self.extend_rpc_servers.len()
    }
}
