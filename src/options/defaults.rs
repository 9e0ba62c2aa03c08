//! Default option table used when no base options are supplied.

use serde_json::Map;

use super::{FlatOptions, HttpMethod};

/// Default UI language (AriaNg resolves `TBD` from the browser)
pub const DEFAULT_LANGUAGE: &str = "TBD";
/// Default theme
pub const DEFAULT_THEME: &str = "light";
/// Default title template
pub const DEFAULT_TITLE: &str = "${downspeed}, ${upspeed} - ${title}";
/// Default RPC host
pub const DEFAULT_RPC_HOST: &str = "localhost";
/// Default RPC port (aria2's `--rpc-listen-port`)
pub const DEFAULT_RPC_PORT: &str = "6800";
/// Default RPC interface path
pub const DEFAULT_RPC_INTERFACE: &str = "jsonrpc";
/// Default RPC scheme
pub const DEFAULT_PROTOCOL: &str = "ws";

impl Default for FlatOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            title_refresh_interval: 5000,
            browser_notification: false,
            browser_notification_sound: true,
            browser_notification_frequency: "unlimited".to_string(),

            rpc_alias: String::new(),
            rpc_host: DEFAULT_RPC_HOST.to_string(),
            rpc_port: DEFAULT_RPC_PORT.to_string(),
            rpc_interface: DEFAULT_RPC_INTERFACE.to_string(),
            protocol: DEFAULT_PROTOCOL.to_string(),
            http_method: HttpMethod::Post,
            rpc_request_headers: String::new(),
            secret: String::new(),
            extend_rpc_servers: Vec::new(),

            web_socket_reconnect_interval: 5000,
            global_stat_refresh_interval: 1000,
            download_task_refresh_interval: 1000,
            keyboard_shortcuts: true,
            swipe_gesture: true,
            drag_and_drop_tasks: true,
            rpc_list_display_order: "recentlyUsed".to_string(),
            after_creating_new_task: "task-list".to_string(),
            remove_old_task_after_retrying: true,
            confirm_task_removal: true,
            include_prefix_when_copying_from_task_details: false,
            show_pieces_info_in_task_detail_page: "le10240".to_string(),
            after_retrying_task: "task-list-downloading".to_string(),
            display_order: "default:asc".to_string(),
            file_list_display_order: "default:asc".to_string(),
            peer_list_display_order: "default:asc".to_string(),

            extra: Map::new(),
        }
    }
}
