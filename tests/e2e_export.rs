//! End-to-end export/import tests.
//!
//! These tests go through the public API with JSON fixtures shaped like
//! what the connection manager stores and what AriaNg imports.

use rpclink::{
    EndpointListProjector, EndpointRecord, FailurePolicy, FlatOptions, HttpMethod,
    SequentialIdGenerator,
};
use serde_json::json;

fn projector() -> EndpointListProjector<SequentialIdGenerator> {
    EndpointListProjector::with_id_generator(SequentialIdGenerator::new("rpc"))
}

fn records_from(value: serde_json::Value) -> Vec<EndpointRecord> {
    serde_json::from_value(value).unwrap()
}

/// Test the full JSON shape of an export
#[test]
fn test_export_json_shape() {
    let records = records_from(json!([
        {"name": "A", "url": "ws://:secretA@h1:6800/jsonrpc", "pattern": "*"},
        {"name": "B", "url": "http://:secretB@h2:6801/jsonrpc", "pattern": "site.com/*"}
    ]));

    let options = projector().export(&records, None).unwrap();
    let value = serde_json::to_value(&options).unwrap();

    assert_eq!(value["rpcAlias"], "A");
    assert_eq!(value["protocol"], "ws");
    assert_eq!(value["rpcHost"], "h1");
    assert_eq!(value["rpcPort"], "6800");
    assert_eq!(value["rpcInterface"], "jsonrpc");
    assert_eq!(value["secret"], "c2VjcmV0QQ==");
    assert_eq!(value["httpMethod"], "POST");
    assert_eq!(value["language"], "TBD");
    assert_eq!(
        value["extendRpcServers"],
        json!([{
            "rpcId": "rpc-1",
            "rpcAlias": "B",
            "protocol": "http",
            "rpcHost": "h2",
            "rpcPort": "6801",
            "rpcInterface": "jsonrpc",
            "secret": "c2VjcmV0Qg==",
            "httpMethod": "POST"
        }])
    );
}

/// Test that an existing AriaNg options object keeps unrelated settings
#[test]
fn test_export_into_existing_options() {
    let base: FlatOptions = serde_json::from_value(json!({
        "language": "zh_Hans",
        "theme": "dark",
        "httpMethod": "GET",
        "rpcHost": "old-host",
        "extendRpcServers": [{"rpcId": "stale", "rpcAlias": "stale"}],
        "customKey": {"nested": true}
    }))
    .unwrap();

    let records = records_from(json!([
        {"name": "home", "url": "wss://token:pw@nas.lan/jsonrpc", "pattern": "*"},
        {"name": "box", "url": "https://box.example.com:8443/rpc"}
    ]));

    let options = projector().export(&records, Some(base)).unwrap();

    assert_eq!(options.language, "zh_Hans");
    assert_eq!(options.theme, "dark");
    assert_eq!(options.http_method, HttpMethod::Get);
    assert_eq!(options.rpc_host, "nas.lan");
    assert_eq!(options.rpc_port, "");
    assert_eq!(options.extra.get("customKey"), Some(&json!({"nested": true})));

    assert_eq!(options.extend_rpc_servers.len(), 1);
    assert_eq!(options.extend_rpc_servers[0].id, "rpc-1");
    assert_eq!(options.extend_rpc_servers[0].port, "8443");
    assert_eq!(options.extend_rpc_servers[0].secret, "");
}

/// Test auxiliary count and order across a larger list
#[test]
fn test_auxiliary_order_preserved() {
    let records: Vec<EndpointRecord> = (0..6)
        .map(|i| {
            let pattern = if i == 3 { "*" } else { "" };
            EndpointRecord::new(format!("n{i}"), format!("ws://h{i}:6800/jsonrpc"), pattern)
        })
        .collect();

    let options = projector().export(&records, None).unwrap();
    assert_eq!(options.rpc_alias, "n3");
    assert_eq!(options.extend_rpc_servers.len(), records.len() - 1);

    let hosts: Vec<_> = options.extend_rpc_servers.iter().map(|e| e.host.as_str()).collect();
    assert_eq!(hosts, vec!["h0", "h1", "h2", "h4", "h5"]);

    let ids: Vec<_> = options.extend_rpc_servers.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["rpc-1", "rpc-2", "rpc-3", "rpc-4", "rpc-5"]);
}

/// Test that one malformed URL discards the batch
#[test]
fn test_malformed_url_discards_batch() {
    let records = records_from(json!([
        {"name": "A", "url": "ws://h1:6800/jsonrpc", "pattern": "*"},
        {"name": "B", "url": "http://h2:6801/jsonrpc"},
        {"name": "broken", "url": "http//missing-colon"}
    ]));

    let err = projector().project(&records, None).unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.name, "broken");
    assert!(err.options.extend_rpc_servers.is_empty());
    assert_eq!(err.options.rpc_alias, "");

    let options = projector().export(&records, None).unwrap();
    assert_eq!(options, FlatOptions::default());
}

/// Test the partial-success policy
#[test]
fn test_skip_invalid_keeps_good_records() {
    let records = records_from(json!([
        {"name": "A", "url": "ws://h1:6800/jsonrpc", "pattern": "*"},
        {"name": "broken", "url": "http//missing-colon"},
        {"name": "C", "url": "http://h3:6801/jsonrpc"}
    ]));

    let options = projector()
        .with_policy(FailurePolicy::SkipInvalid)
        .export(&records, None)
        .unwrap();
    assert_eq!(options.rpc_alias, "A");
    assert_eq!(options.extend_rpc_servers.len(), 1);
    assert_eq!(options.extend_rpc_servers[0].alias, "C");
}

/// Test empty input
#[test]
fn test_empty_input_is_null() {
    let options = projector().export(&[], None);
    assert!(options.is_none());
    assert_eq!(serde_json::to_string(&options).unwrap(), "null");
}

/// Test export -> import -> export keeps every server
#[test]
fn test_export_import_roundtrip() {
    let records = records_from(json!([
        {"name": "B", "url": "http://token:p%40ss%20word@h2:6801/jsonrpc", "pattern": "site.com/*"},
        {"name": "A", "url": "ws://token:secretA@h1:6800/jsonrpc", "pattern": "*"},
        {"name": "C", "url": "wss://h3/aria2/jsonrpc", "pattern": ""}
    ]));

    let projector = projector();
    let options = projector.export(&records, None).unwrap();
    let restored = projector.restore(&options).unwrap();

    assert_eq!(restored.len(), 3);
    // Primary comes first after a restore
    assert_eq!(restored[0].name, "A");
    assert_eq!(restored[0].url, "ws://token:secretA@h1:6800/jsonrpc");
    assert_eq!(restored[0].pattern, "*");
    assert_eq!(restored[1].url, "http://token:p%40ss%20word@h2:6801/jsonrpc");
    assert_eq!(restored[2].url, "wss://h3/aria2/jsonrpc");

    let again = projector.export(&restored, None).unwrap();
    assert_eq!(again.primary(), options.primary());
    let fields: Vec<_> = again.extend_rpc_servers.iter().map(|e| e.fields()).collect();
    let expected: Vec<_> = options.extend_rpc_servers.iter().map(|e| e.fields()).collect();
    assert_eq!(fields, expected);
}
