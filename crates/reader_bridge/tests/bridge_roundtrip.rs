use std::sync::mpsc;
use std::sync::{Arc, Once};
use std::time::Duration;

use reader_bridge::{
    Action, BridgeClient, BridgeHost, Envelope, ExtensionResolver, MemoryStorage,
};
use serde_json::{json, Value};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

fn spawn_client() -> BridgeClient {
    let storage = Arc::new(MemoryStorage::new());
    let resolver = Arc::new(ExtensionResolver::new("extension://reader"));
    let (request_tx, response_rx) = BridgeHost::spawn(storage, resolver);
    BridgeClient::new(request_tx, response_rx)
}

#[test]
fn get_url_round_trip_leaves_no_pending_entry() {
    init_logging();
    let mut client = spawn_client();

    let handle = client.send(Action::RuntimeGetUrl {
        path: "images/x.png".to_string(),
    });
    assert_eq!(client.pending_len(), 1);

    let data = client.wait(handle, Duration::from_secs(1)).expect("response");
    let url = data.as_str().expect("string data");
    assert!(url.ends_with("images/x.png"));
    assert_eq!(client.pending_len(), 0);
}

#[test]
fn resolve_url_prefixes_the_extension_base() {
    init_logging();
    let mut client = spawn_client();
    let url = client.resolve_url("images/icon-speed.png");
    assert_eq!(url, "extension://reader/images/icon-speed.png");
    assert_eq!(client.pending_len(), 0);
}

#[test]
fn concurrent_requests_get_distinct_ids_and_their_own_responses() {
    init_logging();
    let mut client = spawn_client();

    let paths = ["a.png", "b.png", "c.png", "d.png", "e.png"];
    let handles: Vec<_> = paths
        .iter()
        .map(|path| {
            client.send(Action::RuntimeGetUrl {
                path: path.to_string(),
            })
        })
        .collect();

    let mut ids: Vec<_> = handles.iter().map(|h| h.id()).collect();
    ids.dedup();
    assert_eq!(ids.len(), paths.len());
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    // Redeem in reverse order: out-of-order arrival must still match by id.
    for (handle, path) in handles.iter().zip(paths.iter()).rev() {
        let data = client.wait(*handle, Duration::from_secs(1)).expect("response");
        assert_eq!(
            data,
            Value::String(format!("extension://reader/{path}"))
        );
    }
    assert_eq!(client.pending_len(), 0);
}

#[test]
fn missing_host_degrades_to_the_empty_sentinel() {
    init_logging();
    let (request_tx, _request_rx) = mpsc::channel();
    let (_response_tx, response_rx) = mpsc::channel::<Envelope>();
    let mut client = BridgeClient::new(request_tx, response_rx)
        .with_resolve_budget(Duration::from_millis(10));

    assert_eq!(client.resolve_url("images/x.png"), "");
    // The abandoned request must not leak a pending entry.
    assert_eq!(client.pending_len(), 0);
}

#[test]
fn timed_out_wait_can_still_be_redeemed_later() {
    init_logging();
    let mut client = spawn_client();

    let handle = client.send(Action::RuntimeGetUrl {
        path: "slowpoke.png".to_string(),
    });
    // A zero budget forces a timeout even though the host will answer.
    let early = client.wait(handle, Duration::from_millis(0));
    assert!(early.is_none());
    assert_eq!(client.pending_len(), 1);

    // The late response is applied harmlessly on the next bounded wait.
    let late = client.wait(handle, Duration::from_secs(1)).expect("response");
    assert!(late.as_str().unwrap().ends_with("slowpoke.png"));
    assert_eq!(client.pending_len(), 0);
}

#[test]
fn storage_set_then_get_through_the_host() {
    init_logging();
    let mut client = spawn_client();

    let mut data = serde_json::Map::new();
    data.insert("theme".to_string(), json!(2));
    let set = client.send(Action::StorageSet { data });
    let ack = client.wait(set, Duration::from_secs(1)).expect("ack");
    assert_eq!(ack, json!({ "success": true }));

    let get = client.send(Action::StorageGet {
        keys: vec!["theme".to_string()],
    });
    let stored = client.wait(get, Duration::from_secs(1)).expect("data");
    assert_eq!(stored, json!({ "theme": 2 }));
}

#[test]
fn request_envelope_matches_the_wire_shape() {
    let envelope = Envelope::Request {
        id: 7,
        action: Action::StorageGet {
            keys: vec!["theme".to_string(), "sizeFont".to_string()],
        },
    };
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "type": "READER_REQUEST",
            "id": 7,
            "action": "storage.get",
            "keys": ["theme", "sizeFont"],
        })
    );

    let envelope = Envelope::Request {
        id: 8,
        action: Action::RuntimeGetUrl {
            path: "images/x.png".to_string(),
        },
    };
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "type": "READER_REQUEST",
            "id": 8,
            "action": "runtime.getURL",
            "path": "images/x.png",
        })
    );
}

#[test]
fn response_envelope_parses_from_raw_json() {
    let raw = r#"{ "type": "READER_RESPONSE", "id": 3, "data": "extension://reader/x" }"#;
    let envelope: Envelope = serde_json::from_str(raw).unwrap();
    assert_eq!(
        envelope,
        Envelope::Response {
            id: 3,
            data: Value::String("extension://reader/x".to_string()),
        }
    );
}
