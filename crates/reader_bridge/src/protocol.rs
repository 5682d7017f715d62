use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Correlates a response to its request. Allocated monotonically by the
/// client; never reused within one activation.
pub type RequestId = u64;

/// Wire envelope shared by both transport directions. Requests and responses
/// travel on the same channel and are told apart by the `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Envelope {
    #[serde(rename = "READER_REQUEST")]
    Request {
        id: RequestId,
        #[serde(flatten)]
        action: Action,
    },
    #[serde(rename = "READER_RESPONSE")]
    Response { id: RequestId, data: Value },
}

/// Privileged capability a request asks for, with its payload inline so the
/// serialized form matches the `action`/`keys`/`data`/`path` wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Action {
    #[serde(rename = "storage.get")]
    StorageGet { keys: Vec<String> },
    #[serde(rename = "storage.set")]
    StorageSet { data: Map<String, Value> },
    #[serde(rename = "runtime.getURL")]
    RuntimeGetUrl { path: String },
}
