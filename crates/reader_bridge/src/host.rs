use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use reader_logging::reader_warn;
use serde_json::{json, Value};

use crate::{Action, Envelope, SyncStorage};

/// Maps a logical asset path to an extension-absolute URL. Injected into the
/// host at construction; there is no ambient API detection anywhere.
pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, path: &str) -> String;
}

/// Standard resolver: prefixes the extension's base URL.
#[derive(Debug, Clone)]
pub struct ExtensionResolver {
    base_url: String,
}

impl ExtensionResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl ResourceResolver for ExtensionResolver {
    fn resolve(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Privileged-side half of the bridge. Services requests on its own thread,
/// dispatching each action to the injected capability and emitting exactly
/// one response carrying the request's id.
pub struct BridgeHost;

impl BridgeHost {
    /// Spawns the handler thread and returns the transport endpoints for the
    /// isolated-side client: a sender for requests and a receiver for
    /// responses. The thread exits when the client hangs up.
    pub fn spawn(
        storage: Arc<dyn SyncStorage>,
        resolver: Arc<dyn ResourceResolver>,
    ) -> (Sender<Envelope>, Receiver<Envelope>) {
        let (request_tx, request_rx) = mpsc::channel::<Envelope>();
        let (response_tx, response_rx) = mpsc::channel::<Envelope>();

        thread::spawn(move || {
            while let Ok(envelope) = request_rx.recv() {
                match envelope {
                    Envelope::Request { id, action } => {
                        let data = dispatch(storage.as_ref(), resolver.as_ref(), action);
                        if response_tx.send(Envelope::Response { id, data }).is_err() {
                            break;
                        }
                    }
                    Envelope::Response { id, .. } => {
                        reader_warn!("response {id} sent to the privileged side; ignoring");
                    }
                }
            }
        });

        (request_tx, response_rx)
    }
}

fn dispatch(storage: &dyn SyncStorage, resolver: &dyn ResourceResolver, action: Action) -> Value {
    match action {
        Action::StorageGet { keys } => Value::Object(storage.get(&keys)),
        Action::StorageSet { data } => {
            storage.set(data);
            json!({ "success": true })
        }
        Action::RuntimeGetUrl { path } => Value::String(resolver.resolve(&path)),
    }
}
