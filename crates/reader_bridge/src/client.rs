use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use reader_logging::{reader_debug, reader_warn};
use serde_json::Value;

use crate::{Action, Envelope, RequestId};

/// How long the synchronous resource-resolution shim is willing to block.
/// The caller of `resolve_url` cannot itself suspend, so this is the one
/// place the bridge trades waiting for a bounded stall.
pub const DEFAULT_RESOLVE_BUDGET: Duration = Duration::from_millis(100);

/// Ticket for one in-flight request; redeem it with [`BridgeClient::wait`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestHandle {
    id: RequestId,
}

impl RequestHandle {
    pub fn id(self) -> RequestId {
        self.id
    }
}

/// Isolated-side half of the bridge. Owns the pending-request table: `send`
/// inserts, a matched response removes, and every id is used at most once.
///
/// If the privileged side is absent the requests simply never get answered;
/// callers must use the bounded [`wait`](Self::wait) and treat a timeout as
/// "feature unavailable" rather than blocking forever.
pub struct BridgeClient {
    request_tx: Sender<Envelope>,
    response_rx: Receiver<Envelope>,
    next_id: RequestId,
    pending: HashSet<RequestId>,
    /// Responses routed here while waiting for a different id.
    arrived: HashMap<RequestId, Value>,
    resolve_budget: Duration,
}

impl BridgeClient {
    pub fn new(request_tx: Sender<Envelope>, response_rx: Receiver<Envelope>) -> Self {
        Self {
            request_tx,
            response_rx,
            next_id: 0,
            pending: HashSet::new(),
            arrived: HashMap::new(),
            resolve_budget: DEFAULT_RESOLVE_BUDGET,
        }
    }

    /// Overrides the synchronous shim's wait budget.
    pub fn with_resolve_budget(mut self, budget: Duration) -> Self {
        self.resolve_budget = budget;
        self
    }

    /// Allocates a fresh id, records the pending entry and emits the request.
    pub fn send(&mut self, action: Action) -> RequestHandle {
        let id = self.allocate_id();
        self.pending.insert(id);
        self.post(Envelope::Request { id, action });
        RequestHandle { id }
    }

    /// Emits a request nobody will wait on (fire-and-forget writes). No
    /// pending entry is recorded, so the eventual response is dropped as
    /// stale on arrival.
    pub fn send_forget(&mut self, action: Action) -> RequestId {
        let id = self.allocate_id();
        self.post(Envelope::Request { id, action });
        id
    }

    /// Bounded wait for the response matching `handle`. Drains the shared
    /// response channel, parking out-of-order responses for their own
    /// waiters; returns `None` once the budget is spent. On a match the
    /// pending entry is removed, so delivery is at-most-once per id.
    pub fn wait(&mut self, handle: RequestHandle, budget: Duration) -> Option<Value> {
        let deadline = Instant::now() + budget;
        loop {
            if let Some(data) = self.arrived.remove(&handle.id) {
                self.pending.remove(&handle.id);
                return Some(data);
            }
            let now = Instant::now();
            if now >= deadline {
                return None;
            }
            match self.response_rx.recv_timeout(deadline - now) {
                Ok(envelope) => self.route(envelope),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return None;
                }
            }
        }
    }

    /// Synchronous resource-resolution shim: logical asset path in,
    /// extension-absolute URL out. Blocks up to the configured budget and
    /// degrades to the empty-string sentinel (a missing icon, not a crash)
    /// when no answer arrives in time.
    pub fn resolve_url(&mut self, path: &str) -> String {
        let handle = self.send(Action::RuntimeGetUrl {
            path: path.to_string(),
        });
        let budget = self.resolve_budget;
        match self.wait(handle, budget) {
            Some(Value::String(url)) => url,
            Some(other) => {
                reader_warn!("runtime.getURL returned non-string data: {other}");
                self.abandon(handle);
                String::new()
            }
            None => {
                reader_debug!("runtime.getURL budget exceeded for {path}");
                self.abandon(handle);
                String::new()
            }
        }
    }

    /// Gives up on an in-flight request so its pending entry doesn't leak.
    pub fn abandon(&mut self, handle: RequestHandle) {
        self.pending.remove(&handle.id);
        self.arrived.remove(&handle.id);
    }

    /// Number of requests still awaiting a response.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn allocate_id(&mut self) -> RequestId {
        self.next_id += 1;
        self.next_id
    }

    fn post(&mut self, envelope: Envelope) {
        // A dead channel means the privileged side is gone; the request just
        // goes unanswered and the bounded wait reports it.
        if self.request_tx.send(envelope).is_err() {
            reader_debug!("bridge transport closed; request dropped");
        }
    }

    fn route(&mut self, envelope: Envelope) {
        match envelope {
            Envelope::Response { id, data } => {
                if self.pending.contains(&id) {
                    self.arrived.insert(id, data);
                } else {
                    // Stale: fire-and-forget write acks and abandoned waits
                    // land here.
                    reader_debug!("dropping response for unknown request id {id}");
                }
            }
            Envelope::Request { id, .. } => {
                reader_warn!("request {id} echoed back to the isolated side; ignoring");
            }
        }
    }
}
