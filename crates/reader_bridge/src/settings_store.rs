use std::sync::{Arc, Mutex};
use std::time::Duration;

use reader_logging::{reader_debug, reader_warn};
use serde_json::{Map, Number, Value};

use crate::{Action, BridgeClient, SyncStorage};

pub const KEY_THEME: &str = "theme";
pub const KEY_SIZE_FONT: &str = "sizeFont";
pub const KEY_LINE_HEIGHT: &str = "lineHeight";
pub const KEY_FONT_WEIGHT: &str = "fontWeight";

/// Every key the reader persists.
pub const SETTINGS_KEYS: [&str; 4] = [KEY_THEME, KEY_SIZE_FONT, KEY_LINE_HEIGHT, KEY_FONT_WEIGHT];

/// How long a settings load is willing to wait on the bridge before falling
/// back to defaults.
const LOAD_BUDGET: Duration = Duration::from_millis(500);

/// A validated partial read of the persisted settings. `None` means the key
/// was absent, out of range or not a number -- the caller keeps whatever it
/// already has for that field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsSnapshot {
    /// Theme index, 0..=2.
    pub theme: Option<u8>,
    /// Base font size in pixels, positive.
    pub size_font: Option<i32>,
    /// Line height in em, finite and positive.
    pub line_height: Option<f64>,
    /// CSS font weight, 400 or 600.
    pub font_weight: Option<u16>,
}

impl SettingsSnapshot {
    pub fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.size_font.is_none()
            && self.line_height.is_none()
            && self.font_weight.is_none()
    }
}

enum Backend {
    /// Privileged context: talk to the storage collaborator directly.
    Direct(Arc<dyn SyncStorage>),
    /// Isolated context: everything goes through the bridge. The client is
    /// shared with whoever resolves resource URLs on the same channel.
    Remote(Arc<Mutex<BridgeClient>>),
    /// No storage capability in this context. Loads return nothing, saves
    /// are logged and dropped; rendering is never blocked on persistence.
    Unavailable,
}

/// Typed settings persistence. The routing variant is chosen at construction
/// (capability injection), so callers never probe for ambient APIs.
pub struct SettingsStore {
    backend: Backend,
}

impl SettingsStore {
    pub fn direct(storage: Arc<dyn SyncStorage>) -> Self {
        Self {
            backend: Backend::Direct(storage),
        }
    }

    pub fn remote(client: Arc<Mutex<BridgeClient>>) -> Self {
        Self {
            backend: Backend::Remote(client),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            backend: Backend::Unavailable,
        }
    }

    /// Reads and validates every persisted setting. Invalid stored values
    /// are treated as absent; a silent bridge degrades to an empty snapshot.
    pub fn load(&mut self) -> SettingsSnapshot {
        self.load_keys(&SETTINGS_KEYS)
    }

    /// Reads and validates just the requested keys; fields outside `keys`
    /// come back absent regardless of what storage holds for them.
    pub fn load_keys(&mut self, keys: &[&str]) -> SettingsSnapshot {
        let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        let stored = match &mut self.backend {
            Backend::Direct(storage) => storage.get(&keys),
            Backend::Remote(client) => {
                let mut client = match client.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                let handle = client.send(Action::StorageGet { keys });
                match client.wait(handle, LOAD_BUDGET) {
                    Some(Value::Object(map)) => map,
                    Some(other) => {
                        reader_warn!("storage.get returned non-object data: {other}");
                        Map::new()
                    }
                    None => {
                        client.abandon(handle);
                        reader_debug!("settings load timed out; keeping defaults");
                        Map::new()
                    }
                }
            }
            Backend::Unavailable => {
                reader_debug!("settings storage unavailable; keeping defaults");
                Map::new()
            }
        };
        decode(&stored)
    }

    /// Persists the fields present in `snapshot`, fire and forget. Failures
    /// are logged and never surfaced to the caller.
    pub fn save(&mut self, snapshot: &SettingsSnapshot) {
        let data = encode(snapshot);
        if data.is_empty() {
            return;
        }
        match &mut self.backend {
            Backend::Direct(storage) => storage.set(data),
            Backend::Remote(client) => {
                let mut client = match client.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                client.send_forget(Action::StorageSet { data });
            }
            Backend::Unavailable => {
                reader_debug!("settings storage unavailable; save dropped");
            }
        }
    }
}

fn decode(stored: &Map<String, Value>) -> SettingsSnapshot {
    SettingsSnapshot {
        theme: stored
            .get(KEY_THEME)
            .and_then(Value::as_u64)
            .and_then(|v| u8::try_from(v).ok())
            .filter(|v| *v <= 2),
        size_font: stored
            .get(KEY_SIZE_FONT)
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
            .filter(|v| *v > 0),
        line_height: stored
            .get(KEY_LINE_HEIGHT)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite() && *v > 0.0),
        font_weight: stored
            .get(KEY_FONT_WEIGHT)
            .and_then(Value::as_u64)
            .and_then(|v| u16::try_from(v).ok())
            .filter(|v| *v == 400 || *v == 600),
    }
}

fn encode(snapshot: &SettingsSnapshot) -> Map<String, Value> {
    let mut data = Map::new();
    if let Some(theme) = snapshot.theme {
        data.insert(KEY_THEME.to_string(), Value::from(theme));
    }
    if let Some(size_font) = snapshot.size_font {
        data.insert(KEY_SIZE_FONT.to_string(), Value::from(size_font));
    }
    if let Some(line_height) = snapshot.line_height {
        if let Some(number) = Number::from_f64(line_height) {
            data.insert(KEY_LINE_HEIGHT.to_string(), Value::Number(number));
        }
    }
    if let Some(font_weight) = snapshot.font_weight {
        data.insert(KEY_FONT_WEIGHT.to_string(), Value::from(font_weight));
    }
    data
}
