//! Reader bridge: request/response protocol between the page's isolated
//! script realm and the privileged extension realm, plus the typed settings
//! store that rides on it.
mod client;
mod host;
mod protocol;
mod settings_store;
mod storage;

pub use client::{BridgeClient, RequestHandle, DEFAULT_RESOLVE_BUDGET};
pub use host::{BridgeHost, ExtensionResolver, ResourceResolver};
pub use protocol::{Action, Envelope, RequestId};
pub use settings_store::{
    SettingsSnapshot, SettingsStore, KEY_FONT_WEIGHT, KEY_LINE_HEIGHT, KEY_SIZE_FONT, KEY_THEME,
    SETTINGS_KEYS,
};
pub use storage::{FileStorage, MemoryStorage, PersistError, SyncStorage};
