//! Reader core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod settings;
mod state;
mod stopwords;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{LineHeightEdit, Msg};
pub use settings::{FontWeight, ReaderSettings, SettingsDelta, Theme};
pub use state::{Phase, ReaderState, DEFAULT_WRAPPER_WIDTH};
pub use stopwords::fade_stop_words;
pub use update::update;
pub use view_model::ReaderViewModel;
