use reader_bridge::{SettingsSnapshot, SettingsStore};
use reader_core::{Effect, SettingsDelta};
use reader_logging::reader_info;

/// Executes the effects the update function requests. Persistence is fire
/// and forget: the in-memory state has already moved on.
pub struct EffectRunner {
    settings: SettingsStore,
}

impl EffectRunner {
    pub fn new(settings: SettingsStore) -> Self {
        Self { settings }
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistSettings(delta) => {
                    self.settings.save(&settings_snapshot(&delta));
                }
                Effect::ReleasePageStyles => {
                    // The embedder owns the page-level scroll lock; outside a
                    // browser there is nothing to undo.
                    reader_info!("page style overrides released");
                }
            }
        }
    }
}

/// Maps core settings types onto the bridge-level snapshot.
fn settings_snapshot(delta: &SettingsDelta) -> SettingsSnapshot {
    SettingsSnapshot {
        theme: delta.theme.map(|t| t.index()),
        size_font: delta.size_font,
        line_height: delta.line_height,
        font_weight: delta.font_weight.map(|w| w.css_value()),
    }
}
