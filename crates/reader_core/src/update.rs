use crate::stopwords::fade_stop_words;
use crate::{Effect, LineHeightEdit, Msg, Phase, ReaderState, SettingsDelta, Theme};

/// Pure update function: applies a message to state and returns any effects.
///
/// Activation messages are only honoured in `Loading`; user mutations only in
/// `Active`. Anything arriving in a terminal phase is a no-op, which is what
/// makes late bridge responses after a close harmless.
pub fn update(mut state: ReaderState, msg: Msg) -> (ReaderState, Vec<Effect>) {
    let effects = match msg {
        Msg::ArticleExtracted { title, content } => {
            if state.phase != Phase::Loading {
                return (state, Vec::new());
            }
            state.phase = Phase::Active;
            state.title = title;
            state.content = content;
            state.content_without_stop_words = None;
            state.mark_dirty();
            Vec::new()
        }
        Msg::ExtractionFailed { message } => {
            if state.phase != Phase::Loading {
                return (state, Vec::new());
            }
            state.phase = Phase::Error;
            state.error = Some(message);
            state.reader_view = false;
            state.mark_dirty();
            Vec::new()
        }
        Msg::SettingsLoaded(delta) => {
            match state.phase {
                Phase::Loading | Phase::Active => {}
                Phase::Error | Phase::Closed => {
                    return (state, Vec::new());
                }
            }
            if !delta.is_empty() {
                state.settings.merge(&delta);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CloseReader => {
            if state.phase != Phase::Active {
                return (state, Vec::new());
            }
            state.phase = Phase::Closed;
            state.reader_view = false;
            state.mark_dirty();
            vec![Effect::ReleasePageStyles]
        }
        Msg::SelectTheme(index) => {
            if state.phase != Phase::Active {
                return (state, Vec::new());
            }
            let Some(theme) = Theme::from_index(index) else {
                return (state, Vec::new());
            };
            // Re-selecting the current theme changes nothing and persists nothing.
            if theme == state.settings.theme {
                return (state, Vec::new());
            }
            state.settings.theme = theme;
            state.mark_dirty();
            vec![Effect::PersistSettings(SettingsDelta::theme(theme))]
        }
        Msg::IncreaseFontSize => {
            if state.phase != Phase::Active {
                return (state, Vec::new());
            }
            state.settings.size_font = state.settings.size_font.saturating_add(1);
            state.mark_dirty();
            vec![Effect::PersistSettings(SettingsDelta::size_font(
                state.settings.size_font,
            ))]
        }
        Msg::DecreaseFontSize => {
            if state.phase != Phase::Active {
                return (state, Vec::new());
            }
            state.settings.size_font = state.settings.size_font.saturating_sub(1);
            state.mark_dirty();
            vec![Effect::PersistSettings(SettingsDelta::size_font(
                state.settings.size_font,
            ))]
        }
        Msg::EditLineHeight(edit) => {
            if state.phase != Phase::Active {
                return (state, Vec::new());
            }
            let step = match edit {
                LineHeightEdit::Increase => 0.1,
                LineHeightEdit::Decrease => -0.1,
            };
            state.settings.line_height += step;
            state.mark_dirty();
            vec![Effect::PersistSettings(SettingsDelta::line_height(
                state.settings.line_height,
            ))]
        }
        Msg::ToggleFontWeight => {
            if state.phase != Phase::Active {
                return (state, Vec::new());
            }
            state.settings.font_weight = state.settings.font_weight.toggled();
            state.mark_dirty();
            vec![Effect::PersistSettings(SettingsDelta::font_weight(
                state.settings.font_weight,
            ))]
        }
        Msg::TogglePopup => {
            if state.phase != Phase::Active {
                return (state, Vec::new());
            }
            state.popup_menu = !state.popup_menu;
            state.mark_dirty();
            Vec::new()
        }
        Msg::ToggleSpeedReading => {
            if state.phase != Phase::Active {
                return (state, Vec::new());
            }
            state.speed_reading = !state.speed_reading;
            state.mark_dirty();
            Vec::new()
        }
        Msg::ToggleStopWordFade => {
            if state.phase != Phase::Active {
                return (state, Vec::new());
            }
            state.content_without_stop_words = match state.content_without_stop_words.take() {
                Some(_) => None,
                None => Some(fade_stop_words(&state.content)),
            };
            state.mark_dirty();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
