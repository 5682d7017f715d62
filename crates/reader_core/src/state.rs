use crate::view_model::ReaderViewModel;
use crate::{ReaderSettings, Theme};

/// Maximum width of the article column, in pixels.
pub const DEFAULT_WRAPPER_WIDTH: u32 = 800;

/// Lifecycle of one reader activation. `Error` and `Closed` are terminal:
/// recovery is a full page reload, which is outside this component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Active,
    Error,
    Closed,
}

/// All reader-visible state for one activation. Mutated only through
/// [`crate::update`]; rendering is a pure projection via [`ReaderState::view`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderState {
    pub(crate) phase: Phase,
    pub(crate) title: String,
    pub(crate) content: String,
    /// Lazily derived copy of `content` with stop words marked for fading.
    /// `None` means fading is off; recomputed only when content changes.
    pub(crate) content_without_stop_words: Option<String>,
    pub(crate) wrapper_width: u32,
    pub(crate) reader_view: bool,
    pub(crate) popup_menu: bool,
    pub(crate) speed_reading: bool,
    pub(crate) error: Option<String>,
    pub(crate) settings: ReaderSettings,
    dirty: bool,
}

impl Default for ReaderState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            title: String::new(),
            content: String::new(),
            content_without_stop_words: None,
            wrapper_width: DEFAULT_WRAPPER_WIDTH,
            reader_view: true,
            popup_menu: false,
            speed_reading: false,
            error: None,
            settings: ReaderSettings::default(),
            dirty: false,
        }
    }
}

impl ReaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn settings(&self) -> &ReaderSettings {
        &self.settings
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Projects the state into what the renderer needs. When stop-word fading
    /// is active the faded markup replaces the raw content.
    pub fn view(&self) -> ReaderViewModel {
        let body = self
            .content_without_stop_words
            .clone()
            .unwrap_or_else(|| self.content.clone());

        // Dark theme swaps in the light icon variants.
        let (speed_icon, more_speed_icon) = if self.settings.theme == Theme::Dark {
            ("images/icon-speed-light.png", "images/icon-more-speed-light.png")
        } else {
            ("images/icon-speed.png", "images/icon-more-speed.png")
        };

        ReaderViewModel {
            reader_view: self.reader_view,
            error: self.error.clone(),
            title: self.title.clone(),
            body,
            theme_class: self.settings.theme.css_class(),
            font_size_px: self.settings.size_font,
            line_height_em: self.settings.line_height,
            font_weight: self.settings.font_weight.css_value(),
            wrapper_width: self.wrapper_width,
            popup_menu: self.popup_menu,
            speed_reading: self.speed_reading,
            stop_word_fade: self.content_without_stop_words.is_some(),
            speed_icon,
            more_speed_icon,
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
