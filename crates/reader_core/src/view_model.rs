/// Pure projection of [`crate::ReaderState`] for rendering. The renderer never
/// reads the state directly; everything it paints comes through here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReaderViewModel {
    /// False once the reader is closed or errored; nothing is painted.
    pub reader_view: bool,
    /// When set, the error panel replaces the article (mutually exclusive
    /// with normal rendering).
    pub error: Option<String>,
    pub title: String,
    /// Article markup to paint: the faded variant when stop-word fade is on.
    pub body: String,
    pub theme_class: &'static str,
    pub font_size_px: i32,
    pub line_height_em: f64,
    /// CSS numeric font weight (400 or 600).
    pub font_weight: u16,
    pub wrapper_width: u32,
    pub popup_menu: bool,
    pub speed_reading: bool,
    pub stop_word_fade: bool,
    /// Logical asset paths; the host resolves them to extension URLs.
    pub speed_icon: &'static str,
    pub more_speed_icon: &'static str,
    pub dirty: bool,
}
