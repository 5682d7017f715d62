use crate::SettingsDelta;

/// Direction of a line-height adjustment, in 0.1 em steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineHeightEdit {
    Increase,
    Decrease,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Extraction succeeded; carries the article for this activation.
    ArticleExtracted { title: String, content: String },
    /// Extraction failed; the reader shows an error panel instead.
    ExtractionFailed { message: String },
    /// Persisted settings arrived (possibly after user edits; per-field
    /// last-write-wins).
    SettingsLoaded(SettingsDelta),
    /// User closed the reader overlay.
    CloseReader,
    /// User picked a theme by index (0 white, 1 yellow, 2 dark).
    SelectTheme(u8),
    /// User bumped the base font size by one pixel.
    IncreaseFontSize,
    DecreaseFontSize,
    /// User adjusted line height from the popup menu.
    EditLineHeight(LineHeightEdit),
    /// User toggled bold body text (400 <-> 600).
    ToggleFontWeight,
    /// Open or close the popup options menu.
    TogglePopup,
    /// Toggle the speed-reading presentation mode.
    ToggleSpeedReading,
    /// Toggle fading of stop words in the article body.
    ToggleStopWordFade,
    /// Fallback for placeholder wiring.
    NoOp,
}
