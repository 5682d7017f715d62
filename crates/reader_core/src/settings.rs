/// Reader colour theme. The index form (0..=2) is what gets persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    White,
    Yellow,
    Dark,
}

impl Theme {
    /// Maps a persisted index back to a theme; out-of-range indices are rejected.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Theme::White),
            1 => Some(Theme::Yellow),
            2 => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Theme::White => 0,
            Theme::Yellow => 1,
            Theme::Dark => 2,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::White => "theme-white",
            Theme::Yellow => "theme-yellow",
            Theme::Dark => "theme-dark",
        }
    }
}

/// Body font weight, toggled between regular and bold. The persisted form is
/// the CSS numeric value (400 or 600).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub fn from_css_value(value: u16) -> Option<Self> {
        match value {
            400 => Some(FontWeight::Regular),
            600 => Some(FontWeight::Bold),
            _ => None,
        }
    }

    pub fn css_value(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Bold => 600,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FontWeight::Regular => FontWeight::Bold,
            FontWeight::Bold => FontWeight::Regular,
        }
    }
}

/// Typography preferences owned by the controller and persisted across pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderSettings {
    pub theme: Theme,
    /// Base font size in pixels.
    pub size_font: i32,
    /// Line height as an em multiple.
    pub line_height: f64,
    pub font_weight: FontWeight,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            theme: Theme::White,
            size_font: 18,
            line_height: 1.6,
            font_weight: FontWeight::Regular,
        }
    }
}

impl ReaderSettings {
    /// Applies only the fields present in `delta`. A loaded settings snapshot
    /// is a merge, never a wholesale replace: absent fields keep whatever the
    /// in-memory state already holds.
    pub fn merge(&mut self, delta: &SettingsDelta) {
        if let Some(theme) = delta.theme {
            self.theme = theme;
        }
        if let Some(size_font) = delta.size_font {
            self.size_font = size_font;
        }
        if let Some(line_height) = delta.line_height {
            self.line_height = line_height;
        }
        if let Some(font_weight) = delta.font_weight {
            self.font_weight = font_weight;
        }
    }
}

/// A partial settings update: either the validated result of a storage load,
/// or the single changed field carried by a persistence effect.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsDelta {
    pub theme: Option<Theme>,
    pub size_font: Option<i32>,
    pub line_height: Option<f64>,
    pub font_weight: Option<FontWeight>,
}

impl SettingsDelta {
    pub fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.size_font.is_none()
            && self.line_height.is_none()
            && self.font_weight.is_none()
    }

    pub fn theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            ..Self::default()
        }
    }

    pub fn size_font(size_font: i32) -> Self {
        Self {
            size_font: Some(size_font),
            ..Self::default()
        }
    }

    pub fn line_height(line_height: f64) -> Self {
        Self {
            line_height: Some(line_height),
            ..Self::default()
        }
    }

    pub fn font_weight(font_weight: FontWeight) -> Self {
        Self {
            font_weight: Some(font_weight),
            ..Self::default()
        }
    }
}
