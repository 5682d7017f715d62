use reader_bridge::{SettingsSnapshot, SettingsStore};
use reader_core::{FontWeight, Msg, SettingsDelta, Theme};
use reader_engine::{CleaningFlags, ContentScoreExtractor, DocumentSnapshot, Extractor};

/// One-shot activation sequence: snapshot the page, extract the article,
/// then load whatever settings are persisted. Neither step retries.
pub fn activate(html: &str, store: &mut SettingsStore) -> Vec<Msg> {
    let snapshot = DocumentSnapshot::parse(html);
    // Conditional cleaning stays off so captions, figure elements and short
    // trailing paragraphs survive extraction.
    let flags = CleaningFlags::default().without_conditional_cleaning();

    let extracted = match ContentScoreExtractor.extract(&snapshot, flags) {
        Ok(article) => Msg::ArticleExtracted {
            title: article.title,
            content: article.content,
        },
        Err(err) => Msg::ExtractionFailed {
            message: err.to_string(),
        },
    };

    let settings = Msg::SettingsLoaded(settings_delta(store.load()));
    vec![extracted, settings]
}

/// Maps the bridge-level snapshot onto core settings types.
fn settings_delta(snapshot: SettingsSnapshot) -> SettingsDelta {
    SettingsDelta {
        theme: snapshot.theme.and_then(Theme::from_index),
        size_font: snapshot.size_font,
        line_height: snapshot.line_height,
        font_weight: snapshot.font_weight.and_then(FontWeight::from_css_value),
    }
}
