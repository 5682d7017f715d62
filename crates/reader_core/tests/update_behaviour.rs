use std::sync::Once;

use reader_core::{
    update, Effect, FontWeight, LineHeightEdit, Msg, Phase, ReaderState, SettingsDelta, Theme,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

fn activated() -> ReaderState {
    let (state, effects) = update(
        ReaderState::new(),
        Msg::ArticleExtracted {
            title: "A Title".to_string(),
            content: "<p>Some body text</p>".to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn extraction_success_activates_reader() {
    init_logging();
    let mut state = activated();

    assert_eq!(state.phase(), Phase::Active);
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.title, "A Title");
    assert_eq!(view.body, "<p>Some body text</p>");
    assert!(view.reader_view);
    assert!(view.error.is_none());
}

#[test]
fn extraction_failure_shows_error_and_hides_reader() {
    init_logging();
    let (state, effects) = update(
        ReaderState::new(),
        Msg::ExtractionFailed {
            message: "no article content found".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Error);
    let view = state.view();
    assert_eq!(view.error.as_deref(), Some("no article content found"));
    assert!(!view.reader_view);

    // Error is terminal: user mutations are ignored.
    let (state, effects) = update(state, Msg::IncreaseFontSize);
    assert!(effects.is_empty());
    assert_eq!(state.settings().size_font, 18);
}

#[test]
fn activation_applies_at_most_once() {
    init_logging();
    let state = activated();
    let (state, effects) = update(
        state,
        Msg::ArticleExtracted {
            title: "Another".to_string(),
            content: "<p>other</p>".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().title, "A Title");
}

#[test]
fn font_weight_toggle_is_an_involution() {
    init_logging();
    let state = activated();
    assert_eq!(state.settings().font_weight, FontWeight::Regular);

    let (state, effects) = update(state, Msg::ToggleFontWeight);
    assert_eq!(state.settings().font_weight, FontWeight::Bold);
    assert_eq!(
        effects,
        vec![Effect::PersistSettings(SettingsDelta::font_weight(
            FontWeight::Bold
        ))]
    );

    let (state, effects) = update(state, Msg::ToggleFontWeight);
    assert_eq!(state.settings().font_weight, FontWeight::Regular);
    assert_eq!(
        effects,
        vec![Effect::PersistSettings(SettingsDelta::font_weight(
            FontWeight::Regular
        ))]
    );
}

#[test]
fn reselecting_current_theme_changes_nothing() {
    init_logging();
    let state = activated();

    let (state, effects) = update(state, Msg::SelectTheme(1));
    assert_eq!(state.settings().theme, Theme::Yellow);
    assert_eq!(
        effects,
        vec![Effect::PersistSettings(SettingsDelta::theme(Theme::Yellow))]
    );

    let before = state.clone();
    let (state, effects) = update(state, Msg::SelectTheme(1));
    assert_eq!(state, before);
    assert!(effects.is_empty());
}

#[test]
fn out_of_range_theme_index_is_ignored() {
    init_logging();
    let state = activated();
    let (state, effects) = update(state, Msg::SelectTheme(7));
    assert_eq!(state.settings().theme, Theme::White);
    assert!(effects.is_empty());
}

#[test]
fn font_size_steps_by_one_pixel_and_persists_only_that_field() {
    init_logging();
    let state = activated();

    let (state, effects) = update(state, Msg::IncreaseFontSize);
    assert_eq!(state.settings().size_font, 19);
    assert_eq!(
        effects,
        vec![Effect::PersistSettings(SettingsDelta::size_font(19))]
    );

    let (state, effects) = update(state, Msg::DecreaseFontSize);
    assert_eq!(state.settings().size_font, 18);
    assert_eq!(
        effects,
        vec![Effect::PersistSettings(SettingsDelta::size_font(18))]
    );
}

#[test]
fn line_height_steps_by_a_tenth() {
    init_logging();
    let state = activated();

    let (state, effects) = update(state, Msg::EditLineHeight(LineHeightEdit::Increase));
    assert!((state.settings().line_height - 1.7).abs() < 1e-9);
    assert_eq!(effects.len(), 1);

    let (state, _) = update(state, Msg::EditLineHeight(LineHeightEdit::Decrease));
    assert!((state.settings().line_height - 1.6).abs() < 1e-9);
}

#[test]
fn popup_and_speed_reading_are_session_only() {
    init_logging();
    let state = activated();

    let (state, effects) = update(state, Msg::TogglePopup);
    assert!(state.view().popup_menu);
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::ToggleSpeedReading);
    assert!(state.view().speed_reading);
    assert!(effects.is_empty());
}

#[test]
fn stop_word_fade_toggles_between_raw_and_faded_body() {
    init_logging();
    let (state, _) = update(
        ReaderState::new(),
        Msg::ArticleExtracted {
            title: "T".to_string(),
            content: "<p>The reader</p>".to_string(),
        },
    );

    let (state, effects) = update(state, Msg::ToggleStopWordFade);
    assert!(effects.is_empty());
    let view = state.view();
    assert!(view.stop_word_fade);
    assert_eq!(
        view.body,
        "<p><span class=\"rr-stop\">The</span> reader</p>"
    );

    let (state, _) = update(state, Msg::ToggleStopWordFade);
    let view = state.view();
    assert!(!view.stop_word_fade);
    assert_eq!(view.body, "<p>The reader</p>");
}

#[test]
fn close_releases_page_styles_and_is_terminal() {
    init_logging();
    let state = activated();

    let (state, effects) = update(state, Msg::CloseReader);
    assert_eq!(state.phase(), Phase::Closed);
    assert!(!state.view().reader_view);
    assert_eq!(effects, vec![Effect::ReleasePageStyles]);

    let before = state.clone();
    let (state, effects) = update(state, Msg::IncreaseFontSize);
    assert!(effects.is_empty());
    let (state, effects2) = update(state, Msg::CloseReader);
    assert!(effects2.is_empty());
    assert_eq!(state.settings(), before.settings());
}

#[test]
fn dark_theme_swaps_icon_variants() {
    init_logging();
    let state = activated();
    assert_eq!(state.view().speed_icon, "images/icon-speed.png");

    let (state, _) = update(state, Msg::SelectTheme(2));
    let view = state.view();
    assert_eq!(view.theme_class, "theme-dark");
    assert_eq!(view.speed_icon, "images/icon-speed-light.png");
    assert_eq!(view.more_speed_icon, "images/icon-more-speed-light.png");
}
