use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use reader_bridge::BridgeClient;
use reader_core::ReaderViewModel;

const MAX_BODY_PREVIEW: usize = 600;

/// Terminal stand-in for the extension's HTML-to-UI-tree renderer: a pure
/// projection of the view model, nothing else.
pub fn print_view(view: &ReaderViewModel, client: &Arc<Mutex<BridgeClient>>) {
    if let Some(error) = &view.error {
        println!("== Error Loading Reader ==");
        println!("{error}");
        println!("(reload the page to retry)");
        return;
    }
    if !view.reader_view {
        println!("(reader closed)");
        return;
    }

    let (speed_icon, more_speed_icon) = {
        let mut client = match client.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Empty string here just means a missing icon; the view still paints.
        (
            client.resolve_url(view.speed_icon),
            client.resolve_url(view.more_speed_icon),
        )
    };

    println!("== {} ==", view.title);
    println!(
        "{} | {}px / {:.1}em / weight {} | width {}px",
        view.theme_class, view.font_size_px, view.line_height_em, view.font_weight, view.wrapper_width
    );
    println!(
        "popup: {} | speed reading: {} | stop-word fade: {} | icons: [{speed_icon}] [{more_speed_icon}]",
        on_off(view.popup_menu),
        on_off(view.speed_reading),
        on_off(view.stop_word_fade),
    );
    println!("{}", preview(&view.body));
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

const TRUNCATION_MARKER: &str = " [truncated]";

/// Clips long bodies at a character boundary and marks the cut, so a clipped
/// preview is never mistaken for the full extraction output.
fn preview(body: &str) -> Cow<'_, str> {
    if body.len() <= MAX_BODY_PREVIEW {
        return Cow::Borrowed(body);
    }
    let mut end = MAX_BODY_PREVIEW;
    while end > 0 && !body.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}{TRUNCATION_MARKER}", &body[..end]))
}

#[cfg(test)]
mod tests {
    use super::{preview, MAX_BODY_PREVIEW, TRUNCATION_MARKER};

    #[test]
    fn short_bodies_pass_through_unmarked() {
        let body = "<p>Short enough</p>";
        assert_eq!(preview(body), body);
    }

    #[test]
    fn clipped_bodies_carry_the_truncation_marker() {
        let body = "x".repeat(MAX_BODY_PREVIEW + 100);
        let clipped = preview(&body);
        assert!(clipped.ends_with(TRUNCATION_MARKER));
        assert_eq!(clipped.len(), MAX_BODY_PREVIEW + TRUNCATION_MARKER.len());
    }

    #[test]
    fn clipping_respects_multibyte_boundaries() {
        // One ascii char then 3-byte chars, so the byte limit falls
        // mid-character and the cut has to back up to a boundary.
        let body = format!("a{}", "€".repeat(MAX_BODY_PREVIEW));
        let clipped = preview(&body);
        assert!(clipped.ends_with(TRUNCATION_MARKER));
        let kept = clipped.strip_suffix(TRUNCATION_MARKER).unwrap();
        assert!(kept.len() < MAX_BODY_PREVIEW);
        assert!(kept.is_char_boundary(kept.len()));
    }
}
