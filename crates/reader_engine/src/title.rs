use scraper::{ElementRef, Html, Selector};

use crate::score::collapsed_text;

const FALLBACK_TITLE: &str = "Untitled";

/// Deterministic title precedence: first heading inside the article root,
/// then the document `<title>`, then a fixed fallback.
pub(crate) fn resolve_title(document: &Html, root: ElementRef<'_>) -> String {
    for node in root.descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        if matches!(element.value().name(), "h1" | "h2") {
            let heading = collapsed_text(element);
            if !heading.is_empty() {
                return heading;
            }
        }
    }

    let title_sel = Selector::parse("title").ok();
    let document_title = title_sel
        .as_ref()
        .and_then(|sel| document.select(sel).next())
        .map(collapsed_text)
        .filter(|t| !t.is_empty());

    document_title.unwrap_or_else(|| FALLBACK_TITLE.to_string())
}
