use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::ElementRef;

use crate::score::{
    class_weight, collapsed_text, image_count, is_ad_like, link_density, MIN_PARAGRAPH_CHARS,
};
use crate::CleaningFlags;

/// Elements that never belong in extracted article content.
const ALWAYS_STRIP: &[&str] = &[
    "script", "style", "noscript", "template", "link", "meta", "base", "nav", "aside", "footer",
    "form", "button", "input", "select", "textarea", "option", "iframe", "object", "embed",
    "dialog",
];

/// Containers the conditional cleaning pass is allowed to drop wholesale.
const CONDITIONAL_TAGS: &[&str] = &[
    "table", "ul", "ol", "div", "section", "figure", "figcaption", "fieldset",
];

const VOID_TAGS: &[&str] = &[
    "area", "br", "col", "hr", "img", "source", "track", "wbr",
];

/// Attributes carried over into the cleaned markup; everything else
/// (event handlers, styles, framework junk) is dropped.
const KEPT_ATTRS: &[&str] = &["href", "src", "srcset", "alt", "title", "colspan", "rowspan"];

/// Serializes the inner markup of the selected article root, stripping
/// script/style/navigation/ad-pattern elements unconditionally and, when the
/// conditional flag is on, also subtrees that look like boilerplate.
pub(crate) fn serialize_cleaned(root: ElementRef<'_>, flags: CleaningFlags) -> String {
    let mut out = String::new();
    for child in root.children() {
        write_node(child, flags, &mut out);
    }
    out
}

fn write_node(node: NodeRef<'_, Node>, flags: CleaningFlags, out: &mut String) {
    match node.value() {
        Node::Text(text) => escape_text(text, out),
        Node::Element(_) => {
            if let Some(element) = ElementRef::wrap(node) {
                write_element(element, flags, out);
            }
        }
        // Comments, doctypes and processing instructions never survive.
        _ => {}
    }
}

fn write_element(element: ElementRef<'_>, flags: CleaningFlags, out: &mut String) {
    let tag = element.value().name();
    if ALWAYS_STRIP.contains(&tag) || is_ad_like(element) {
        return;
    }
    if flags.clean_conditionally
        && CONDITIONAL_TAGS.contains(&tag)
        && looks_like_boilerplate(element, flags)
    {
        return;
    }

    out.push('<');
    out.push_str(tag);
    for (name, value) in element.value().attrs() {
        if KEPT_ATTRS.contains(&name) {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attr(value, out);
            out.push('"');
        }
    }
    out.push('>');

    if VOID_TAGS.contains(&tag) {
        return;
    }
    for child in element.children() {
        write_node(child, flags, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// The aggressive heuristic behind the conditional-cleaning flag. Known to
/// misclassify captions and short trailing paragraphs, which is exactly why
/// the reader runs with the flag off.
fn looks_like_boilerplate(element: ElementRef<'_>, flags: CleaningFlags) -> bool {
    let weight = class_weight(element, flags);
    if weight < 0.0 {
        return true;
    }

    let text = collapsed_text(element);
    if text.matches(',').count() >= 10 {
        // Comma-rich blocks read like prose; keep them.
        return false;
    }
    if text.chars().count() < MIN_PARAGRAPH_CHARS && image_count(element) == 0 {
        return true;
    }
    if link_density(element) > 0.33 && weight < 25.0 {
        return true;
    }
    false
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
