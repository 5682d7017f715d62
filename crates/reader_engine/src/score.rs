use scraper::ElementRef;

use crate::CleaningFlags;

/// Blocks with less visible text than this never count as paragraphs.
pub(crate) const MIN_PARAGRAPH_CHARS: usize = 25;

/// Class/id fragments that mark a subtree as almost certainly boilerplate.
const UNLIKELY_PATTERNS: &[&str] = &[
    "banner", "combx", "comment", "community", "disqus", "extra", "foot", "header", "menu",
    "modal", "pager", "pagination", "popup", "remark", "rss", "shoutbox", "sidebar", "skyscraper",
    "sponsor",
];

/// Fragments that rescue an otherwise unlikely candidate.
const MAYBE_CANDIDATE_PATTERNS: &[&str] = &["and", "article", "body", "column", "main", "shadow"];

const POSITIVE_PATTERNS: &[&str] = &[
    "article", "blog", "body", "content", "entry", "hentry", "main", "page", "post", "story",
    "text",
];

const NEGATIVE_PATTERNS: &[&str] = &[
    "combx", "comment", "contact", "foot", "footer", "footnote", "masthead", "media", "meta",
    "outbrain", "promo", "related", "scroll", "shoutbox", "sidebar", "sponsor", "shopping",
    "tags", "tool", "widget",
];

/// Class/id fragments stripped from the article root no matter what.
const AD_PATTERNS: &[&str] = &["ad-", "adsense", "advert", "doubleclick", "outbrain", "sponsor"];

fn class_and_id(element: ElementRef<'_>) -> String {
    let el = element.value();
    let mut hint = String::new();
    if let Some(class) = el.attr("class") {
        hint.push_str(class);
    }
    hint.push(' ');
    if let Some(id) = el.attr("id") {
        hint.push_str(id);
    }
    hint.make_ascii_lowercase();
    hint
}

fn matches_any(hint: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| hint.contains(p))
}

/// True for subtrees whose class/id marks them as navigation, comments or
/// similar boilerplate, with no rescuing "article-like" fragment.
pub(crate) fn is_unlikely_candidate(element: ElementRef<'_>) -> bool {
    let hint = class_and_id(element);
    matches_any(&hint, UNLIKELY_PATTERNS) && !matches_any(&hint, MAYBE_CANDIDATE_PATTERNS)
}

pub(crate) fn is_ad_like(element: ElementRef<'_>) -> bool {
    matches_any(&class_and_id(element), AD_PATTERNS)
}

/// Score adjustment derived from class/id naming conventions.
pub(crate) fn class_weight(element: ElementRef<'_>, flags: CleaningFlags) -> f64 {
    if !flags.weight_classes {
        return 0.0;
    }
    let hint = class_and_id(element);
    let mut weight = 0.0;
    if matches_any(&hint, NEGATIVE_PATTERNS) {
        weight -= 25.0;
    }
    if matches_any(&hint, POSITIVE_PATTERNS) {
        weight += 25.0;
    }
    weight
}

/// Base score a container starts with, from tag semantics alone.
pub(crate) fn tag_score(tag: &str) -> f64 {
    match tag {
        "div" | "article" | "section" | "main" => 5.0,
        "pre" | "td" | "blockquote" => 3.0,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form" => -3.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => -5.0,
        _ => 0.0,
    }
}

/// Visible text of a subtree with whitespace runs collapsed to single spaces.
pub(crate) fn collapsed_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ratio of anchor-enclosed text to total text within a subtree. Navigation
/// blocks sit close to 1.0, prose close to 0.0.
pub(crate) fn link_density(element: ElementRef<'_>) -> f64 {
    let total = collapsed_text(element).chars().count();
    if total == 0 {
        return 0.0;
    }
    let mut linked = 0usize;
    for node in element.descendants() {
        if let Some(child) = ElementRef::wrap(node) {
            if child.value().name() == "a" {
                linked += collapsed_text(child).chars().count();
            }
        }
    }
    linked.min(total) as f64 / total as f64
}

/// Number of `img` descendants, used by the conditional cleaning pass to
/// tell illustration blocks from genuinely empty ones.
pub(crate) fn image_count(element: ElementRef<'_>) -> usize {
    element
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "img")
        .count()
}
