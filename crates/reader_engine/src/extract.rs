use std::collections::HashMap;

use ego_tree::NodeId;
use reader_logging::reader_debug;
use scraper::{ElementRef, Html, Selector};

use crate::score::{
    class_weight, collapsed_text, is_unlikely_candidate, link_density, tag_score,
    MIN_PARAGRAPH_CHARS,
};
use crate::{clean, title, Article, CleaningFlags, DocumentSnapshot, ExtractError};

/// Scaled score a container must reach to qualify as the article root.
pub const MIN_CANDIDATE_SCORE: f64 = 10.0;

pub trait Extractor: Send + Sync {
    fn extract(
        &self,
        snapshot: &DocumentSnapshot,
        flags: CleaningFlags,
    ) -> Result<Article, ExtractError>;
}

/// Heuristic content-scoring extractor:
/// - scores paragraph-like blocks by text length, punctuation and tag
///   semantics
/// - propagates scores up the ancestor chain so paragraph clusters lift
///   their shared container
/// - penalizes link-heavy containers (navigation reads as links, prose
///   doesn't)
/// - strips boilerplate from the winning subtree per the cleaning flags.
///
/// Pure function of snapshot and flags: same input, same output, no retries.
#[derive(Debug, Default)]
pub struct ContentScoreExtractor;

impl Extractor for ContentScoreExtractor {
    fn extract(
        &self,
        snapshot: &DocumentSnapshot,
        flags: CleaningFlags,
    ) -> Result<Article, ExtractError> {
        let document = snapshot.document();
        let body = find_body(document).ok_or(ExtractError::EmptyDocument)?;
        if collapsed_text(body).is_empty() {
            return Err(ExtractError::EmptyDocument);
        }

        let scores = score_candidates(body, flags);
        let root = select_article_root(body, &scores).ok_or(ExtractError::NoContent)?;

        let content = clean::serialize_cleaned(root, flags);
        if content.trim().is_empty() {
            // Cleaning hollowed the winner out entirely; treat as no article
            // rather than returning a degenerate empty one.
            return Err(ExtractError::NoContent);
        }

        let title = title::resolve_title(document, root);
        Ok(Article { title, content })
    }
}

fn find_body(document: &Html) -> Option<ElementRef<'_>> {
    let body_sel = Selector::parse("body").ok()?;
    document.select(&body_sel).next()
}

fn is_paragraph_like(tag: &str) -> bool {
    matches!(tag, "p" | "td" | "pre" | "blockquote")
}

/// Walks the body once, scoring each qualifying paragraph-like block and
/// handing its score to the parent (full) and grandparent (half).
fn score_candidates(body: ElementRef<'_>, flags: CleaningFlags) -> HashMap<NodeId, f64> {
    let mut scores: HashMap<NodeId, f64> = HashMap::new();

    for node in body.descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        if !is_paragraph_like(element.value().name()) {
            continue;
        }
        if flags.strip_unlikelys && is_unlikely_candidate(element) {
            continue;
        }

        let text = collapsed_text(element);
        let chars = text.chars().count();
        if chars < MIN_PARAGRAPH_CHARS {
            continue;
        }

        let mut content_score = 1.0;
        content_score += text.matches(',').count() as f64;
        content_score += (chars as f64 / 100.0).min(3.0);

        let mut share = content_score;
        let mut cursor = node.parent();
        for _ in 0..2 {
            let Some(parent_node) = cursor else {
                break;
            };
            if let Some(parent) = ElementRef::wrap(parent_node) {
                if parent.value().name() == "html" {
                    break;
                }
                let entry = scores
                    .entry(parent_node.id())
                    .or_insert_with(|| tag_score(parent.value().name()) + class_weight(parent, flags));
                *entry += share;
            }
            share /= 2.0;
            cursor = parent_node.parent();
        }
    }

    scores
}

/// Picks the highest-scoring container after the link-density scaling.
/// Traverses in document order so ties resolve deterministically.
fn select_article_root<'a>(
    body: ElementRef<'a>,
    scores: &HashMap<NodeId, f64>,
) -> Option<ElementRef<'a>> {
    let mut best: Option<(ElementRef<'a>, f64)> = None;

    for node in body.descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        let Some(&raw) = scores.get(&node.id()) else {
            continue;
        };
        let scaled = raw * (1.0 - link_density(element));
        if scaled < MIN_CANDIDATE_SCORE {
            continue;
        }
        if best.map_or(true, |(_, top)| scaled > top) {
            best = Some((element, scaled));
        }
    }

    if let Some((element, scaled)) = best {
        reader_debug!(
            "article root <{}> selected with score {:.1}",
            element.value().name(),
            scaled
        );
    }
    best.map(|(element, _)| element)
}
