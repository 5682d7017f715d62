use thiserror::Error;

/// One extracted article. Both fields are non-empty on success; extraction
/// either fully succeeds or fails, never produces a partial article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    /// Cleaned markup, safe to hand to the renderer as-is.
    pub content: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The document has no body or no visible text at all.
    #[error("document is empty")]
    EmptyDocument,
    /// No candidate container cleared the minimum content score.
    #[error("no article content found")]
    NoContent,
}
