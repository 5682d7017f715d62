//! Reader engine: heuristic article extraction from a page snapshot.
mod clean;
mod extract;
mod flags;
mod score;
mod snapshot;
mod title;
mod types;

pub use extract::{ContentScoreExtractor, Extractor, MIN_CANDIDATE_SCORE};
pub use flags::CleaningFlags;
pub use snapshot::DocumentSnapshot;
pub use types::{Article, ExtractError};
