// Core algorithm exports
pub mod directory;
pub mod filters;
pub mod formatter;
pub mod matcher;
pub mod scoring;

pub use directory::{Directory, DirectoryError};
pub use filters::{matches_query, matches_region, matches_specialty};
pub use formatter::{build_result, format_summary};
pub use matcher::{MatchError, MatchSelector, SelectionStrategy};
pub use scoring::{
    to_similarity, KeywordScorer, KeywordWeights, RandomScorer, SimilarityScorer,
    SIMILARITY_CEILING, SIMILARITY_FLOOR,
};
