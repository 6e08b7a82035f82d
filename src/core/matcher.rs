use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::core::{
    directory::Directory,
    formatter::build_result,
    scoring::{to_similarity, RandomScorer, SimilarityScorer},
};
use crate::models::{MatchQuery, MatchResult, SpecialistRecord};

/// Errors a match request can end in
///
/// All of them are local to one request.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Nenhum especialista encontrado para {specialty} em {region}")]
    NotFound { specialty: String, region: String },

    #[error("External matcher failed: {0}")]
    ExternalMatchError(String),

    #[error("External matcher did not finish within {0:?}")]
    ExternalMatchTimeout(Duration),

    #[error("External matcher produced malformed output: {0}")]
    MalformedExternalOutput(String),
}

impl MatchError {
    fn not_found(query: &MatchQuery) -> Self {
        MatchError::NotFound {
            specialty: query.specialty.clone(),
            region: query.region.clone(),
        }
    }

    /// Malformed output counts as an external failure
    pub fn is_external_failure(&self) -> bool {
        matches!(
            self,
            MatchError::ExternalMatchError(_) | MatchError::MalformedExternalOutput(_)
        )
    }
}

/// How one specialist is picked among the filtered candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// First candidate in directory order; the score is only attached afterwards
    #[default]
    FirstMatch,
    /// Score every candidate and keep the best (earliest wins ties)
    HighestScore,
}

/// In-process match selector
///
/// # Pipeline Stages
/// 1. Specialty + region filter over the directory
/// 2. Selection (first match, or best score)
/// 3. Similarity scoring mapped into the reported band
/// 4. Result and summary rendering
#[derive(Clone)]
pub struct MatchSelector {
    directory: Arc<Directory>,
    scorer: Arc<dyn SimilarityScorer>,
    strategy: SelectionStrategy,
}

impl MatchSelector {
    pub fn new(
        directory: Arc<Directory>,
        scorer: Arc<dyn SimilarityScorer>,
        strategy: SelectionStrategy,
    ) -> Self {
        Self {
            directory,
            scorer,
            strategy,
        }
    }

    /// First-match selection with the placeholder random score
    pub fn with_random_scorer(directory: Arc<Directory>, seed: Option<u64>) -> Self {
        Self::new(
            directory,
            Arc::new(RandomScorer::from_seed(seed)),
            SelectionStrategy::FirstMatch,
        )
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Every candidate passing the filter, in directory order
    ///
    /// `select` only returns one of these; callers wanting to rank them
    /// themselves can start here.
    pub fn candidates(&self, query: &MatchQuery) -> Vec<&SpecialistRecord> {
        self.directory.lookup(&query.specialty, &query.region)
    }

    /// Pick one specialist for the query
    ///
    /// # Errors
    /// `MatchError::NotFound` when no entry passes the filter.
    pub fn select(&self, query: &MatchQuery) -> Result<MatchResult, MatchError> {
        let candidates = self.candidates(query);

        let (record, similarity) = match self.strategy {
            SelectionStrategy::FirstMatch => {
                let record = *candidates
                    .first()
                    .ok_or_else(|| MatchError::not_found(query))?;
                (record, to_similarity(self.scorer.score(query, record)))
            }
            SelectionStrategy::HighestScore => candidates
                .into_iter()
                .map(|record| (record, to_similarity(self.scorer.score(query, record))))
                .fold(None::<(&SpecialistRecord, f64)>, |best, (record, similarity)| match best {
                    Some((_, best_similarity)) if best_similarity >= similarity => best,
                    _ => Some((record, similarity)),
                })
                .ok_or_else(|| MatchError::not_found(query))?,
        };

        tracing::debug!(
            "Selected {} for {}/{} (similarity {:.2})",
            record.name,
            query.specialty,
            query.region,
            similarity
        );

        Ok(build_result(record, similarity))
    }
}
