use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{BackendSetting, Settings};
use crate::core::{format_summary, Directory, MatchError, MatchSelector, RandomScorer};
use crate::models::{MatchQuery, MatchResult};
use crate::services::external::DelegatedMatcher;

/// Set by the managed serverless runtime for every invocation
pub const SERVERLESS_ENV_VAR: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// Concrete matching backend in use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Embedded,
    Delegated,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Embedded => write!(f, "embedded"),
            BackendKind::Delegated => write!(f, "delegated"),
        }
    }
}

/// Pick the backend from configuration and the process environment
///
/// Under `auto`, a serverless invocation runs the embedded selector (the
/// external matcher is not deployed there); anything else delegates.
pub fn detect_backend<F>(setting: BackendSetting, env: F) -> BackendKind
where
    F: Fn(&str) -> Option<String>,
{
    match setting {
        BackendSetting::Embedded => BackendKind::Embedded,
        BackendSetting::Delegated => BackendKind::Delegated,
        BackendSetting::Auto => match env(SERVERLESS_ENV_VAR) {
            Some(name) if !name.is_empty() => BackendKind::Embedded,
            _ => BackendKind::Delegated,
        },
    }
}

/// True when `program` names a file path that does not exist
///
/// Bare names are resolved through `PATH` at spawn time and are not checked.
pub fn program_missing(program: &Path) -> bool {
    program.components().count() > 1 && !program.exists()
}

/// One matching capability, two interchangeable implementations
#[async_trait]
pub trait SpecialistMatcher: Send + Sync {
    async fn select(&self, query: &MatchQuery) -> Result<MatchResult, MatchError>;

    fn kind(&self) -> BackendKind;
}

#[async_trait]
impl SpecialistMatcher for MatchSelector {
    async fn select(&self, query: &MatchQuery) -> Result<MatchResult, MatchError> {
        MatchSelector::select(self, query)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Embedded
    }
}

#[async_trait]
impl SpecialistMatcher for DelegatedMatcher {
    async fn select(&self, query: &MatchQuery) -> Result<MatchResult, MatchError> {
        self.invoke(query).await
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Delegated
    }
}

/// Single entry point for matching, whatever backend serves it
///
/// The backend is fixed at construction and never re-evaluated.
#[derive(Clone)]
pub struct ExecutionRouter {
    backend: Arc<dyn SpecialistMatcher>,
}

impl ExecutionRouter {
    pub fn new(backend: Arc<dyn SpecialistMatcher>) -> Self {
        Self { backend }
    }

    /// Build the router for this process
    ///
    /// Reads the serverless signal from the real environment exactly once.
    pub fn from_settings(settings: &Settings, directory: Arc<Directory>) -> Self {
        let kind = detect_backend(settings.matching.backend, |key| std::env::var(key).ok());

        let backend: Arc<dyn SpecialistMatcher> = match kind {
            BackendKind::Embedded => Arc::new(MatchSelector::new(
                directory,
                Arc::new(RandomScorer::from_seed(settings.matching.seed)),
                settings.matching.strategy,
            )),
            BackendKind::Delegated => {
                let current_exe = std::env::current_exe().ok();
                let program = settings.delegated.resolve_program(current_exe.as_deref());
                if program_missing(&program) {
                    tracing::warn!(
                        "External matcher {} not found; recommendations will fail until it is built",
                        program.display()
                    );
                }
                Arc::new(
                    DelegatedMatcher::new(program)
                        .with_args(settings.delegated.args.clone())
                        .with_timeout(Duration::from_millis(settings.delegated.timeout_ms)),
                )
            }
        };

        Self::new(backend)
    }

    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub async fn select(&self, query: &MatchQuery) -> Result<MatchResult, MatchError> {
        let kind = self.backend.kind();
        tracing::info!(
            "Matching via {} backend: age={}, region={}, specialty={}",
            kind,
            query.age,
            query.region,
            query.specialty
        );

        match self.backend.select(query).await {
            Ok(mut result) => {
                // Both backends already agree; re-render so the summary always
                // follows this process's formatter
                result.summary = format_summary(&result);
                Ok(result)
            }
            Err(MatchError::NotFound { specialty, region }) => {
                tracing::info!("No specialist for {} in {}", specialty, region);
                Err(MatchError::NotFound { specialty, region })
            }
            Err(e) => {
                tracing::error!("{} backend failed: {}", kind, e);
                Err(e)
            }
        }
    }
}
