// Integration tests for Fertil Match

use fertil_match::core::{Directory, MatchError, MatchSelector, SIMILARITY_CEILING, SIMILARITY_FLOOR};
use fertil_match::models::{MatchQuery, MatchResult};
use fertil_match::services::{BackendKind, DelegatedMatcher, ExecutionRouter};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

const MATCHER_BIN: &str = env!("CARGO_BIN_EXE_fertil-matcher");

fn builtin_directory() -> Arc<Directory> {
    Arc::new(Directory::builtin().expect("builtin directory"))
}

fn embedded_router() -> ExecutionRouter {
    ExecutionRouter::new(Arc::new(MatchSelector::with_random_scorer(
        builtin_directory(),
        Some(2024),
    )))
}

fn delegated_router() -> ExecutionRouter {
    ExecutionRouter::new(Arc::new(
        DelegatedMatcher::new(MATCHER_BIN).with_timeout(Duration::from_secs(10)),
    ))
}

/// Field name -> JSON type name
fn shape(result: &MatchResult) -> BTreeMap<String, &'static str> {
    let value = serde_json::to_value(result).unwrap();
    value
        .as_object()
        .unwrap()
        .iter()
        .map(|(key, value)| {
            let kind = match value {
                serde_json::Value::String(_) => "string",
                serde_json::Value::Number(_) => "number",
                serde_json::Value::Bool(_) => "bool",
                serde_json::Value::Null => "null",
                serde_json::Value::Array(_) => "array",
                serde_json::Value::Object(_) => "object",
            };
            (key.clone(), kind)
        })
        .collect()
}

#[tokio::test]
async fn test_sao_paulo_fiv_scenario() {
    let router = embedded_router();
    let result = router.select(&MatchQuery::new(30, "SP", "FIV")).await.unwrap();

    assert_eq!(result.specialty, "FIV");
    assert_eq!(result.city, "São Paulo");
    assert!(result.summary.contains(&result.name));
    assert!(result.summary.contains("São Paulo"));
    assert!(result.summary.contains("FIV"));
}

#[tokio::test]
async fn test_unknown_region_not_found() {
    let router = embedded_router();
    let err = router.select(&MatchQuery::new(30, "ZZ", "FIV")).await.unwrap_err();
    assert!(matches!(err, MatchError::NotFound { .. }));
}

#[test]
fn test_every_directory_pair_matches() {
    let directory = builtin_directory();
    let selector = MatchSelector::with_random_scorer(directory.clone(), None);

    for record in directory.records() {
        let query = MatchQuery::new(35, record.region.as_str(), record.specialty.as_str());
        let result = selector.select(&query).unwrap();

        assert_eq!(result.specialty, query.specialty);
        assert!(result.region.contains(&query.region));
        assert!(result.similarity >= SIMILARITY_FLOOR && result.similarity <= SIMILARITY_CEILING);
    }
}

#[test]
fn test_first_match_in_directory_order() {
    let selector = MatchSelector::with_random_scorer(builtin_directory(), None);

    let df = selector.select(&MatchQuery::new(30, "DF", "FIV")).unwrap();
    assert_eq!(df.name, "Dr. Capital");

    let rj = selector.select(&MatchQuery::new(30, "RJ", "FIV")).unwrap();
    assert_eq!(rj.name, "Dra. Carioca");
}

#[test]
fn test_summary_round_trips_fields() {
    let selector = MatchSelector::with_random_scorer(builtin_directory(), None);

    for _ in 0..50 {
        let result = selector.select(&MatchQuery::new(30, "PR", "Hormônios")).unwrap();
        let expected = format!(
            "{} - Especialista em {} em {} (similaridade: {:.2})",
            result.name, result.specialty, result.city, result.similarity
        );
        assert_eq!(result.summary, expected);
    }
}

#[tokio::test]
async fn test_backends_share_result_shape() {
    let query = MatchQuery::new(30, "SP", "FIV");

    let embedded = embedded_router().select(&query).await.unwrap();
    let delegated_router = delegated_router();
    assert_eq!(delegated_router.kind(), BackendKind::Delegated);
    let delegated = delegated_router.select(&query).await.unwrap();

    assert_eq!(shape(&embedded), shape(&delegated));
    assert_eq!(embedded.name, delegated.name);
    assert!(delegated.similarity >= SIMILARITY_FLOOR && delegated.similarity <= SIMILARITY_CEILING);
}

#[tokio::test]
async fn test_delegated_ranks_by_keywords() {
    // Two FIV entries in DF; the bundled matcher ranks instead of taking the first
    let result = delegated_router()
        .select(&MatchQuery::new(30, "DF", "FIV"))
        .await
        .unwrap();

    assert_eq!(result.specialty, "FIV");
    assert_eq!(result.region, "DF");
}

#[tokio::test]
async fn test_not_found_same_for_both_backends() {
    let query = MatchQuery::new(30, "ZZ", "FIV");
    let embedded = ExecutionRouter::new(Arc::new(MatchSelector::with_random_scorer(
        builtin_directory(),
        None,
    )));

    for router in [embedded, delegated_router()] {
        match router.select(&query).await.unwrap_err() {
            MatchError::NotFound { specialty, region } => {
                assert_eq!(specialty, "FIV");
                assert_eq!(region, "ZZ");
            }
            other => panic!("{} backend: expected NotFound, got {:?}", router.kind(), other),
        }
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_delegated_stderr_leaves_embedded_untouched() {
    let directory = builtin_directory();
    let embedded = ExecutionRouter::new(Arc::new(MatchSelector::with_random_scorer(
        directory.clone(),
        None,
    )));
    let noisy = ExecutionRouter::new(Arc::new(DelegatedMatcher::new("sh").with_args(vec![
        "-c".to_string(),
        "echo 'warning: deprecated' >&2".to_string(),
        "matcher".to_string(),
    ])));

    let err = noisy.select(&MatchQuery::new(30, "SP", "FIV")).await.unwrap_err();
    assert!(matches!(err, MatchError::ExternalMatchError(ref m) if m == "warning: deprecated"));

    assert_eq!(directory.len(), 57);
    let result = embedded.select(&MatchQuery::new(30, "SP", "FIV")).await.unwrap();
    assert_eq!(result.name, "Dr. Silva");
}
