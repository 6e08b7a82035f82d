// Unit tests for Fertil Match

use fertil_match::config::BackendSetting;
use fertil_match::core::{
    filters::{matches_query, matches_region},
    format_summary, to_similarity, KeywordScorer, RandomScorer, SimilarityScorer,
    SIMILARITY_CEILING, SIMILARITY_FLOOR,
};
use fertil_match::models::{AgeRange, AlertLevel, Coordinates, MatchQuery, SpecialistRecord};
use fertil_match::services::{alert_level, detect_backend, parse_output, BackendKind, SERVERLESS_ENV_VAR};

fn create_record(region: &str, specialty: &str) -> SpecialistRecord {
    SpecialistRecord {
        name: "Dra. Teste".to_string(),
        specialty: specialty.to_string(),
        region: region.to_string(),
        city: "Campinas".to_string(),
        age_range: AgeRange { min: 25, max: 50 },
        coordinates: Coordinates {
            latitude: -22.9099,
            longitude: -47.0626,
        },
        bio: "Reprodução em Campinas.".to_string(),
        keywords: vec!["hormonios".to_string(), "SP".to_string(), "Campinas".to_string()],
    }
}

#[test]
fn test_filter_requires_both_fields() {
    let record = create_record("SP", "Hormônios");

    assert!(matches_query(&record, &MatchQuery::new(30, "SP", "Hormônios")));
    assert!(!matches_query(&record, &MatchQuery::new(30, "SP", "FIV")));
    assert!(!matches_query(&record, &MatchQuery::new(30, "RJ", "Hormônios")));
}

#[test]
fn test_region_containment_not_adjacency() {
    let record = create_record("SP", "FIV");
    // "P" is contained in "SP"; neighbouring states are not
    assert!(matches_region(&record, "P"));
    assert!(!matches_region(&record, "MG"));
}

#[test]
fn test_seeded_scores_reproducible_and_bounded() {
    let record = create_record("SP", "FIV");
    let query = MatchQuery::new(30, "SP", "FIV");

    let first: Vec<f64> = {
        let scorer = RandomScorer::seeded(99);
        (0..20).map(|_| to_similarity(scorer.score(&query, &record))).collect()
    };
    let second: Vec<f64> = {
        let scorer = RandomScorer::seeded(99);
        (0..20).map(|_| to_similarity(scorer.score(&query, &record))).collect()
    };

    assert_eq!(first, second);
    assert!(first
        .iter()
        .all(|s| *s >= SIMILARITY_FLOOR && *s <= SIMILARITY_CEILING));
}

#[test]
fn test_keyword_score_within_unit_interval() {
    let scorer = KeywordScorer::default();
    let record = create_record("SP", "Hormônios");

    for age in [-1, 0, 30, 120] {
        let raw = scorer.score(&MatchQuery::new(age, "SP", "Hormônios"), &record);
        assert!((0.0..=1.0).contains(&raw), "score {} out of range", raw);
    }
}

#[test]
fn test_parse_output_renders_summary() {
    let stdout = r#"{"name": "Dr. Santos", "specialty": "Hormônios", "region": "SP", "city": "Campinas", "similarity": 0.9, "latitude": -22.9099, "longitude": -47.0626, "bio": "Reprodução em Campinas."}"#;
    let result = parse_output(stdout.as_bytes()).unwrap();

    assert_eq!(result.summary, format_summary(&result));
    assert_eq!(
        result.summary,
        "Dr. Santos - Especialista em Hormônios em Campinas (similaridade: 0.90)"
    );
}

#[test]
fn test_backend_selection_from_environment() {
    let lambda = |key: &str| (key == SERVERLESS_ENV_VAR).then(|| "api".to_string());
    let local = |_: &str| None::<String>;

    assert_eq!(detect_backend(BackendSetting::Auto, lambda), BackendKind::Embedded);
    assert_eq!(detect_backend(BackendSetting::Auto, local), BackendKind::Delegated);
}

#[test]
fn test_supply_alert_levels() {
    assert_eq!(alert_level(15, 20), AlertLevel::Low);
    assert_eq!(alert_level(50, 20), AlertLevel::Ok);
}
