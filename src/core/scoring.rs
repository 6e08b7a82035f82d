use std::collections::HashMap;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{MatchQuery, SpecialistRecord};

/// Lowest similarity ever reported to callers
pub const SIMILARITY_FLOOR: f64 = 0.60;

/// Highest similarity ever reported to callers
pub const SIMILARITY_CEILING: f64 = 0.99;

/// Scores how well a candidate fits a query
///
/// Implementations return a raw value in `[0, 1]`; the selector maps it into
/// the reported similarity band with [`to_similarity`].
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, query: &MatchQuery, candidate: &SpecialistRecord) -> f64;
}

/// Map a raw `[0, 1]` score linearly into `[SIMILARITY_FLOOR, SIMILARITY_CEILING]`
///
/// Out-of-range and non-finite inputs are clamped to the band edges.
#[inline]
pub fn to_similarity(raw: f64) -> f64 {
    let raw = if raw.is_finite() { raw.clamp(0.0, 1.0) } else { 0.0 };
    (SIMILARITY_FLOOR + (SIMILARITY_CEILING - SIMILARITY_FLOOR) * raw)
        .clamp(SIMILARITY_FLOOR, SIMILARITY_CEILING)
}

/// Placeholder scorer: uniform draw, ignores query and candidate
///
/// The value carries no meaning beyond display. Seed it in tests.
pub struct RandomScorer {
    rng: Mutex<StdRng>,
}

impl RandomScorer {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Seeded when a seed is configured, entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl SimilarityScorer for RandomScorer {
    fn score(&self, _query: &MatchQuery, _candidate: &SpecialistRecord) -> f64 {
        // A poisoned RNG is still a valid RNG
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0.0..=1.0)
    }
}

/// Blend weights for [`KeywordScorer`]
#[derive(Debug, Clone, Copy)]
pub struct KeywordWeights {
    pub keywords: f64,
    pub location: f64,
    pub age: f64,
}

impl Default for KeywordWeights {
    fn default() -> Self {
        Self {
            keywords: 0.6,
            location: 0.3,
            age: 0.1,
        }
    }
}

/// Content-based scorer over the candidate keyword vector
///
/// score = (
///     keyword_cosine * 0.6 +   # query terms vs candidate keywords
///     location * 0.3 +         # 1.0 when the region matches, else 0.3
///     age * 0.1                # 1.0 inside the served range, else 0.5
/// )
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer {
    weights: KeywordWeights,
}

impl KeywordScorer {
    pub fn new(weights: KeywordWeights) -> Self {
        Self { weights }
    }
}

impl SimilarityScorer for KeywordScorer {
    fn score(&self, query: &MatchQuery, candidate: &SpecialistRecord) -> f64 {
        let query_terms = term_frequencies(&format!(
            "{} {} idade{}",
            query.specialty, query.region, query.age
        ));
        let candidate_terms = term_frequencies(&candidate.keywords.join(" "));
        let keyword_score = cosine_similarity(&query_terms, &candidate_terms);

        let location_score = if candidate
            .region
            .to_uppercase()
            .contains(&query.region.to_uppercase())
        {
            1.0
        } else {
            0.3
        };

        let age_score = if candidate.age_range.contains(query.age) { 1.0 } else { 0.5 };

        let total_weight = self.weights.keywords + self.weights.location + self.weights.age;
        if total_weight <= 0.0 {
            return 0.0;
        }

        let blended = keyword_score * self.weights.keywords
            + location_score * self.weights.location
            + age_score * self.weights.age;

        (blended / total_weight).clamp(0.0, 1.0)
    }
}

/// Lowercased word counts; words are alphanumeric runs of two or more chars
fn term_frequencies(text: &str) -> HashMap<String, f64> {
    let mut terms = HashMap::new();
    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= 2)
    {
        *terms.entry(word.to_lowercase()).or_insert(0.0) += 1.0;
    }
    terms
}

#[inline]
fn cosine_similarity(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, weight)| b.get(term).map(|other| weight * other))
        .sum();
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
