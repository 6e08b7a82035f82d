use crate::models::{MatchQuery, SpecialistRecord};

/// Specialty must be an exact, case-sensitive match
#[inline]
pub fn matches_specialty(record: &SpecialistRecord, specialty: &str) -> bool {
    record.specialty == specialty
}

/// Region matches when the record's region contains the requested code
///
/// Plain substring containment: prefixes and exact codes both match, and an
/// empty region matches everything. No case folding or diacritic handling.
#[inline]
pub fn matches_region(record: &SpecialistRecord, region: &str) -> bool {
    record.region.contains(region)
}

#[inline]
pub fn matches_query_fields(record: &SpecialistRecord, specialty: &str, region: &str) -> bool {
    matches_specialty(record, specialty) && matches_region(record, region)
}

/// Directory filter for a full query. Age is intentionally not consulted.
#[inline]
pub fn matches_query(record: &SpecialistRecord, query: &MatchQuery) -> bool {
    matches_query_fields(record, &query.specialty, &query.region)
}
