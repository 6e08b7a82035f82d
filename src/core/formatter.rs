use crate::models::{MatchResult, SpecialistRecord};

/// Render the user-facing recommendation line
///
/// The external matcher's output is re-rendered through this function too,
/// so both backends produce byte-identical summaries for the same fields.
pub fn format_summary(result: &MatchResult) -> String {
    format!(
        "{} - Especialista em {} em {} (similaridade: {:.2})",
        result.name, result.specialty, result.city, result.similarity
    )
}

/// Build a complete result for a selected specialist
pub fn build_result(record: &SpecialistRecord, similarity: f64) -> MatchResult {
    let mut result = MatchResult {
        name: record.name.clone(),
        specialty: record.specialty.clone(),
        region: record.region.clone(),
        city: record.city.clone(),
        similarity,
        latitude: record.coordinates.latitude,
        longitude: record.coordinates.longitude,
        bio: record.bio.clone(),
        summary: String::new(),
    };
    result.summary = format_summary(&result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRange, Coordinates};

    fn silva() -> SpecialistRecord {
        SpecialistRecord {
            name: "Dr. Silva".to_string(),
            specialty: "FIV".to_string(),
            region: "SP".to_string(),
            city: "São Paulo".to_string(),
            age_range: AgeRange { min: 25, max: 45 },
            coordinates: Coordinates { latitude: -23.5505, longitude: -46.6333 },
            bio: "Especialista em FIV em São Paulo.".to_string(),
            keywords: vec!["FIV".to_string()],
        }
    }

    #[test]
    fn test_format_summary() {
        let result = build_result(&silva(), 0.8765);
        assert_eq!(
            result.summary,
            "Dr. Silva - Especialista em FIV em São Paulo (similaridade: 0.88)"
        );
    }

    #[test]
    fn test_build_result_copies_display_fields() {
        let record = silva();
        let result = build_result(&record, 0.7);

        assert_eq!(result.name, record.name);
        assert_eq!(result.region, "SP");
        assert_eq!(result.latitude, -23.5505);
        assert_eq!(result.longitude, -46.6333);
        assert_eq!(result.bio, record.bio);
    }

    #[test]
    fn test_format_is_deterministic() {
        let result = build_result(&silva(), 0.61);
        assert_eq!(format_summary(&result), format_summary(&result.clone()));
    }
}
