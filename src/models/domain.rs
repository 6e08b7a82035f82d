use serde::{Deserialize, Serialize};

/// Inclusive age bounds a specialist serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    /// Negative ages are never inside a range
    pub fn contains(&self, age: i32) -> bool {
        u32::try_from(age)
            .map(|age| age >= self.min && age <= self.max)
            .unwrap_or(false)
    }
}

/// Geographic position, only used for display downstream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single directory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialistRecord {
    pub name: String,
    pub specialty: String,
    pub region: String,
    pub city: String,
    pub age_range: AgeRange,
    pub coordinates: Coordinates,
    pub bio: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Patient profile submitted for matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchQuery {
    /// Carried through to scoring; never used to filter
    pub age: i32,
    pub region: String,
    pub specialty: String,
}

impl MatchQuery {
    pub fn new(age: i32, region: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            age,
            region: region.into(),
            specialty: specialty.into(),
        }
    }
}

/// Recommendation produced by either matching backend
///
/// Field names are the wire contract shared with the external matcher
/// process, so they must not be renamed independently of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub specialty: String,
    pub region: String,
    pub city: String,
    pub similarity: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub bio: String,
    pub summary: String,
}

/// Appointment lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
}

/// Confirmed appointment held in memory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: uuid::Uuid,
    pub date: String,
    pub time: String,
    /// Specialist display name; not checked against the directory
    pub specialist: String,
    pub status: AppointmentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Stock alert derived from quantity on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Low,
    Ok,
}

/// Supply row as exposed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyItem {
    pub item: String,
    pub quantity: u32,
    pub alert: AlertLevel,
}
