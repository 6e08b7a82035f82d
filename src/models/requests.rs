use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::MatchQuery;

/// Request for a specialist recommendation
///
/// The Portuguese aliases accept the field names of the original request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(alias = "idade")]
    pub age: i32,
    #[serde(alias = "localizacao")]
    pub region: String,
    #[validate(length(min = 1))]
    #[serde(alias = "especialidade")]
    pub specialty: String,
}

impl From<RecommendRequest> for MatchQuery {
    fn from(req: RecommendRequest) -> Self {
        MatchQuery {
            age: req.age,
            region: req.region,
            specialty: req.specialty,
        }
    }
}

/// Request to confirm an appointment
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookAppointmentRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "data")]
    pub date: String,
    #[validate(length(min = 1))]
    #[serde(alias = "hora")]
    pub time: String,
    #[validate(length(min = 1))]
    #[serde(alias = "especialista")]
    pub specialist: String,
}

/// Request to overwrite a supply quantity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateSupplyRequest {
    #[validate(length(min = 1))]
    pub item: String,
    #[serde(alias = "quantidade")]
    pub quantity: u32,
}
