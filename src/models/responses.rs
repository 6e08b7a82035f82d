use serde::{Deserialize, Serialize};
use crate::models::domain::{AppointmentRecord, SupplyItem};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backend: String,
    pub directory_size: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Booking confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentResponse {
    pub success: bool,
    pub appointment: AppointmentRecord,
    pub message: String,
}

/// Appointment listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentsResponse {
    pub appointments: Vec<AppointmentRecord>,
    pub total: usize,
}

/// Supply inventory view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuppliesResponse {
    pub supplies: Vec<SupplyItem>,
}
