// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AgeRange, AlertLevel, AppointmentRecord, AppointmentStatus, Coordinates, MatchQuery, MatchResult, SpecialistRecord, SupplyItem};
pub use requests::{BookAppointmentRequest, RecommendRequest, UpdateSupplyRequest};
pub use responses::{AppointmentsResponse, BookAppointmentResponse, ErrorResponse, HealthResponse, SuppliesResponse};
