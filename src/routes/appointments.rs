use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{AppointmentsResponse, BookAppointmentRequest, BookAppointmentResponse};
use crate::routes::{validation_failed, AppState};
use crate::services::BOOKING_CONFIRMATION;

/// Configure appointment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/appointments", web::post().to(book_appointment))
        .route("/appointments", web::get().to(list_appointments));
}

/// Confirm an appointment
///
/// POST /api/v1/appointments
///
/// Request body:
/// ```json
/// {
///   "date": "20/10/2026",
///   "time": "14:30",
///   "specialist": "Dr. Silva"
/// }
/// ```
async fn book_appointment(
    state: web::Data<AppState>,
    req: web::Json<BookAppointmentRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let appointment = state
        .appointments
        .book(&req.date, &req.time, &req.specialist)
        .await;

    HttpResponse::Ok().json(BookAppointmentResponse {
        success: true,
        appointment,
        message: BOOKING_CONFIRMATION.to_string(),
    })
}

/// GET /api/v1/appointments
async fn list_appointments(state: web::Data<AppState>) -> impl Responder {
    let appointments = state.appointments.list().await;
    HttpResponse::Ok().json(AppointmentsResponse {
        total: appointments.len(),
        appointments,
    })
}
