// Route exports
pub mod appointments;
pub mod recommend;
pub mod supplies;

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::Directory;
use crate::models::ErrorResponse;
use crate::services::{AppointmentBook, ExecutionRouter, SupplyInventory};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory>,
    pub router: ExecutionRouter,
    pub appointments: Arc<AppointmentBook>,
    pub inventory: Arc<SupplyInventory>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommend::configure)
            .configure(appointments::configure)
            .configure(supplies::configure),
    );
}

pub(crate) fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
