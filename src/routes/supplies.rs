use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, SuppliesResponse, UpdateSupplyRequest};
use crate::routes::{validation_failed, AppState};
use crate::services::InventoryError;

/// Configure supply inventory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/supplies", web::get().to(list_supplies))
        .route("/supplies/update", web::post().to(update_supply));
}

/// GET /api/v1/supplies
async fn list_supplies(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(SuppliesResponse {
        supplies: state.inventory.snapshot().await,
    })
}

/// Overwrite a supply quantity
///
/// POST /api/v1/supplies/update
async fn update_supply(
    state: web::Data<AppState>,
    req: web::Json<UpdateSupplyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.inventory.update(&req.item, req.quantity).await {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e @ InventoryError::UnknownItem(_)) => {
            tracing::info!("Supply update rejected: {}", e);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Unknown supply item".to_string(),
                message: e.to_string(),
                status_code: 404,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Directory, MatchSelector};
    use crate::models::{AlertLevel, SupplyItem};
    use crate::services::{AppointmentBook, ExecutionRouter, SupplyInventory};
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    fn create_state() -> AppState {
        let directory = Arc::new(Directory::builtin().unwrap());
        AppState {
            router: ExecutionRouter::new(Arc::new(MatchSelector::with_random_scorer(
                directory.clone(),
                None,
            ))),
            directory,
            appointments: Arc::new(AppointmentBook::new()),
            inventory: Arc::new(SupplyInventory::with_seed_stock(20)),
        }
    }

    #[actix_web::test]
    async fn test_update_then_list() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/supplies").to_request();
        let before: SuppliesResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(before.supplies[0].alert, AlertLevel::Low);

        let req = test::TestRequest::post()
            .uri("/api/v1/supplies/update")
            .set_json(serde_json::json!({"item": "FIV Kit", "quantidade": 30}))
            .to_request();
        let updated: SupplyItem = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.quantity, 30);
        assert_eq!(updated.alert, AlertLevel::Ok);

        let req = test::TestRequest::get().uri("/api/v1/supplies").to_request();
        let after: SuppliesResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(after.supplies[0].alert, AlertLevel::Ok);
    }

    #[actix_web::test]
    async fn test_update_unknown_item() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/supplies/update")
            .set_json(serde_json::json!({"item": "Seringas", "quantity": 3}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
