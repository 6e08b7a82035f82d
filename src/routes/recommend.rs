use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::MatchError;
use crate::models::{ErrorResponse, HealthResponse, MatchQuery, RecommendRequest};
use crate::routes::{validation_failed, AppState};

/// Configure recommendation and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: state.router.kind().to_string(),
        directory_size: state.directory.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend a specialist
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "age": 30,
///   "region": "SP",
///   "specialty": "FIV"
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return validation_failed(errors);
    }

    let query = MatchQuery::from(req.into_inner());

    match state.router.select(&query).await {
        Ok(result) => {
            tracing::info!("Recommended {} ({:.2})", result.name, result.similarity);
            HttpResponse::Ok().json(result)
        }
        Err(e) => match_error_response(&e),
    }
}

/// Map a match failure to its HTTP response
///
/// External diagnostics are logged by the router and never echoed back.
pub(crate) fn match_error_response(err: &MatchError) -> HttpResponse {
    match err {
        MatchError::NotFound { .. } => HttpResponse::NotFound().json(ErrorResponse {
            error: "No specialist found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        MatchError::ExternalMatchTimeout(_) => HttpResponse::GatewayTimeout().json(ErrorResponse {
            error: "Matcher timed out".to_string(),
            message: "The recommendation engine did not respond in time".to_string(),
            status_code: 504,
        }),
        MatchError::ExternalMatchError(_) | MatchError::MalformedExternalOutput(_) => {
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Matcher failed".to_string(),
                message: "The recommendation engine failed to produce a result".to_string(),
                status_code: 502,
            })
        }
    }
}
