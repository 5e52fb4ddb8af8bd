use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::Settings;
use crate::core::proximity::filter_nearby;
use crate::models::{ErrorResponse, GeoPoint, HealthResponse, NearbyRequest, NearbyResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}

/// Configure discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/discover/nearby", web::post().to(find_nearby));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Nearby discovery endpoint
///
/// POST /api/v1/discover/nearby
///
/// Request body:
/// ```json
/// {
///   "lat": 40.0,
///   "lng": -3.0,
///   "radiusKm": 10,
///   "candidates": [{ "id": "evt_1", "location": { "latitude": 40.01, "longitude": -3.0 } }]
/// }
/// ```
async fn find_nearby(
    state: web::Data<AppState>,
    req: web::Json<NearbyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for nearby request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limits = &state.settings.discovery;

    if req.candidates.len() > limits.max_candidates {
        tracing::info!(
            "Rejecting nearby request with {} candidates (max {})",
            req.candidates.len(),
            limits.max_candidates
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Too many candidates".to_string(),
            message: format!("Candidate batch exceeds limit of {}", limits.max_candidates),
            status_code: 400,
        });
    }

    let radius_km = req
        .radius_km
        .unwrap_or(limits.default_radius_km)
        .min(limits.max_radius_km);

    let origin = GeoPoint::new(req.lat, req.lng);
    let total_candidates = req.candidates.len();

    match filter_nearby(&origin, radius_km, req.into_inner().candidates) {
        Ok(results) => {
            tracing::debug!(
                "Nearby search matched {} of {} candidates within {}km",
                results.len(),
                total_candidates,
                radius_km
            );
            HttpResponse::Ok().json(NearbyResponse {
                results,
                total_candidates,
                radius_km,
            })
        }
        Err(e) => {
            tracing::info!("Rejected nearby search: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid coordinates".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
