use crate::core::geo::haversine_distance;
use crate::models::{GeoCandidate, GeoPoint, ProximityResult};
use thiserror::Error;

/// Errors that can occur during proximity filtering
#[derive(Debug, Error, PartialEq)]
pub enum ProximityError {
    #[error("invalid origin coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidArgument { latitude: f64, longitude: f64 },
}

/// Filter candidates to those within `radius_km` of `origin`, sorted by distance
///
/// Candidates without a location are excluded entirely. A non-positive (or NaN)
/// radius means "no meaningful radius" and yields an empty result rather than an
/// error. Ties on distance keep the candidates' input order.
///
/// # Errors
/// `ProximityError::InvalidArgument` if `origin` has out-of-range or non-finite
/// coordinates.
pub fn filter_nearby(
    origin: &GeoPoint,
    radius_km: f64,
    candidates: Vec<GeoCandidate>,
) -> Result<Vec<ProximityResult>, ProximityError> {
    if !origin.is_valid() {
        return Err(ProximityError::InvalidArgument {
            latitude: origin.latitude,
            longitude: origin.longitude,
        });
    }

    // NaN fails this comparison too, so a garbage radius degrades to "no results"
    if !(radius_km > 0.0) {
        return Ok(Vec::new());
    }

    let mut results: Vec<ProximityResult> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let location = candidate.location?;
            let distance_km = haversine_distance(
                origin.latitude,
                origin.longitude,
                location.latitude,
                location.longitude,
            );

            // Inclusive test: a non-finite distance from corrupt candidate
            // coordinates can never pass
            if distance_km <= radius_km {
                Some(ProximityResult {
                    candidate,
                    distance_km,
                })
            } else {
                None
            }
        })
        .collect();

    // Vec::sort_by is stable, which preserves input order for equal distances
    results.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(results)
}
