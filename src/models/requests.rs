use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::GeoCandidate;

/// Request to find candidates near a point
///
/// Candidates are supplied by the caller (fetched from storage upstream);
/// this service only computes the pure transformation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    #[serde(alias = "radius", rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub candidates: Vec<GeoCandidate>,
}

/// Request to annotate a raw post or comment body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateRequest {
    pub text: String,
}
