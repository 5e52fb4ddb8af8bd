use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::domain::{AnnotatedText, ProximityResult, Token};

/// Response for the nearby discovery endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyResponse {
    pub results: Vec<ProximityResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
}

/// Response for the annotation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateResponse {
    pub annotated: AnnotatedText,
    pub tokens: Vec<Token>,
    pub hashtags: BTreeSet<String>,
    pub html: String,
}

/// Response for hashtag route-parameter resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashtagResponse {
    pub tag: String,
    pub valid: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
