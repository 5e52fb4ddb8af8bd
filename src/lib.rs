//! PawNet Discover - proximity search and content annotation for the PawNet pet social network
//!
//! This library provides the two stateless compute components behind PawNet's
//! discovery and feed features: Haversine-based nearby-entity filtering and
//! single-pass hashtag/mention annotation of user text.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::annotate::{annotate, extract_hashtags, is_valid_hashtag, render, LinkTemplate};
pub use crate::core::geo::haversine_distance;
pub use crate::core::proximity::{filter_nearby, ProximityError};
pub use crate::models::{AnnotatedText, GeoCandidate, GeoPoint, ProximityResult, Segment, Token};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let distance = haversine_distance(40.7128, -74.0060, 40.7128, -74.0060);
        assert!(distance < 1e-6);
        assert!(is_valid_hashtag("dogs"));
    }
}
