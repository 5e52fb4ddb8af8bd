// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AnnotatedText, GeoCandidate, GeoPoint, ProximityResult, Segment, Token};
pub use requests::{AnnotateRequest, NearbyRequest};
pub use responses::{AnnotateResponse, ErrorResponse, HashtagResponse, HealthResponse, NearbyResponse};
