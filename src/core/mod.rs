// Core algorithm exports
pub mod annotate;
pub mod geo;
pub mod proximity;

pub use annotate::{annotate, extract_hashtags, is_valid_hashtag, render, LinkTemplate};
pub use geo::haversine_distance;
pub use proximity::{filter_nearby, ProximityError};
