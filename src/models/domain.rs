use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// A point is valid iff both components are finite and within range
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Geo-taggable entity tested for proximity inclusion
///
/// Events, services, and users-with-pets all arrive in this shape; fields
/// beyond `id` and `location` are carried through untouched in `payload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoCandidate {
    pub id: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(flatten, default)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

/// One candidate that made it inside the search radius
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximityResult {
    pub candidate: GeoCandidate,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// Recognized inline token; the value excludes the marker character(s)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Token {
    Hashtag(String),
    UserMention(String),
    PetMention(String),
}

impl Token {
    /// The token as it appeared in the source text, marker included
    pub fn literal(&self) -> String {
        match self {
            Token::Hashtag(value) => format!("#{}", value),
            Token::UserMention(value) => format!("@{}", value),
            Token::PetMention(value) => format!("@pet:{}", value),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Token::Hashtag(value) | Token::UserMention(value) | Token::PetMention(value) => value,
        }
    }
}

/// One piece of a lossless text decomposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "camelCase")]
pub enum Segment {
    Literal(String),
    Token(Token),
}

/// Lossless decomposition of a raw text into literal runs and tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedText {
    #[serde(rename = "originalLength")]
    pub original_len: usize,
    pub segments: Vec<Segment>,
}

impl AnnotatedText {
    /// Iterate the recognized tokens in source order
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Token(token) => Some(token),
            Segment::Literal(_) => None,
        })
    }

    /// Rebuild the original text from the segments
    pub fn reconstruct(&self) -> String {
        let mut out = String::with_capacity(self.original_len);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Token(token) => out.push_str(&token.literal()),
            }
        }
        out
    }
}
