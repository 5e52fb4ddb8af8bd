// Unit tests for PawNet Discover

use pawnet_discover::core::{
    annotate::{annotate, extract_hashtags, is_valid_hashtag},
    geo::haversine_distance,
    proximity::{filter_nearby, ProximityError},
};
use pawnet_discover::models::{GeoCandidate, GeoPoint, Token};

fn candidate(id: &str, lat: f64, lon: f64) -> GeoCandidate {
    GeoCandidate {
        id: id.to_string(),
        location: Some(GeoPoint::new(lat, lon)),
        payload: serde_json::Map::new(),
    }
}

fn candidate_without_location(id: &str) -> GeoCandidate {
    GeoCandidate {
        id: id.to_string(),
        location: None,
        payload: serde_json::Map::new(),
    }
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(40.7128, -74.0060, 40.7128, -74.0060);
    assert!(distance < 1e-6);
}

#[test]
fn test_haversine_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let distance = haversine_distance(40.7580, -73.9855, 40.6782, -73.9442);
    assert!(distance > 5.0 && distance < 15.0);
}

#[test]
fn test_haversine_symmetric() {
    let forward = haversine_distance(40.0, -3.0, 41.0, -3.0);
    let reverse = haversine_distance(41.0, -3.0, 40.0, -3.0);
    assert_eq!(forward, reverse);
}

#[test]
fn test_nearby_concrete_scenario() {
    // From the discovery endpoint's canonical example: "a" is ~1.11km away,
    // "b" has no location, "c" is ~111km away
    let origin = GeoPoint::new(40.0, -3.0);
    let candidates = vec![
        candidate("a", 40.01, -3.0),
        candidate_without_location("b"),
        candidate("c", 41.0, -3.0),
    ];

    let results = filter_nearby(&origin, 10.0, candidates).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].candidate.id, "a");
    assert!((results[0].distance_km - 1.11).abs() < 0.01);
}

#[test]
fn test_nearby_empty_for_non_positive_radius() {
    let origin = GeoPoint::new(40.0, -3.0);
    let candidates = vec![candidate("a", 40.0, -3.0)];

    assert!(filter_nearby(&origin, 0.0, candidates.clone()).unwrap().is_empty());
    assert!(filter_nearby(&origin, -1.0, candidates).unwrap().is_empty());
}

#[test]
fn test_nearby_grows_monotonically_with_radius() {
    let origin = GeoPoint::new(40.0, -3.0);
    let candidates: Vec<GeoCandidate> = (0..20)
        .map(|i| candidate(&format!("c{}", i), 40.0 + f64::from(i) * 0.05, -3.0))
        .collect();

    let mut previous: Vec<String> = Vec::new();
    for radius in [1.0, 10.0, 50.0, 100.0, 200.0] {
        let ids: Vec<String> = filter_nearby(&origin, radius, candidates.clone())
            .unwrap()
            .into_iter()
            .map(|r| r.candidate.id)
            .collect();

        for id in &previous {
            assert!(ids.contains(id), "{} disappeared when radius grew to {}", id, radius);
        }
        previous = ids;
    }
}

#[test]
fn test_nearby_sorted_ascending() {
    let origin = GeoPoint::new(40.0, -3.0);
    let candidates = vec![
        candidate("far", 40.4, -3.0),
        candidate("near", 40.01, -3.0),
        candidate("mid", 40.2, -3.0),
    ];

    let results = filter_nearby(&origin, 100.0, candidates).unwrap();

    for pair in results.windows(2) {
        assert!(pair[0].distance_km <= pair[1].distance_km);
    }
    assert_eq!(results[0].candidate.id, "near");
}

#[test]
fn test_nearby_rejects_out_of_range_origin() {
    let err = filter_nearby(&GeoPoint::new(120.0, 0.0), 10.0, vec![]).unwrap_err();
    assert!(matches!(err, ProximityError::InvalidArgument { .. }));
}

#[test]
fn test_annotate_mixed_example() {
    let text = "Hello #dog and @alice with @pet:rex";
    let annotated = annotate(text);

    let tokens: Vec<Token> = annotated.tokens().cloned().collect();
    assert_eq!(
        tokens,
        vec![
            Token::Hashtag("dog".to_string()),
            Token::UserMention("alice".to_string()),
            Token::PetMention("rex".to_string()),
        ]
    );
    assert_eq!(annotated.reconstruct(), text);
    assert_eq!(annotated.original_len, text.len());
}

#[test]
fn test_annotate_adjacent_hashtags() {
    let tokens: Vec<Token> = annotate("#a#b").tokens().cloned().collect();
    assert_eq!(
        tokens,
        vec![Token::Hashtag("a".to_string()), Token::Hashtag("b".to_string())]
    );
}

#[test]
fn test_extract_hashtags_dedup() {
    let tags = extract_hashtags("love my #dog and #DOG");
    assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["dog".to_string()]);
}

#[test]
fn test_hashtag_validation() {
    assert!(is_valid_hashtag("mytag"));
    assert!(!is_valid_hashtag("my tag"));
    assert!(!is_valid_hashtag(""));
}

#[test]
fn test_reconstruction_over_awkward_inputs() {
    let inputs = [
        "",
        "#",
        "@",
        "@pet:",
        "#a#b#c",
        "plain text only",
        "@@double @at",
        "tail #",
        "mix #tag@user@pet:rex#more",
        "emoji \u{1f436} and #dog",
    ];

    for input in inputs {
        assert_eq!(annotate(input).reconstruct(), input, "failed to reconstruct {:?}", input);
    }
}
