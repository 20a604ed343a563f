use crate::error::PlanetError;
use crate::planet_name::{is_valid_name, PlanetName};

#[test]
fn test_accepted_names() {
    for name in ["Mercury", "Venus", "Earth", "Mars"] {
        assert!(is_valid_name(name), "{} should be accepted", name);
    }
}

#[test]
fn test_rejected_names() {
    for name in ["Pluto", "Jupiter", "earth", "EARTH", " Earth", "Earth ", ""] {
        assert!(!is_valid_name(name), "{:?} should be rejected", name);
    }
}

#[test]
fn test_parse_round_trips_display() {
    for name in PlanetName::ALL {
        let parsed: PlanetName = name.to_string().parse().unwrap();
        assert_eq!(parsed, name);
        assert_eq!(name.as_str(), name.to_string());
    }
}

#[test]
fn test_parse_failure_carries_input() {
    let err = "Ceres".parse::<PlanetName>().unwrap_err();
    assert!(matches!(err, PlanetError::InvalidName(ref n) if n == "Ceres"));
    assert_eq!(err.to_string(), "Invalid planet name: Ceres");
}
