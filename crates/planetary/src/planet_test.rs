use approx::assert_relative_eq;
use proptest::prelude::*;

use crate::{
    error::PlanetError,
    planet::{Planet, PlanetRecord},
    planet_name::PlanetName,
};

fn gases(names: &[&str]) -> Vec<String> {
    names.iter().map(|g| g.to_string()).collect()
}

#[test]
fn test_earth() {
    let earth = Planet::new("Earth", 6371.0, gases(&["N2", "O2"])).unwrap();
    assert_eq!(earth.name(), PlanetName::Earth);
    assert_eq!(earth.radius().to_km(), 6371.0);
    assert_eq!(earth.atmosphere_composition(), ["N2", "O2"]);
    assert_relative_eq!(earth.radius().to_earth_radii(), 1.0);
}

#[test]
fn test_serialized_form() {
    let earth = Planet::new("Earth", 6371.0, gases(&["N2", "O2"])).unwrap();
    assert_eq!(
        earth.to_json().unwrap(),
        r#"{"name":"Earth","radius":6371.0,"atmosphere_composition":["N2","O2"]}"#
    );
}

#[test]
fn test_round_trip_earth() {
    let earth = Planet::new("Earth", 6371.0, gases(&["N2", "O2"])).unwrap();
    let restored = Planet::from_json(&earth.to_json().unwrap()).unwrap();
    assert_eq!(restored, earth);
}

#[test]
fn test_empty_atmosphere_is_valid() {
    let mercury = Planet::new("Mercury", 2439.7, Vec::new()).unwrap();
    assert!(mercury.atmosphere_composition().is_empty());
    assert_eq!(
        mercury.to_json().unwrap(),
        r#"{"name":"Mercury","radius":2439.7,"atmosphere_composition":[]}"#
    );
}

#[test]
fn test_duplicate_gases_are_kept_in_order() {
    let venus = Planet::new("Venus", 6051.8, gases(&["CO2", "N2", "CO2"])).unwrap();
    assert_eq!(venus.atmosphere_composition(), ["CO2", "N2", "CO2"]);
}

#[test]
fn test_pluto_is_rejected() {
    let err = Planet::new("Pluto", 1188.0, gases(&["N2"])).unwrap_err();
    assert!(matches!(err, PlanetError::InvalidName(ref n) if n == "Pluto"));
}

#[test]
fn test_negative_radius_is_rejected() {
    let err = Planet::new("Mars", -100.0, Vec::new()).unwrap_err();
    match err {
        PlanetError::Validation(v) => assert!(v.concerns("radius")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_zero_and_nan_radius_are_rejected() {
    for radius in [0.0, -0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = Planet::new("Mars", radius, Vec::new());
        assert!(
            matches!(result, Err(PlanetError::Validation(_))),
            "radius {} should fail",
            radius
        );
    }
}

#[test]
fn test_name_is_checked_before_radius() {
    let err = Planet::new("Vulcan", -1.0, Vec::new()).unwrap_err();
    assert!(matches!(err, PlanetError::InvalidName(ref n) if n == "Vulcan"));
}

#[test]
fn test_deserialize_invalid_name_matches_construction() {
    let json = r#"{"name":"Pluto","radius":1188.0,"atmosphere_composition":["N2"]}"#;
    let from_json = Planet::from_json(json).unwrap_err();
    let direct = Planet::new("Pluto", 1188.0, gases(&["N2"])).unwrap_err();

    assert!(matches!(from_json, PlanetError::InvalidName(ref n) if n == "Pluto"));
    assert_eq!(from_json.to_string(), direct.to_string());
}

#[test]
fn test_deserialize_bad_radius_matches_construction() {
    let json = r#"{"name":"Mars","radius":-100.0,"atmosphere_composition":[]}"#;
    let from_json = Planet::from_json(json).unwrap_err();
    let direct = Planet::new("Mars", -100.0, Vec::new()).unwrap_err();

    assert!(matches!(from_json, PlanetError::Validation(_)));
    assert_eq!(from_json.to_string(), direct.to_string());
}

#[test]
fn test_malformed_payloads_fail_validation() {
    let payloads = [
        "",
        "not json",
        r#"{"name":"Earth","radius":6371.0}"#,
        r#"{"name":"Earth","radius":"big","atmosphere_composition":[]}"#,
        r#"{"name":"Earth","radius":6371.0,"atmosphere_composition":"N2"}"#,
        "null",
        r#"{"name":null,"radius":6371.0,"atmosphere_composition":[]}"#,
    ];
    for payload in payloads {
        assert!(
            matches!(Planet::from_json(payload), Err(PlanetError::Validation(_))),
            "payload {:?} should fail validation",
            payload
        );
    }
}

#[test]
fn test_integer_radius_and_extra_keys_are_accepted() {
    let json = r#"{"name":"Mars","radius":3390,"atmosphere_composition":["CO2"],"moons":2}"#;
    let mars = Planet::from_json(json).unwrap();
    assert_eq!(mars.radius().to_km(), 3390.0);
}

#[test]
fn test_serde_deserialize_is_validated() {
    let json = r#"{"name":"Mars","radius":0.0,"atmosphere_composition":[]}"#;
    assert!(serde_json::from_str::<Planet>(json).is_err());

    let json = r#"{"name":"Mars","radius":3389.5,"atmosphere_composition":[]}"#;
    let mars: Planet = serde_json::from_str(json).unwrap();
    assert_eq!(mars.name(), PlanetName::Mars);
}

#[test]
fn test_record_conversion() {
    let earth = Planet::new("Earth", 6371.0, gases(&["N2", "O2"])).unwrap();
    let record = PlanetRecord::from(earth.clone());
    assert_eq!(record.name, "Earth");
    assert_eq!(record.radius, 6371.0);
    assert_eq!(Planet::try_from(record).unwrap(), earth);
}

#[test]
fn test_display() {
    let earth = Planet::new("Earth", 6371.0, gases(&["N2", "O2"])).unwrap();
    assert_eq!(
        earth.to_string(),
        "name='Earth' radius=6371.0 atmosphere_composition=['N2', 'O2']"
    );

    let mercury = Planet::new("Mercury", 2439.7, Vec::new()).unwrap();
    assert_eq!(
        mercury.to_string(),
        "name='Mercury' radius=2439.7 atmosphere_composition=[]"
    );
}

fn accepted_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Mercury", "Venus", "Earth", "Mars"])
}

proptest! {
    #[test]
    fn prop_valid_inputs_are_kept_exactly(
        name in accepted_name(),
        radius in 1e-6f64..1e7,
        atmosphere in prop::collection::vec("[A-Za-z0-9]{1,6}", 0..5),
    ) {
        let planet = Planet::new(name, radius, atmosphere.clone()).unwrap();
        prop_assert_eq!(planet.name().as_str(), name);
        prop_assert_eq!(planet.radius().to_km(), radius);
        prop_assert_eq!(planet.atmosphere_composition(), atmosphere.as_slice());
    }

    #[test]
    fn prop_round_trip(
        name in accepted_name(),
        radius in 1e-6f64..1e7,
        atmosphere in prop::collection::vec(".{0,8}", 0..5),
    ) {
        let planet = Planet::new(name, radius, atmosphere).unwrap();
        let restored = Planet::from_json(&planet.to_json().unwrap()).unwrap();
        prop_assert_eq!(restored, planet);
    }

    #[test]
    fn prop_unknown_names_are_rejected(name in "[A-Za-z]{0,10}") {
        prop_assume!(!["Mercury", "Venus", "Earth", "Mars"].contains(&name.as_str()));
        let err = Planet::new(&name, 1000.0, Vec::new()).unwrap_err();
        prop_assert!(matches!(err, PlanetError::InvalidName(ref n) if *n == name));
    }

    #[test]
    fn prop_non_positive_radius_is_rejected(name in accepted_name(), radius in -1e7f64..=0.0) {
        let result = Planet::new(name, radius, Vec::new());
        prop_assert!(matches!(result, Err(PlanetError::Validation(_))));
    }
}
