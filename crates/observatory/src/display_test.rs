use planetary::Planet;
use stellar::Star;

use crate::display::DisplayLines;

#[test]
fn test_lines_for_earth() {
    let earth = Planet::new("Earth", 6371.0, vec!["N2".into(), "O2".into()]).unwrap();
    let lines = DisplayLines::new(&earth, &Star::sun());

    assert_eq!(
        lines.lines(),
        [
            "Planet Name: Earth",
            "Radius: 6371 km",
            "Atmosphere: N2, O2",
            "Star: Sun (Temperature: 5778K)",
        ]
    );
}

#[test]
fn test_empty_atmosphere_line() {
    let mercury = Planet::new("Mercury", 2439.7, Vec::new()).unwrap();
    let lines = DisplayLines::new(&mercury, &Star::sun());
    assert_eq!(lines.atmosphere, "Atmosphere: ");
    assert_eq!(lines.radius, "Radius: 2439.7 km");
}
