//! Round-trip every accepted planet through JSON and print a CSV summary
//!
//! Usage: cargo run -p planetary --example inner_planets_csv
//!
//! Output: one row per planet with its radius and serialized form

use planetary::{Planet, PlanetError, PlanetName};

fn main() -> Result<(), PlanetError> {
    // Mean radius (km) and main atmospheric gases
    let catalog: [(PlanetName, f64, &[&str]); 4] = [
        (PlanetName::Mercury, 2439.7, &[]),
        (PlanetName::Venus, 6051.8, &["CO2", "N2"]),
        (PlanetName::Earth, 6371.0, &["N2", "O2", "Ar"]),
        (PlanetName::Mars, 3389.5, &["CO2", "N2", "Ar"]),
    ];

    println!("name,radius_km,radius_earth,json");

    for (name, radius_km, gases) in catalog {
        let atmosphere = gases.iter().map(|g| g.to_string()).collect();
        let planet = Planet::new(name.as_str(), radius_km, atmosphere)?;
        let json = planet.to_json()?;
        let restored = Planet::from_json(&json)?;
        assert_eq!(restored, planet);

        println!(
            "{},{},{:.3},\"{}\"",
            restored.name(),
            restored.radius().to_km(),
            restored.radius().to_earth_radii(),
            json.replace('"', "\"\"")
        );
    }

    Ok(())
}
