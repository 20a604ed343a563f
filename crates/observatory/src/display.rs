use planetary::Planet;
use stellar::Star;

/// The four static text lines shown in the window
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLines {
    pub planet_name: String,
    pub radius: String,
    pub atmosphere: String,
    pub star: String,
}

impl DisplayLines {
    pub fn new(planet: &Planet, star: &Star) -> Self {
        Self {
            planet_name: format!("Planet Name: {}", planet.name()),
            radius: format!("Radius: {}", planet.radius()),
            atmosphere: format!("Atmosphere: {}", planet.atmosphere_composition().join(", ")),
            star: format!("Star: {}", star),
        }
    }

    /// Lines in display order
    pub fn lines(&self) -> [&str; 4] {
        [
            self.planet_name.as_str(),
            self.radius.as_str(),
            self.atmosphere.as_str(),
            self.star.as_str(),
        ]
    }
}
