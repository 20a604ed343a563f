//! Pure data types for stellar objects.
//!
//! Unlike planets, stars are not validated: any name and any temperature,
//! including zero or negative Kelvin, are stored as given.

use std::fmt;

use units::Temperature;

/// Effective temperature of the Sun's photosphere (K)
pub const SOLAR_EFFECTIVE_TEMPERATURE_K: f64 = 5778.0;

/// A named star with its effective temperature
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub name: String,
    pub temperature: Temperature,
}

impl Star {
    pub fn new(name: impl Into<String>, temperature: Temperature) -> Self {
        Self {
            name: name.into(),
            temperature,
        }
    }

    /// The Sun at its effective temperature
    pub fn sun() -> Self {
        Self::new(
            "Sun",
            Temperature::from_kelvin(SOLAR_EFFECTIVE_TEMPERATURE_K),
        )
    }
}

/// Renders as `<name> (Temperature: <kelvin>K)`
impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Temperature: {})", self.name, self.temperature)
    }
}
