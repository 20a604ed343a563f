use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Offset between the Kelvin and Celsius scales
pub const CELSIUS_OFFSET: f64 = 273.15;

/// A physical temperature quantity using f64 precision.
///
/// Kelvin is the base unit. No range is enforced: stars and other records
/// built from catalog values may carry whatever number they were given.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let photosphere = Temperature::from_kelvin(5778.0);
/// assert_eq!(photosphere.to_string(), "5778K");
///
/// let earth_surface = Temperature::from_celsius(15.0);
/// assert!((earth_surface.to_kelvin() - 288.15).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Celsius (K = °C + 273.15).
    pub fn from_celsius(value: f64) -> Self {
        Self(value + CELSIUS_OFFSET)
    }

    /// Returns the temperature value in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Converts the temperature to Celsius.
    pub fn to_celsius(&self) -> f64 {
        self.0 - CELSIUS_OFFSET
    }
}

/// Renders the Kelvin value followed by `K` with no separator.
///
/// Uses the shortest float representation, so `5778.0` renders as `5778K`.
impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

impl Add for Temperature {
    type Output = Temperature;

    fn add(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

impl Sub for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}
