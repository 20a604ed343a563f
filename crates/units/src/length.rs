use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

pub const M_PER_KM: f64 = 1_000.0;

/// Mean Earth radius in kilometers (IUGG value)
pub const KM_PER_EARTH_RADIUS: f64 = 6_371.0;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct uses kilometers as the base unit, which is the unit
/// planetary radii are quoted in. It serializes transparently as a bare
/// number so a value written to JSON reads back bit-for-bit.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth = Length::from_km(6371.0);
/// assert_eq!(earth.to_km(), 6371.0);
/// assert!((earth.to_earth_radii() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: km

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value / M_PER_KM)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * KM_PER_EARTH_RADIUS)
    }

    /// Returns the length in kilometers.
    pub fn to_km(&self) -> f64 {
        self.0
    }

    /// Converts the length to meters.
    pub fn to_m(&self) -> f64 {
        self.0 * M_PER_KM
    }

    /// Converts the length to Earth radii.
    pub fn to_earth_radii(&self) -> f64 {
        self.0 / KM_PER_EARTH_RADIUS
    }

    /// True for finite lengths strictly greater than zero.
    ///
    /// NaN compares false against everything, so it is never positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0 && self.0.is_finite()
    }
}

/// Renders as `<km> km`, e.g. `6371 km`.
impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
