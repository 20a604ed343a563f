//! Planet record with constructor-time validation
//!
//! The record has no public fields and no setters. Both ways in, direct
//! construction and JSON deserialization, run the same checks, so a failed
//! build never yields a partial value.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::Length;

use crate::error::{PlanetError, ValidationError, Violation};
use crate::planet_name::PlanetName;

/// A validated planet
///
/// Serializes to exactly three keys, in order:
/// `{"name":"Earth","radius":6371.0,"atmosphere_composition":["N2","O2"]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlanetRecord")]
pub struct Planet {
    name: PlanetName,
    /// Mean radius (km)
    radius: Length,
    /// Gas names, in the order given
    atmosphere_composition: Vec<String>,
}

/// Unvalidated wire form of a [`Planet`]
///
/// Deserialization lands here first; [`Planet::try_from`] then applies the
/// field constraints. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub name: String,
    pub radius: f64,
    pub atmosphere_composition: Vec<String>,
}

impl Planet {
    /// Validate the fields and build a planet
    ///
    /// The name is checked first and fails on its own with
    /// [`PlanetError::InvalidName`]. Remaining field violations are collected
    /// into a single [`PlanetError::Validation`].
    ///
    /// # Examples
    /// ```
    /// use planetary::{Planet, PlanetError};
    ///
    /// let earth = Planet::new("Earth", 6371.0, vec!["N2".into(), "O2".into()]).unwrap();
    /// assert_eq!(earth.radius().to_km(), 6371.0);
    ///
    /// let pluto = Planet::new("Pluto", 1188.0, vec!["N2".into()]);
    /// assert!(matches!(pluto, Err(PlanetError::InvalidName(name)) if name == "Pluto"));
    /// ```
    pub fn new(
        name: &str,
        radius: f64,
        atmosphere_composition: Vec<String>,
    ) -> Result<Self, PlanetError> {
        let name: PlanetName = name.parse()?;
        let radius = Length::from_km(radius);

        let mut violations = Vec::new();
        if !radius.is_positive() {
            violations.push(Violation::field(
                "radius",
                format!(
                    "must be a finite number greater than 0 (got {})",
                    radius.to_km()
                ),
            ));
        }
        ValidationError::check(violations)?;

        debug!(%name, radius_km = radius.to_km(), "planet validated");
        Ok(Self {
            name,
            radius,
            atmosphere_composition,
        })
    }

    /// Serialize to the JSON interchange form
    pub fn to_json(&self) -> Result<String, PlanetError> {
        serde_json::to_string(self).map_err(PlanetError::Serialize)
    }

    /// Parse the JSON interchange form and validate it
    ///
    /// Text that is not a well-formed record (bad JSON, missing or mistyped
    /// keys) fails with [`PlanetError::Validation`]. A well-formed record
    /// fails exactly as [`Planet::new`] would with the same values.
    pub fn from_json(json: &str) -> Result<Self, PlanetError> {
        let record: PlanetRecord =
            serde_json::from_str(json).map_err(|e| ValidationError::malformed(&e))?;
        debug!(name = %record.name, "parsed planet payload");
        Self::try_from(record)
    }

    pub fn name(&self) -> PlanetName {
        self.name
    }

    pub fn radius(&self) -> Length {
        self.radius
    }

    pub fn atmosphere_composition(&self) -> &[String] {
        &self.atmosphere_composition
    }
}

impl TryFrom<PlanetRecord> for Planet {
    type Error = PlanetError;

    fn try_from(record: PlanetRecord) -> Result<Self, Self::Error> {
        Planet::new(&record.name, record.radius, record.atmosphere_composition)
    }
}

impl From<Planet> for PlanetRecord {
    fn from(planet: Planet) -> Self {
        Self {
            name: planet.name.as_str().to_string(),
            radius: planet.radius.to_km(),
            atmosphere_composition: planet.atmosphere_composition,
        }
    }
}

/// Field listing, e.g. `name='Earth' radius=6371.0 atmosphere_composition=['N2', 'O2']`
impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gases = self
            .atmosphere_composition
            .iter()
            .map(|gas| format!("'{}'", gas))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "name='{}' radius={:?} atmosphere_composition=[{}]",
            self.name,
            self.radius.to_km(),
            gases
        )
    }
}
