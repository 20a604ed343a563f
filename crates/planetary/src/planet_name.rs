//! The closed set of accepted planet names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanetError;

/// Planets a record may name
///
/// Matching is exact and case-sensitive against the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetName {
    Mercury,
    Venus,
    Earth,
    Mars,
}

impl PlanetName {
    /// Every accepted name, innermost first
    pub const ALL: [PlanetName; 4] = [
        PlanetName::Mercury,
        PlanetName::Venus,
        PlanetName::Earth,
        PlanetName::Mars,
    ];

    /// Returns the canonical spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetName::Mercury => "Mercury",
            PlanetName::Venus => "Venus",
            PlanetName::Earth => "Earth",
            PlanetName::Mars => "Mars",
        }
    }
}

impl fmt::Display for PlanetName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanetName {
    type Err = PlanetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanetName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| PlanetError::InvalidName(s.to_string()))
    }
}

/// Returns true when `candidate` is one of [`PlanetName::ALL`]
pub fn is_valid_name(candidate: &str) -> bool {
    PlanetName::ALL.iter().any(|name| name.as_str() == candidate)
}
