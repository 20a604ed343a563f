//! Validated planet records
//!
//! A [`Planet`] can only be obtained through validation, either from discrete
//! field values or from its JSON interchange form, so every value in hand
//! satisfies the name and radius constraints.

pub mod error;
pub mod planet;
pub mod planet_name;

// Re-export key types at crate root
pub use error::{PlanetError, ValidationError, Violation};
pub use planet::{Planet, PlanetRecord};
pub use planet_name::{is_valid_name, PlanetName};

#[cfg(test)]
mod planet_name_test;
#[cfg(test)]
mod planet_test;
