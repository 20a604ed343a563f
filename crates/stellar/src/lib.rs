//! Stellar object types.

pub mod stellar_objects;


pub use stellar_objects::{Star, SOLAR_EFFECTIVE_TEMPERATURE_K};
