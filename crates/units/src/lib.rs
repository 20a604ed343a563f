pub mod length;
pub mod temperature;


pub use length::{Length, KM_PER_EARTH_RADIUS};
pub use temperature::Temperature;
