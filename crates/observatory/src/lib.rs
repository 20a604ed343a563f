//! Astronomical body demo
//!
//! Reads a planet from the command line, validates it, round-trips it through
//! JSON and shows it next to the Sun in a static window.

pub mod app;
pub mod cli;
pub mod demo;
pub mod display;
pub mod logging;

#[cfg(test)]
mod display_test;

pub use app::{ObservatoryApp, ViewportSettings};
pub use cli::Cli;
pub use demo::run_demo;
pub use display::DisplayLines;
