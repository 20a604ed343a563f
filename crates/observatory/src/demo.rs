//! The linear demonstration run
//!
//! Build the planet, serialize it, read it back, then print the Sun. A
//! rejected planet is reported and the rest of its demonstration is skipped;
//! it is not treated as a process failure.

use std::io::{self, Write};

use planetary::{Planet, PlanetError};
use stellar::Star;
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::display::DisplayLines;

/// Run the demo, writing its transcript to `out`.
///
/// Returns the window lines when the planet was built and restored, `None`
/// when it was rejected.
pub fn run_demo<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<Option<DisplayLines>> {
    let restored = round_trip(cli, out)?;

    let star = Star::sun();
    writeln!(out, "{}", star)?;

    Ok(restored.map(|planet| DisplayLines::new(&planet, &star)))
}

fn round_trip<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<Option<Planet>> {
    let planet = match Planet::new(&cli.name, cli.radius, cli.atmosphere.clone()) {
        Ok(planet) => planet,
        Err(err) => {
            report(&err, out)?;
            return Ok(None);
        }
    };
    info!(name = %planet.name(), "planet created");
    writeln!(out, "Astronomical Body Created: {}", planet)?;

    let json = planet.to_json()?;
    debug!(bytes = json.len(), "planet serialized");
    writeln!(out, "Serialized to JSON: {}", json)?;

    writeln!(out, "\nDeserializing from JSON...")?;
    let restored = match Planet::from_json(&json) {
        Ok(restored) => restored,
        Err(err) => {
            report(&err, out)?;
            return Ok(None);
        }
    };
    writeln!(out, "Restored Astronomical Body: {}", restored)?;

    Ok(Some(restored))
}

fn report<W: Write>(err: &PlanetError, out: &mut W) -> io::Result<()> {
    warn!(error = %err, "planet rejected");
    match err {
        PlanetError::Validation(e) => writeln!(out, "Validation Error: {}", e),
        PlanetError::InvalidName(_) | PlanetError::Serialize(_) => writeln!(out, "{}", err),
    }
}
