//! Diagnostic logging setup
//!
//! Demo output goes to stdout; tracing events go to stderr so the two never
//! interleave in a pipe.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Maps the `-v` count to a maximum level, WARN when none is given
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(level_for(verbosity))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
