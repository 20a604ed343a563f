use clap::Parser;
use tracing::info;

use observatory::{app, logging, run_demo, Cli, ViewportSettings};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let lines = {
        let mut stdout = std::io::stdout().lock();
        run_demo(&cli, &mut stdout)?
    };

    match lines {
        Some(lines) if !cli.no_gui => {
            info!("opening window");
            app::run(lines, ViewportSettings::default())
                .map_err(|e| anyhow::anyhow!("failed to open window: {e}"))?;
        }
        Some(_) => info!("window disabled"),
        None => info!("no planet to display, skipping window"),
    }

    Ok(())
}
