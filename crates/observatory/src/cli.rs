use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "observatory",
    about = "Astronomical Body Simulation CLI",
    version
)]
pub struct Cli {
    /// Name of the planet
    #[arg(long)]
    pub name: String,

    /// Radius of the planet in kilometers
    #[arg(long, allow_negative_numbers = true)]
    pub radius: f64,

    /// List of gases in the atmosphere
    #[arg(long, num_args = 1..)]
    pub atmosphere: Vec<String>,

    /// Print the records without opening a window
    #[arg(long)]
    pub no_gui: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
