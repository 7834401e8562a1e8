mod commands;
mod input_output;
mod logging;
mod pattern_args;

use clap::Parser;
use commands::Commands;
use logging::LogArgs;

/// rxc: conventional regexp queries from the shell.
#[derive(clap::Parser, Debug)]
#[command(name = "rxc", version)]
pub struct Args {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Matching errors are logged as warnings; show them by default.
    args.logging.setup_logging(2)?;

    args.command.run()
}
