//! Running the simulation and printing the result.

use crate::args::Args;
use env_logger::Env;
use log::{error, info};
use std::{
    error::Error,
    io::{self, Write},
    process::ExitCode,
    time::Instant,
};

/// Installs the logger. `RUST_LOG` takes precedence over `verbose`.
pub(crate) fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

/// Runs the simulation to its equilibrium and prints the number of occupied seats.
pub(crate) fn run(args: Args) -> ExitCode {
    let stdout = io::stdout();
    match simulate(args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the simulation and writes the result to `out`.
///
/// Nothing is written if the simulation fails.
fn simulate<W: Write>(args: Args, out: &mut W) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let mut simulation = args.config.simulation(args.grid)?;
    let count = simulation.run()?;
    info!("Finished in {:.2?}", start.elapsed());
    if args.print {
        write!(out, "{}", simulation.grid())?;
    }
    writeln!(out, "{}", count)?;
    Ok(())
}
