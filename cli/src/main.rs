mod args;
mod cli;

use args::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    cli::init_logger(args.verbose);
    cli::run(args)
}
