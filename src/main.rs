mod app;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = app::Cli::parse();
    if let Err(e) = app::init_logger(cli.verbose, cli.quiet) {
        eprintln!("Could not set up logging: {}", e);
    }
    match app::run_app(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
