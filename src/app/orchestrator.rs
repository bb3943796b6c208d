use super::cli::{Cli, OutputMode};
use super::error::AppError;
use super::render;
use circuit_tracer::{CircuitBoard, CircuitTracer};
use log::info;
use std::io::{self, Write};

/// Loads the board named on the command line, searches it and prints the shortest traces.
pub fn run_app(cli: &Cli) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(cli, &mut out)
}

/// Like [run_app], writing to `out`. Nothing is written if the board cannot be loaded.
pub fn run_with<W: Write>(cli: &Cli, out: &mut W) -> Result<(), AppError> {
    let board = CircuitBoard::load(&cli.input_file)?;
    let tracer = CircuitTracer::new(cli.storage_mode());
    info!(
        "Tracing {} using a {}",
        cli.input_file.display(),
        tracer.mode
    );
    let traces = tracer.trace(&board);
    info!("Found {} shortest traces", traces.len());

    match cli.output_mode() {
        OutputMode::Console => render::console(out, &traces)?,
        OutputMode::BoardView => render::board_view(out, &board, &traces)?,
    }
    out.flush()?;
    Ok(())
}
