use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{self, Write};

/// Writes log records to stderr so they never mix with the traces printed on stdout.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = io::stderr().lock();
        let _ = match record.level() {
            Level::Error | Level::Warn => {
                writeln!(stderr, "{}: {}", record.level(), record.args())
            }
            _ => writeln!(
                stderr,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            ),
        };
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger. Can only succeed once per process.
pub fn init_logger(verbosity: u8, quiet: bool) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level_for(verbosity, quiet));
    Ok(())
}
