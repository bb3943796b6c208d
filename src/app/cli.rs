use circuit_tracer::StorageMode;
use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;

/// How the shortest traces are shown once found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// One coordinate list per trace.
    Console,
    /// The board redrawn once per trace with the trace marked.
    BoardView,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Finds all shortest traces between the start and end of a circuit board.",
    long_about = None
)]
#[command(group(ArgGroup::new("storage").required(true).args(["stack", "queue"])))]
#[command(group(ArgGroup::new("output").required(true).args(["console", "gui"])))]
pub struct Cli {
    /// Use a stack (depth-first search)
    #[arg(short = 's')]
    pub stack: bool,

    /// Use a queue (breadth-first search)
    #[arg(short = 'q')]
    pub queue: bool,

    /// Print every shortest trace to the console
    #[arg(short = 'c')]
    pub console: bool,

    /// Draw the board once for every shortest trace
    #[arg(short = 'g')]
    pub gui: bool,

    /// Board file: a `rows cols` header followed by rows of 1, 0, S and E markers
    pub input_file: PathBuf,

    /// Log more; repeat for debug and trace output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    pub fn storage_mode(&self) -> StorageMode {
        if self.queue {
            StorageMode::Queue
        } else {
            StorageMode::Stack
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.gui {
            OutputMode::BoardView
        } else {
            OutputMode::Console
        }
    }
}
