mod cli;
mod error;
mod logger;
mod orchestrator;
mod render;

pub use cli::Cli;
pub use logger::init_logger;
pub use orchestrator::run_app;
