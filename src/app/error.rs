use circuit_tracer::{BoardError, FormatError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("FormatError: {0}")]
    Format(FormatError),
    #[error("NotFoundError: {0}")]
    NotFound(BoardError),
    #[error("IoError: {0}")]
    Io(BoardError),
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::Format(format) => AppError::Format(format),
            err @ BoardError::NotFound { .. } => AppError::NotFound(err),
            err => AppError::Io(err),
        }
    }
}
