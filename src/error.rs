use std::path::PathBuf;
use thiserror::Error;

/// Reasons a board description is rejected while parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("header must hold a row count and a column count, found {0:?}")]
    InvalidHeader(String),
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
    #[error("board must contain exactly one start marker, found {0}")]
    StartCount(usize),
    #[error("board must contain exactly one end marker, found {0}")]
    EndCount(usize),
}

/// Failures that stop a board from being loaded at all.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("board file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read board file: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a trace could not be extended onto a cell. These are expected outcomes of
/// the search and are never reported to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("({row}, {col}) is not an open cell")]
    Blocked { row: i32, col: i32 },
    #[error("({row}, {col}) is already part of the trace")]
    Revisit { row: i32, col: i32 },
    #[error("({row}, {col}) is not next to the end of the trace")]
    NotAdjacent { row: i32, col: i32 },
}
